// Errors raised while supplying the two input documents.
//
// Parsing, matching and auditing never fail; only reading the files can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The official topic outline could not be read.
    #[error("failed to read topic outline {path}: {source}")]
    OutlineRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The curriculum document could not be read.
    #[error("failed to read curriculum {path}: {source}")]
    CurriculumRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The curriculum document is not valid curriculum JSON.
    #[error("failed to parse curriculum {path}: {source}")]
    CurriculumParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
