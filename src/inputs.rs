// Loading the two input documents from disk.
//
// Files are read fully into memory and closed before parsing starts, so no
// handle outlives a failed parse.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::curriculum::{extract_templates, CurriculumDocument, TemplatesByGrade};
use crate::error::AuditError;
use crate::outline::{Outline, OutlineParser};

/// Read and parse the official topic outline (UTF-8 text).
pub fn read_outline(path: &Path, parser: &OutlineParser) -> Result<Outline, AuditError> {
    let text = fs::read_to_string(path).map_err(|source| AuditError::OutlineRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "Read topic outline");
    Ok(parser.parse(&text))
}

/// Read the curriculum JSON and flatten it into templates per grade.
pub fn read_curriculum(path: &Path, stem_chars: usize) -> Result<TemplatesByGrade, AuditError> {
    let json = fs::read_to_string(path).map_err(|source| AuditError::CurriculumRead {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: CurriculumDocument =
        serde_json::from_str(&json).map_err(|source| AuditError::CurriculumParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), years = doc.years.len(), "Read curriculum document");
    Ok(extract_templates(&doc, stem_chars))
}
