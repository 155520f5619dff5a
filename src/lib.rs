// Curriculum audit: map curriculum templates onto an official topic outline
//
// This is the library root. Each module corresponds to a stage of the audit:
// parse the outline, load templates, match, then report.

pub mod config;
pub mod curriculum;
pub mod error;
pub mod inputs;
pub mod matching;
pub mod outline;
pub mod output;
pub mod pipeline;
pub mod status;
