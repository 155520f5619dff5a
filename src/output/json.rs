// JSON rendering of the audit report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::audit::AuditReport;

/// Serialize the report as pretty-printed JSON.
pub fn to_json(report: &AuditReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize audit report")
}

/// Write the JSON report to `path`, creating parent directories as needed.
pub fn write_report(report: &AuditReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, to_json(report)?)
        .with_context(|| format!("failed to write report to {}", path.display()))
}
