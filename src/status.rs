// Input status display: shows configured documents, their sizes, and what
// they parse to.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::inputs::{read_curriculum, read_outline};
use crate::outline::GradeLevel;

/// Display input status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    println!("Outline: {}", describe_file(&config.outline_path));
    if config.outline_path.is_file() {
        let outline = read_outline(&config.outline_path, &config.parser())?;
        for grade in GradeLevel::ALL {
            let sections = outline.grade(grade).map(|g| g.sections.len()).unwrap_or(0);
            println!(
                "  {}: {} sections, {} topics",
                grade,
                sections,
                outline.topic_count(grade)
            );
        }
    } else {
        println!("  Set AUDIT_OUTLINE_PATH or pass --outline");
    }

    println!("Curriculum: {}", describe_file(&config.curriculum_path));
    if config.curriculum_path.is_file() {
        let templates = read_curriculum(&config.curriculum_path, config.stem_chars)?;
        for (grade, list) in &templates {
            println!("  {}: {} templates", grade, list.len());
        }
    } else {
        println!("  Set AUDIT_CURRICULUM_PATH or pass --curriculum");
    }

    println!(
        "Settings: section cutoff {} chars, match threshold {}, stem {} chars",
        config.section_max_len, config.match_threshold, config.stem_chars
    );
    Ok(())
}

fn describe_file(path: &Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => format!("{} ({})", path.display(), format_bytes(meta.len())),
        Err(_) => format!("{} (not found)", path.display()),
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
