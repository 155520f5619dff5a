use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::curriculum::DEFAULT_STEM_CHARS;
use crate::matching::MatchSettings;
use crate::outline::parser::DEFAULT_SECTION_MAX_LEN;
use crate::outline::OutlineParser;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Input paths
/// can also be overridden per command on the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Official topic outline, plain text (AUDIT_OUTLINE_PATH)
    pub outline_path: PathBuf,
    /// Curriculum templates, JSON (AUDIT_CURRICULUM_PATH)
    pub curriculum_path: PathBuf,
    /// Section header length cutoff for the outline parser
    pub section_max_len: usize,
    /// Minimum best score for a template to count as matched
    pub match_threshold: u32,
    /// How many stem characters each template keeps
    pub stem_chars: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; a value that is set but not a number is an
    /// error rather than silently falling back.
    pub fn load() -> Result<Self> {
        Ok(Self {
            outline_path: env::var("AUDIT_OUTLINE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./topics.txt")),
            curriculum_path: env::var("AUDIT_CURRICULUM_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./curriculum.json")),
            section_max_len: numeric_var("AUDIT_SECTION_MAX_LEN", DEFAULT_SECTION_MAX_LEN)?,
            match_threshold: numeric_var(
                "AUDIT_MATCH_THRESHOLD",
                MatchSettings::default().threshold,
            )?,
            stem_chars: numeric_var("AUDIT_STEM_CHARS", DEFAULT_STEM_CHARS)?,
        })
    }

    /// Apply path overrides from the command line.
    pub fn with_paths(mut self, outline: Option<PathBuf>, curriculum: Option<PathBuf>) -> Self {
        if let Some(path) = outline {
            self.outline_path = path;
        }
        if let Some(path) = curriculum {
            self.curriculum_path = path;
        }
        self
    }

    pub fn parser(&self) -> OutlineParser {
        OutlineParser::new(self.section_max_len)
    }

    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            threshold: self.match_threshold,
            ..MatchSettings::default()
        }
    }

    /// Check that the topic outline exists.
    /// Call this before any command that parses the outline.
    pub fn require_outline(&self) -> Result<()> {
        if !self.outline_path.is_file() {
            anyhow::bail!(
                "Topic outline not found at {}\n\
                 Set AUDIT_OUTLINE_PATH in your .env file or pass --outline.",
                self.outline_path.display()
            );
        }
        Ok(())
    }

    /// Check that both input documents exist.
    pub fn require_inputs(&self) -> Result<()> {
        self.require_outline()?;
        if !self.curriculum_path.is_file() {
            anyhow::bail!(
                "Curriculum file not found at {}\n\
                 Set AUDIT_CURRICULUM_PATH in your .env file or pass --curriculum.",
                self.curriculum_path.display()
            );
        }
        Ok(())
    }
}

fn numeric_var<T: FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a whole number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            outline_path: PathBuf::from("/nonexistent/topics.txt"),
            curriculum_path: PathBuf::from("/nonexistent/curriculum.json"),
            section_max_len: 60,
            match_threshold: 2,
            stem_chars: 150,
        }
    }

    #[test]
    fn test_path_overrides() {
        let config = base().with_paths(Some(PathBuf::from("a.txt")), None);
        assert_eq!(config.outline_path, PathBuf::from("a.txt"));
        assert_eq!(config.curriculum_path, PathBuf::from("/nonexistent/curriculum.json"));
    }

    #[test]
    fn test_require_inputs_reports_missing_outline() {
        let err = base().require_inputs().unwrap_err();
        assert!(err.to_string().contains("Topic outline not found"));
    }

    #[test]
    fn test_match_settings_keeps_bonus() {
        let mut config = base();
        config.match_threshold = 4;
        let settings = config.match_settings();
        assert_eq!(settings.threshold, 4);
        assert_eq!(settings.category_bonus, 5);
    }
}
