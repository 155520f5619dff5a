// Curriculum templates: the instructional units being audited.
//
// The curriculum document is JSON: years contain skills, skills contain
// templates. Only the fields the matcher needs are kept, and each template is
// flattened together with its parent skill's name, id and strand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::outline::GradeLevel;

/// Default number of stem characters kept per template.
pub const DEFAULT_STEM_CHARS: usize = 150;

/// A template flattened with its parent skill. Read-only once extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub template_id: String,
    pub skill_id: String,
    pub skill_name: String,
    pub strand: String,
    /// First `stem_chars` characters of the question stem
    pub stem: String,
}

/// Templates per supported grade, in document order. Every grade is present.
pub type TemplatesByGrade = BTreeMap<GradeLevel, Vec<Template>>;

/// Top-level shape of the curriculum document.
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumDocument {
    #[serde(default)]
    pub years: Vec<YearEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YearEntry {
    pub year: u32,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillEntry {
    #[serde(default = "unknown_id")]
    pub id: String,
    #[serde(default = "unknown_label")]
    pub name: String,
    #[serde(default = "unknown_label")]
    pub strand: String,
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateEntry {
    #[serde(default = "unknown_id")]
    pub id: String,
    #[serde(default)]
    pub stem: String,
}

fn unknown_id() -> String {
    "UNKNOWN".to_string()
}

fn unknown_label() -> String {
    "Unknown".to_string()
}

/// Flatten the document into templates grouped by grade.
///
/// Years outside the supported grades are skipped. Stems are cut to their
/// first `stem_chars` characters (not bytes).
pub fn extract_templates(doc: &CurriculumDocument, stem_chars: usize) -> TemplatesByGrade {
    let mut by_grade: TemplatesByGrade =
        GradeLevel::ALL.iter().map(|&g| (g, Vec::new())).collect();

    for year in &doc.years {
        let Some(grade) = GradeLevel::from_year(year.year) else {
            debug!(year = year.year, "Skipping unsupported year level");
            continue;
        };
        let bucket = by_grade.entry(grade).or_default();

        for skill in &year.skills {
            for template in &skill.templates {
                bucket.push(Template {
                    template_id: template.id.clone(),
                    skill_id: skill.id.clone(),
                    skill_name: skill.name.clone(),
                    strand: skill.strand.clone(),
                    stem: template.stem.chars().take(stem_chars).collect(),
                });
            }
        }
    }

    info!(
        year_10 = by_grade[&GradeLevel::Year10].len(),
        year_11 = by_grade[&GradeLevel::Year11].len(),
        year_12 = by_grade[&GradeLevel::Year12].len(),
        "Extracted curriculum templates"
    );
    by_grade
}
