// The parsed topic hierarchy: grade level -> section -> topic.
//
// Everything here is built once by the parser and only read afterwards.
// Sections keep the order they were first seen in so reports can group
// uncovered topics the same way the outline document does.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three supported school years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GradeLevel {
    Year10,
    Year11,
    Year12,
}

impl GradeLevel {
    /// All supported grades, in report order.
    pub const ALL: [GradeLevel; 3] = [GradeLevel::Year10, GradeLevel::Year11, GradeLevel::Year12];

    /// Map a year number onto a supported grade. Anything else is `None`.
    pub fn from_year(year: u32) -> Option<Self> {
        match year {
            10 => Some(GradeLevel::Year10),
            11 => Some(GradeLevel::Year11),
            12 => Some(GradeLevel::Year12),
            _ => None,
        }
    }

    pub fn year(&self) -> u8 {
        match self {
            GradeLevel::Year10 => 10,
            GradeLevel::Year11 => 11,
            GradeLevel::Year12 => 12,
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.year())
    }
}

impl From<GradeLevel> for u8 {
    fn from(grade: GradeLevel) -> Self {
        grade.year()
    }
}

impl TryFrom<u8> for GradeLevel {
    type Error = String;

    fn try_from(year: u8) -> Result<Self, Self::Error> {
        GradeLevel::from_year(year as u32).ok_or_else(|| format!("unsupported year level {year}"))
    }
}

/// An official curriculum topic, e.g. `Y10.A.1 Solving linear equations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Globally unique code: `Y<grade>.<letter-code>.<number>`
    pub code: String,
    pub name: String,
    /// Name of the owning section
    pub section: String,
}

/// A named group of topics within one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub topics: Vec<Topic>,
}

/// All sections for a single grade, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeOutline {
    pub sections: Vec<Section>,
}

impl GradeOutline {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Return the index of the named section, creating it if this is the
    /// first time the name has been seen for this grade.
    pub(crate) fn section_index(&mut self, name: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            return idx;
        }
        self.sections.push(Section {
            name: name.to_string(),
            topics: Vec::new(),
        });
        self.sections.len() - 1
    }

    /// Every topic in traversal order (section order, then topic order).
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.sections.iter().flat_map(|s| s.topics.iter())
    }

    pub fn topic_count(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.topics().any(|t| t.code == code)
    }
}

/// The full parsed outline. Every supported grade is present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub grades: BTreeMap<GradeLevel, GradeOutline>,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            grades: GradeLevel::ALL
                .iter()
                .map(|&g| (g, GradeOutline::default()))
                .collect(),
        }
    }
}

impl Outline {
    pub fn grade(&self, grade: GradeLevel) -> Option<&GradeOutline> {
        self.grades.get(&grade)
    }

    pub(crate) fn grade_mut(&mut self, grade: GradeLevel) -> &mut GradeOutline {
        self.grades.entry(grade).or_default()
    }

    /// Topics for one grade in traversal order. Empty for a grade with no topics.
    pub fn topics(&self, grade: GradeLevel) -> impl Iterator<Item = &Topic> {
        self.grades.get(&grade).into_iter().flat_map(|g| g.topics())
    }

    pub fn topic_count(&self, grade: GradeLevel) -> usize {
        self.grade(grade).map(|g| g.topic_count()).unwrap_or(0)
    }

    pub fn total_topics(&self) -> usize {
        self.grades.values().map(|g| g.topic_count()).sum()
    }
}
