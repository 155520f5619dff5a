// Line classification rules for the outline parser.
//
// The outline document has no formal grammar, so every line is classified by
// its shape alone. Rules are evaluated in order and the first one that fires
// decides the line's kind. Order matters: grade headers must win over section
// headers, and section detection must never fire on a topic code line.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::model::GradeLevel;

/// One or two uppercase letters, a dot, one or more digits (`A.1`, `AB.12`).
static TOPIC_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}\.[0-9]+$").expect("valid topic code pattern"));

/// Opening phrase of the official document, which introduces Year 10.
pub const YEAR_10_PREAMBLE: &str = "Here is full year 10";

/// Shortest line accepted as a section name.
pub const MIN_SECTION_LEN: usize = 3;

/// What a single (trimmed) outline line means to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Switches the current grade.
    Grade(GradeLevel),
    /// Opens (or re-opens) a section under the current grade.
    Section(String),
    /// Looked like a section header but is too short to be one. Consumed.
    ShortHeader,
    /// Starts a topic record; the next line holds the topic name.
    TopicCode(String),
    /// Matched no rule.
    Ignored,
}

/// Parser state a rule may look at. Rules never change it.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub grade: Option<GradeLevel>,
    /// Section names must be strictly shorter than this (in characters)
    pub section_max_len: usize,
}

/// A named predicate + classification, evaluated in list order.
pub struct LineRule {
    pub name: &'static str,
    pub classify: fn(&str, &RuleContext) -> Option<LineKind>,
}

/// The rule list, in precedence order.
pub const RULES: &[LineRule] = &[
    LineRule {
        name: "grade",
        classify: classify_grade,
    },
    LineRule {
        name: "section",
        classify: classify_section,
    },
    LineRule {
        name: "topic-code",
        classify: classify_topic_code,
    },
];

/// Classify a trimmed line. Falls back to `Ignored` when no rule fires.
pub fn classify(line: &str, ctx: &RuleContext) -> LineKind {
    RULES
        .iter()
        .find_map(|rule| (rule.classify)(line, ctx))
        .unwrap_or(LineKind::Ignored)
}

/// Does the line look exactly like a bare topic code?
pub fn is_topic_code(line: &str) -> bool {
    TOPIC_CODE_RE.is_match(line)
}

/// True when the line has at least one cased character and all of its cased
/// characters are upper-case. A line with no letters at all is not upper-case.
pub fn is_all_upper(line: &str) -> bool {
    let mut saw_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            saw_cased = true;
        }
    }
    saw_cased
}

fn classify_grade(line: &str, _ctx: &RuleContext) -> Option<LineKind> {
    let lower = line.to_lowercase();
    let grade = if lower.contains("year 10") || line.starts_with(YEAR_10_PREAMBLE) {
        GradeLevel::Year10
    } else if lower.contains("year 11") || lower.contains("and year 11") {
        GradeLevel::Year11
    } else if lower.contains("year 12") {
        GradeLevel::Year12
    } else {
        return None;
    };
    Some(LineKind::Grade(grade))
}

fn classify_section(line: &str, ctx: &RuleContext) -> Option<LineKind> {
    ctx.grade?;

    let starts_with_digit = line.chars().next().is_some_and(|c| c.is_numeric());
    if line.is_empty()
        || starts_with_digit
        || is_all_upper(line)
        || line.contains(':')
        || line.chars().count() >= ctx.section_max_len
    {
        return None;
    }

    if line.chars().count() < MIN_SECTION_LEN || is_topic_code(line) {
        return Some(LineKind::ShortHeader);
    }
    Some(LineKind::Section(line.to_string()))
}

fn classify_topic_code(line: &str, ctx: &RuleContext) -> Option<LineKind> {
    ctx.grade?;
    is_topic_code(line).then(|| LineKind::TopicCode(line.to_string()))
}
