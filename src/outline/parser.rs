// Outline parser: a single forward fold over the document's lines.
//
// The only state carried between lines is the current grade, the current
// section, and a topic code waiting for its name line. Each line is
// classified by `rules::classify` and the resulting kind is applied to the
// accumulator.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::model::{GradeLevel, Outline, Topic};
use super::rules::{self, LineKind, RuleContext};

/// Default cutoff for section header length. Topic names tend to be longer
/// sentences and must not be mistaken for headers.
pub const DEFAULT_SECTION_MAX_LEN: usize = 60;

/// Parses the informal official topic outline into an `Outline`.
#[derive(Debug, Clone)]
pub struct OutlineParser {
    /// Lines at or above this many characters are never section headers
    pub section_max_len: usize,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self {
            section_max_len: DEFAULT_SECTION_MAX_LEN,
        }
    }
}

impl OutlineParser {
    pub fn new(section_max_len: usize) -> Self {
        Self { section_max_len }
    }

    /// Parse outline text. Never fails: malformed or truncated topic records
    /// are dropped and parsing carries on.
    pub fn parse(&self, text: &str) -> Outline {
        let state = text
            .lines()
            .map(str::trim)
            .fold(ParseState::new(self.section_max_len), ParseState::step);

        if let Some(code) = &state.pending_code {
            debug!(code = %code, "Outline ends on a topic code with no name line");
        }

        let outline = state.outline;
        info!(
            year_10 = outline.topic_count(GradeLevel::Year10),
            year_11 = outline.topic_count(GradeLevel::Year11),
            year_12 = outline.topic_count(GradeLevel::Year12),
            "Parsed official topic outline"
        );
        outline
    }
}

/// Parse with default settings.
pub fn parse(text: &str) -> Outline {
    OutlineParser::default().parse(text)
}

struct ParseState {
    section_max_len: usize,
    grade: Option<GradeLevel>,
    section: Option<String>,
    /// Full topic code (`Y10.A.1`) whose name is on the next line
    pending_code: Option<String>,
    seen_codes: HashSet<String>,
    outline: Outline,
}

impl ParseState {
    fn new(section_max_len: usize) -> Self {
        Self {
            section_max_len,
            grade: None,
            section: None,
            pending_code: None,
            seen_codes: HashSet::new(),
            outline: Outline::default(),
        }
    }

    fn step(mut self, line: &str) -> Self {
        // A pending topic code swallows this line as its name, whatever it looks like.
        if let Some(code) = self.pending_code.take() {
            self.record_topic(code, line);
            return self;
        }

        let ctx = RuleContext {
            grade: self.grade,
            section_max_len: self.section_max_len,
        };

        match rules::classify(line, &ctx) {
            LineKind::Grade(grade) => {
                self.grade = Some(grade);
            }
            LineKind::Section(name) => {
                // classify_section only fires with a grade set
                if let Some(grade) = self.grade {
                    self.outline.grade_mut(grade).section_index(&name);
                    self.section = Some(name);
                }
            }
            LineKind::TopicCode(code) => {
                if let Some(grade) = self.grade {
                    self.pending_code = Some(format!("Y{}.{}", grade.year(), code));
                }
            }
            LineKind::ShortHeader | LineKind::Ignored => {}
        }
        self
    }

    fn record_topic(&mut self, code: String, name: &str) {
        let (Some(grade), Some(section)) = (self.grade, self.section.as_deref()) else {
            debug!(code = %code, "Topic code before any section header, dropping");
            return;
        };

        if !self.seen_codes.insert(code.clone()) {
            warn!(code = %code, "Duplicate topic code in outline, keeping the first");
            return;
        }

        let grade_outline = self.outline.grade_mut(grade);
        let idx = grade_outline.section_index(section);
        grade_outline.sections[idx].topics.push(Topic {
            code,
            name: name.to_string(),
            section: section.to_string(),
        });
    }
}
