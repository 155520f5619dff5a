// Template-to-topic matching: keyword categories and word overlap scoring.

pub mod keyword;
pub mod keywords;
pub mod tokens;
pub mod traits;

pub use keyword::{KeywordMatcher, MatchResult, MatchSettings, ScoreBreakdown, TemplateText};
pub use traits::TopicMatcher;
