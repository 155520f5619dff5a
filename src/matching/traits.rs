// Topic matcher trait: swap-ready abstraction.
//
// The audit pipeline only needs "best topic for this template within this
// grade". The default implementation is keyword overlap scoring, but a
// different strategy can be dropped in without touching the pipeline.

use crate::curriculum::Template;
use crate::outline::GradeOutline;

use super::keyword::MatchResult;

/// Trait for finding the best official topic for a template.
pub trait TopicMatcher {
    /// Pick the best topic in `grade` for `template`, or `Unmatched` if
    /// nothing clears the acceptance threshold. Must not depend on any
    /// state left behind by earlier calls.
    fn best_match<'a>(&self, template: &Template, grade: &'a GradeOutline) -> MatchResult<'a>;
}
