// Keyword overlap matcher: the default TopicMatcher.
//
// Every topic in the template's grade is scored independently:
//
//   score = category_bonus * (categories hit on both sides)
//         + |topic words ∩ skill-name words|
//
// A category is "hit on both sides" when one of its keywords is a substring
// of the topic name and one is a substring of the skill name or stem. Stem
// words only feed the category check, never the word overlap.
//
// The highest score wins, first-seen on ties. Anything below the threshold
// is reported as unmatched so single coincidental words don't count as
// curriculum alignment.

use serde::Serialize;

use crate::curriculum::Template;
use crate::outline::{GradeLevel, GradeOutline, Outline, Topic};

use super::keywords::{default_categories, KeywordCategory};
use super::tokens::word_set;
use super::traits::TopicMatcher;

/// Outcome of matching one template against one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult<'a> {
    Matched { topic: &'a Topic, score: u32 },
    Unmatched,
}

impl<'a> MatchResult<'a> {
    pub fn topic(&self) -> Option<&'a Topic> {
        match self {
            MatchResult::Matched { topic, .. } => Some(topic),
            MatchResult::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }
}

/// Tunable scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    /// Added once per keyword category hit on both sides (default 5)
    pub category_bonus: u32,
    /// Minimum best score for a match to be reported (default 2)
    pub threshold: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            category_bonus: 5,
            threshold: 2,
        }
    }
}

/// Lowercased template text, prepared once per template.
#[derive(Debug, Clone)]
pub struct TemplateText {
    pub skill: String,
    pub stem: String,
}

impl TemplateText {
    pub fn new(skill_name: &str, stem: &str) -> Self {
        Self {
            skill: skill_name.to_lowercase(),
            stem: stem.to_lowercase(),
        }
    }
}

impl From<&Template> for TemplateText {
    fn from(template: &Template) -> Self {
        TemplateText::new(&template.skill_name, &template.stem)
    }
}

/// How a single (template, topic) score was made up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Categories that fired on both sides, in table order
    pub categories: Vec<String>,
    /// Words shared by the topic name and skill name, sorted
    pub shared_words: Vec<String>,
    pub score: u32,
}

/// Scores templates against topics by keyword categories and word overlap.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pub categories: Vec<KeywordCategory>,
    pub settings: MatchSettings,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            settings: MatchSettings::default(),
        }
    }
}

impl KeywordMatcher {
    pub fn with_settings(settings: MatchSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Score one topic name against prepared template text.
    pub fn score_topic(&self, text: &TemplateText, topic_name: &str) -> u32 {
        self.explain(text, topic_name).score
    }

    /// Score one topic name and report which parts contributed.
    pub fn explain(&self, text: &TemplateText, topic_name: &str) -> ScoreBreakdown {
        let topic_lower = topic_name.to_lowercase();

        let categories: Vec<String> = self
            .categories
            .iter()
            .filter(|cat| {
                cat.hits(&topic_lower) && (cat.hits(&text.skill) || cat.hits(&text.stem))
            })
            .map(|cat| cat.name.clone())
            .collect();

        let topic_words = word_set(&topic_lower);
        let skill_words = word_set(&text.skill);
        let mut shared_words: Vec<String> = topic_words
            .intersection(&skill_words)
            .map(|w| w.to_string())
            .collect();
        shared_words.sort();

        let score =
            categories.len() as u32 * self.settings.category_bonus + shared_words.len() as u32;

        ScoreBreakdown {
            categories,
            shared_words,
            score,
        }
    }

    /// Best topic across an arbitrary topic sequence, before thresholding.
    /// Ties keep the first topic seen; a score of zero never wins.
    pub fn best_scoring<'a, I>(&self, text: &TemplateText, topics: I) -> Option<(&'a Topic, u32)>
    where
        I: IntoIterator<Item = &'a Topic>,
    {
        let mut best: Option<(&'a Topic, u32)> = None;
        for topic in topics {
            let score = self.score_topic(text, &topic.name);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((topic, score));
            }
        }
        best
    }

    /// Match a template against one grade of a parsed outline. A grade with
    /// no outline entry yields `Unmatched`.
    pub fn match_in<'a>(
        &self,
        template: &Template,
        outline: &'a Outline,
        grade: GradeLevel,
    ) -> MatchResult<'a> {
        match outline.grade(grade) {
            Some(grade_outline) => self.best_match(template, grade_outline),
            None => MatchResult::Unmatched,
        }
    }
}

impl TopicMatcher for KeywordMatcher {
    fn best_match<'a>(&self, template: &Template, grade: &'a GradeOutline) -> MatchResult<'a> {
        let text = TemplateText::from(template);
        match self.best_scoring(&text, grade.topics()) {
            Some((topic, score)) if score >= self.settings.threshold => {
                MatchResult::Matched { topic, score }
            }
            _ => MatchResult::Unmatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(code: &str, name: &str) -> Topic {
        Topic {
            code: code.to_string(),
            name: name.to_string(),
            section: "Test".to_string(),
        }
    }

    fn template(skill: &str, stem: &str) -> Template {
        Template {
            template_id: "t".to_string(),
            skill_id: "s".to_string(),
            skill_name: skill.to_string(),
            strand: "Algebra".to_string(),
            stem: stem.to_string(),
        }
    }

    #[test]
    fn test_quadratic_boost_plus_overlap() {
        let matcher = KeywordMatcher::default();
        let text = TemplateText::new("Quadratic equations", "solve for x using quadratic formula");
        let b = matcher.explain(&text, "Quadratic Functions and Parabolas");
        assert_eq!(b.categories, vec!["quadratic".to_string()]);
        assert_eq!(b.shared_words, vec!["quadratic".to_string()]);
        assert_eq!(b.score, 6);
    }

    #[test]
    fn test_unrelated_scores_zero() {
        let matcher = KeywordMatcher::default();
        let text = TemplateText::new("Basic addition", "add two numbers");
        assert_eq!(matcher.score_topic(&text, "Trigonometric Ratios"), 0);
    }

    #[test]
    fn test_stem_words_do_not_count_toward_overlap() {
        let matcher = KeywordMatcher::default();
        let text = TemplateText::new("Skill", "rounding numbers");
        assert_eq!(matcher.score_topic(&text, "Rounding numbers"), 0);
    }

    #[test]
    fn test_stem_feeds_category_boost() {
        let matcher = KeywordMatcher::default();
        let text = TemplateText::new("Shapes", "find the volume of a cylinder");
        assert_eq!(matcher.score_topic(&text, "Volume of prisms"), 5);
    }

    #[test]
    fn test_multiple_categories_accumulate() {
        let matcher = KeywordMatcher::default();
        let text = TemplateText::new("Cone volume", "surface area of a cone");
        // volume + surface categories, shared word "volume"
        let b = matcher.explain(&text, "Volume and surface area of cones");
        assert_eq!(b.categories, vec!["volume".to_string(), "surface".to_string()]);
        assert_eq!(b.score, 11);
    }

    #[test]
    fn test_ties_keep_first_topic() {
        let matcher = KeywordMatcher::default();
        let topics = vec![topic("Y10.A.1", "Linear graphs"), topic("Y10.A.2", "Linear graphs")];
        let text = TemplateText::new("Linear graphs", "");
        let (best, score) = matcher.best_scoring(&text, &topics).unwrap();
        assert_eq!(best.code, "Y10.A.1");
        assert_eq!(score, 2);
    }

    #[test]
    fn test_single_word_overlap_is_unmatched() {
        let mut grade = GradeOutline::default();
        let idx = grade.section_index("Number");
        grade.sections[idx].topics.push(topic("Y10.N.1", "Rounding decimals"));

        let matcher = KeywordMatcher::default();
        let result = matcher.best_match(&template("Decimals practice", ""), &grade);
        assert_eq!(result, MatchResult::Unmatched);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let mut grade = GradeOutline::default();
        let idx = grade.section_index("Number");
        grade.sections[idx].topics.push(topic("Y10.N.1", "Rounding decimals"));

        let matcher = KeywordMatcher::with_settings(MatchSettings {
            threshold: 1,
            ..MatchSettings::default()
        });
        let result = matcher.best_match(&template("Decimals practice", ""), &grade);
        assert_eq!(result.topic().map(|t| t.code.as_str()), Some("Y10.N.1"));
    }

    #[test]
    fn test_missing_grade_is_unmatched() {
        let mut outline = Outline::default();
        outline.grades.remove(&GradeLevel::Year12);
        let matcher = KeywordMatcher::default();
        let result = matcher.match_in(&template("Quadratics", ""), &outline, GradeLevel::Year12);
        assert!(!result.is_matched());
    }
}
