// Unit tests for template matching.
//
// Tests scoring of isolated (template, topic) pairs, best-topic selection
// within a grade, and the acceptance threshold.

use curriculum_audit::curriculum::Template;
use curriculum_audit::matching::keywords::default_categories;
use curriculum_audit::matching::tokens::word_set;
use curriculum_audit::matching::{
    KeywordMatcher, MatchResult, MatchSettings, TemplateText, TopicMatcher,
};
use curriculum_audit::outline::{parse, GradeLevel, Outline};

fn template(skill: &str, stem: &str) -> Template {
    Template {
        template_id: "T-1".to_string(),
        skill_id: "S-1".to_string(),
        skill_name: skill.to_string(),
        strand: "Number".to_string(),
        stem: stem.to_string(),
    }
}

fn year_10() -> Outline {
    parse(
        "Year 10\n\
         Algebra\n\
         A.1\n\
         Quadratic Functions and Parabolas\n\
         A.2\n\
         Trigonometric Ratios\n\
         Measurement\n\
         B.1\n\
         Volume of cylinders and cones\n\
         B.2\n\
         Area of a circle",
    )
}

// ============================================================
// Pair scoring
// ============================================================

#[test]
fn quadratic_template_scores_at_least_six() {
    let matcher = KeywordMatcher::default();
    let text = TemplateText::new("Quadratic equations", "solve for x using quadratic formula");
    assert!(matcher.score_topic(&text, "Quadratic Functions and Parabolas") >= 6);
}

#[test]
fn addition_template_scores_zero_against_trig() {
    let matcher = KeywordMatcher::default();
    let text = TemplateText::new("Basic addition", "add two numbers");
    assert_eq!(matcher.score_topic(&text, "Trigonometric Ratios"), 0);
}

#[test]
fn scoring_ignores_case() {
    let matcher = KeywordMatcher::default();
    let upper = TemplateText::new("AREA OF A CIRCLE", "");
    let lower = TemplateText::new("area of a circle", "");
    assert_eq!(
        matcher.score_topic(&upper, "Area of a circle"),
        matcher.score_topic(&lower, "area of a circle")
    );
}

#[test]
fn category_needs_both_sides() {
    let matcher = KeywordMatcher::default();
    // Template mentions cylinders, topic is about ratios: no volume bonus
    let text = TemplateText::new("Cylinders", "volume of a cylinder");
    assert_eq!(matcher.score_topic(&text, "Ratios and rates"), 0);
}

#[test]
fn custom_bonus_is_applied_per_category() {
    let matcher = KeywordMatcher::with_settings(MatchSettings {
        category_bonus: 10,
        threshold: 2,
    });
    let text = TemplateText::new("Shapes", "cone volume");
    assert_eq!(matcher.score_topic(&text, "Volume of cylinders and cones"), 10);
}

#[test]
fn overlap_counts_distinct_words_once() {
    let matcher = KeywordMatcher::default();
    let text = TemplateText::new("ratio ratio ratio", "");
    assert_eq!(matcher.score_topic(&text, "Ratio and ratio tables"), 1);
}

// ============================================================
// Best topic within a grade
// ============================================================

#[test]
fn best_match_picks_highest_score() {
    let outline = year_10();
    let matcher = KeywordMatcher::default();
    let result = matcher.match_in(
        &template("Volume of cones", "find the volume of the cone"),
        &outline,
        GradeLevel::Year10,
    );
    match result {
        MatchResult::Matched { topic, score } => {
            assert_eq!(topic.code, "Y10.B.1");
            assert!(score >= 7);
        }
        MatchResult::Unmatched => panic!("expected a match"),
    }
}

#[test]
fn unrelated_template_is_unmatched() {
    let outline = year_10();
    let matcher = KeywordMatcher::default();
    let result = matcher.match_in(
        &template("Basic addition", "add two numbers"),
        &outline,
        GradeLevel::Year10,
    );
    assert_eq!(result, MatchResult::Unmatched);
}

#[test]
fn other_grades_are_not_searched() {
    let outline = year_10();
    let matcher = KeywordMatcher::default();
    let result = matcher.match_in(
        &template("Quadratic equations", "solve the quadratic"),
        &outline,
        GradeLevel::Year11,
    );
    assert_eq!(result, MatchResult::Unmatched);
}

#[test]
fn matched_scores_respect_threshold() {
    let outline = year_10();
    let grade = outline.grade(GradeLevel::Year10).unwrap();
    let matcher = KeywordMatcher::default();
    let skills = [
        ("Circles", "find the radius"),
        ("Ratios", "simplify the ratio"),
        ("Quadratic equations", "factorise the quadratic"),
        ("Area", ""),
        ("Money", "count the coins"),
    ];

    for (skill, stem) in skills {
        let t = template(skill, stem);
        match matcher.best_match(&t, grade) {
            MatchResult::Matched { score, .. } => assert!(score >= 2),
            MatchResult::Unmatched => {
                let text = TemplateText::from(&t);
                for topic in grade.topics() {
                    assert!(matcher.score_topic(&text, &topic.name) < 2);
                }
            }
        }
    }
}

#[test]
fn matching_is_deterministic() {
    let outline = year_10();
    let matcher = KeywordMatcher::default();
    let t = template("Trigonometry", "use tan to find the angle");
    let first = matcher.match_in(&t, &outline, GradeLevel::Year10);
    for _ in 0..5 {
        assert_eq!(matcher.match_in(&t, &outline, GradeLevel::Year10), first);
    }
}

// ============================================================
// Tokens and category table
// ============================================================

#[test]
fn tokens_split_on_punctuation() {
    let words = word_set("surface-area (cm²)");
    assert!(words.contains("surface"));
    assert!(words.contains("area"));
    assert!(words.contains("cm²"));
}

#[test]
fn every_category_has_keywords() {
    for category in default_categories() {
        assert!(!category.keywords.is_empty(), "{} is empty", category.name);
        assert!(category
            .keywords
            .iter()
            .all(|k| k.chars().all(|c| !c.is_uppercase())));
    }
}
