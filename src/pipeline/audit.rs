// Audit pipeline: match every template of every grade and derive coverage.
//
// For each grade the matcher runs once per template against that grade's
// topics only. Covered topics are the distinct codes of all matches; every
// other topic in the grade is uncovered and reported under its section.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use crate::curriculum::{Template, TemplatesByGrade};
use crate::matching::{MatchResult, TopicMatcher};
use crate::outline::{GradeLevel, GradeOutline, Outline, Topic};

/// The topic a template was matched to, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedTopic {
    pub code: String,
    pub name: String,
    pub section: String,
    pub score: u32,
}

/// One template and what it matched, if anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMapping {
    pub template: Template,
    pub matched: Option<MatchedTopic>,
}

/// Uncovered topics of one section, in outline order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncoveredSection {
    pub section: String,
    pub topics: Vec<Topic>,
}

/// Audit result for a single grade.
#[derive(Debug, Clone, Serialize)]
pub struct GradeAudit {
    pub grade: GradeLevel,
    pub template_count: usize,
    pub topic_count: usize,
    /// One entry per template, in curriculum order
    pub mappings: Vec<TemplateMapping>,
    /// Distinct codes of every matched topic
    pub covered_codes: BTreeSet<String>,
    /// Sections that still have topics without templates
    pub uncovered: Vec<UncoveredSection>,
    /// matched templates * 100 / templates (integer, denominator at least 1)
    pub match_percent: usize,
    /// covered topics * 100 / topics (integer, denominator at least 1)
    pub coverage_percent: usize,
}

impl GradeAudit {
    pub fn matched(&self) -> impl Iterator<Item = (&Template, &MatchedTopic)> {
        self.mappings
            .iter()
            .filter_map(|m| m.matched.as_ref().map(|t| (&m.template, t)))
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &Template> {
        self.mappings
            .iter()
            .filter(|m| m.matched.is_none())
            .map(|m| &m.template)
    }

    pub fn matched_count(&self) -> usize {
        self.matched().count()
    }

    pub fn unmatched_count(&self) -> usize {
        self.template_count - self.matched_count()
    }

    pub fn uncovered_count(&self) -> usize {
        self.uncovered.iter().map(|s| s.topics.len()).sum()
    }
}

/// Totals across all grades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverallSummary {
    pub total_templates: usize,
    pub total_topics: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Official topics that no template matched (the coverage gap)
    pub uncovered: usize,
}

/// The complete audit, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub grades: Vec<GradeAudit>,
    pub summary: OverallSummary,
}

/// Integer percentage, treating an empty denominator as 1.
pub fn percent(count: usize, total: usize) -> usize {
    count * 100 / total.max(1)
}

/// Audit one grade's templates against that grade's topics.
pub fn audit_grade(
    grade: GradeLevel,
    grade_outline: &GradeOutline,
    templates: &[Template],
    matcher: &dyn TopicMatcher,
) -> GradeAudit {
    let mappings: Vec<TemplateMapping> = templates
        .iter()
        .map(|template| {
            let matched = match matcher.best_match(template, grade_outline) {
                MatchResult::Matched { topic, score } => Some(MatchedTopic {
                    code: topic.code.clone(),
                    name: topic.name.clone(),
                    section: topic.section.clone(),
                    score,
                }),
                MatchResult::Unmatched => None,
            };
            TemplateMapping {
                template: template.clone(),
                matched,
            }
        })
        .collect();

    let covered_codes: BTreeSet<String> = mappings
        .iter()
        .filter_map(|m| m.matched.as_ref().map(|t| t.code.clone()))
        .collect();

    let uncovered: Vec<UncoveredSection> = grade_outline
        .sections
        .iter()
        .filter_map(|section| {
            let topics: Vec<Topic> = section
                .topics
                .iter()
                .filter(|t| !covered_codes.contains(&t.code))
                .cloned()
                .collect();
            (!topics.is_empty()).then(|| UncoveredSection {
                section: section.name.clone(),
                topics,
            })
        })
        .collect();

    let template_count = templates.len();
    let topic_count = grade_outline.topic_count();
    let matched_count = mappings.iter().filter(|m| m.matched.is_some()).count();

    info!(
        grade = grade.year(),
        templates = template_count,
        topics = topic_count,
        matched = matched_count,
        covered = covered_codes.len(),
        "Grade audited"
    );

    GradeAudit {
        grade,
        template_count,
        topic_count,
        match_percent: percent(matched_count, template_count),
        coverage_percent: percent(covered_codes.len(), topic_count),
        mappings,
        covered_codes,
        uncovered,
    }
}

/// Run the audit for every supported grade.
pub fn run(
    outline: &Outline,
    templates: &TemplatesByGrade,
    matcher: &dyn TopicMatcher,
) -> AuditReport {
    let empty_outline = GradeOutline::default();

    let pb = ProgressBar::new(GradeLevel::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Matching [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut grades = Vec::with_capacity(GradeLevel::ALL.len());
    for grade in GradeLevel::ALL {
        pb.set_message(grade.to_string());
        let grade_outline = outline.grade(grade).unwrap_or(&empty_outline);
        let grade_templates = templates.get(&grade).map(Vec::as_slice).unwrap_or(&[]);
        grades.push(audit_grade(grade, grade_outline, grade_templates, matcher));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = grades.iter().fold(OverallSummary::default(), |mut acc, g| {
        acc.total_templates += g.template_count;
        acc.total_topics += g.topic_count;
        acc.matched += g.matched_count();
        acc.unmatched += g.unmatched_count();
        acc.uncovered += g.uncovered_count();
        acc
    });

    AuditReport {
        generated_at: Utc::now(),
        grades,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::KeywordMatcher;
    use crate::outline::parse;

    fn template(id: &str, skill: &str, stem: &str) -> Template {
        Template {
            template_id: id.to_string(),
            skill_id: "skill".to_string(),
            skill_name: skill.to_string(),
            strand: "Strand".to_string(),
            stem: stem.to_string(),
        }
    }

    #[test]
    fn test_percent_guards_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(3, 0), 300);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 2), 100);
    }

    #[test]
    fn test_audit_grade_splits_covered_and_uncovered() {
        let outline = parse(
            "Year 10\nAlgebra\nA.1\nQuadratic Functions and Parabolas\nA.2\nLinear inequalities\n\
             Geometry\nB.1\nCircle theorems",
        );
        let grade = outline.grade(GradeLevel::Year10).unwrap();
        let templates = vec![
            template("t1", "Quadratic equations", "solve using the quadratic formula"),
            template("t2", "Basic addition", "add two numbers"),
        ];

        let audit = audit_grade(GradeLevel::Year10, grade, &templates, &KeywordMatcher::default());

        assert_eq!(audit.template_count, 2);
        assert_eq!(audit.topic_count, 3);
        assert_eq!(audit.matched_count(), 1);
        assert_eq!(audit.unmatched_count(), 1);
        assert!(audit.covered_codes.contains("Y10.A.1"));
        assert_eq!(audit.uncovered_count(), 2);
        assert_eq!(audit.uncovered[0].section, "Algebra");
        assert_eq!(audit.uncovered[1].section, "Geometry");
        assert_eq!(audit.match_percent, 50);
        assert_eq!(audit.coverage_percent, 33);
    }

    #[test]
    fn test_run_covers_every_grade() {
        let outline = parse("Year 12\nCalculus\nA.1\nDifferentiate polynomials");
        let templates: TemplatesByGrade =
            GradeLevel::ALL.iter().map(|&g| (g, Vec::new())).collect();
        let report = run(&outline, &templates, &KeywordMatcher::default());

        assert_eq!(report.grades.len(), 3);
        assert_eq!(report.summary.total_templates, 0);
        assert_eq!(report.summary.total_topics, 1);
        assert_eq!(report.summary.uncovered, 1);
        assert_eq!(report.grades[0].match_percent, 0);
    }
}
