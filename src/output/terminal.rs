// Colored terminal output for the audit report, outlines and score breakdowns.

use colored::Colorize;

use crate::matching::ScoreBreakdown;
use crate::outline::{GradeLevel, Outline};
use crate::pipeline::audit::{AuditReport, GradeAudit, OverallSummary};

const WIDE_RULE: usize = 100;

/// Display the full audit report in the terminal.
pub fn display_report(report: &AuditReport) {
    println!("{}", "=".repeat(WIDE_RULE));
    println!("{}", "CURRICULUM AUDIT REPORT".bold());
    println!("Matching curriculum templates to official topics (Years 10-12)");
    println!(
        "{}",
        format!("Generated {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
    );
    println!("{}", "=".repeat(WIDE_RULE));

    for grade in &report.grades {
        display_grade(grade);
    }

    display_summary(&report.summary);
}

fn heading(title: &str) {
    println!("\n{}", "-".repeat(WIDE_RULE).dimmed());
    println!("{}", title.bold());
    println!("{}\n", "-".repeat(WIDE_RULE).dimmed());
}

/// Display one grade: mappings, unmatched templates, uncovered topics, summary.
pub fn display_grade(audit: &GradeAudit) {
    let year = audit.grade.year();

    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("{}", format!("YEAR {year} ANALYSIS").bold());
    println!("{}\n", "=".repeat(WIDE_RULE));
    println!("Total templates in curriculum: {}", audit.template_count);
    println!("Total official topics: {}", audit.topic_count);

    heading("TEMPLATE -> OFFICIAL TOPIC MAPPING");
    for (template, topic) in audit.matched() {
        println!("{} {}", "[MATCH]".green().bold(), template.template_id);
        println!("  Skill: {}", template.skill_name);
        println!("  -> Official topic: {} - {}", topic.code.cyan(), topic.name);
        println!("  Section: {}", topic.section);
        println!("  Score: {}", topic.score);
        println!();
    }

    if audit.unmatched_count() > 0 {
        heading(&format!(
            "TEMPLATES WITHOUT CLEAR MATCH ({} templates)",
            audit.unmatched_count()
        ));
        for template in audit.unmatched() {
            println!("{} {}", "[NO MATCH]".red().bold(), template.template_id);
            println!("  Skill: {}", template.skill_name);
            println!("  Strand: {}", template.strand);
            println!("  Stem: {}", template.stem.dimmed());
            println!();
        }
    }

    heading("OFFICIAL TOPICS WITH NO TEMPLATES");
    for section in &audit.uncovered {
        println!("\n{}:", section.section.bold());
        for topic in &section.topics {
            println!("  - {} - {}", topic.code.yellow(), topic.name);
        }
    }

    heading(&format!("YEAR {year} SUMMARY"));
    println!(
        "Templates matched to official topics: {} / {} ({}%)",
        audit.matched_count(),
        audit.template_count,
        audit.match_percent
    );
    println!("Templates without clear match: {}", audit.unmatched_count());
    println!(
        "Official topics covered: {} / {} ({}%)",
        audit.covered_codes.len(),
        audit.topic_count,
        audit.coverage_percent
    );
    println!("Official topics missing templates: {}", audit.uncovered_count());
}

/// Display the totals across all grades and the follow-up recommendations.
pub fn display_summary(summary: &OverallSummary) {
    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("{}", "OVERALL SUMMARY (Years 10-12)".bold());
    println!("{}\n", "=".repeat(WIDE_RULE));

    println!("Total curriculum templates: {}", summary.total_templates);
    println!("Total official topics: {}", summary.total_topics);
    println!("Templates matched: {}", summary.matched.to_string().green());
    println!("Templates unmatched: {}", summary.unmatched.to_string().red());
    println!("Topics without templates: {}", summary.uncovered.to_string().yellow());
    println!(
        "Coverage gap: {} official topics need templates",
        summary.uncovered
    );

    println!("\n{}", "RECOMMENDATIONS:".bold());
    println!("1. Create templates for all missing official topics");
    println!("2. Update skill IDs to match official curriculum codes (e.g., Y10.A.1, Y10.B.2)");
    println!("3. Review unmatched templates and either:");
    println!("   - Map them to existing official topics with better keywords");
    println!("   - Remove them if they don't align with the curriculum");
    println!();
}

/// Display the parsed outline, optionally restricted to one grade.
pub fn display_outline(outline: &Outline, only: Option<GradeLevel>) {
    for (grade, grade_outline) in &outline.grades {
        if only.is_some_and(|g| g != *grade) {
            continue;
        }

        println!(
            "\n{}",
            format!("=== {} ({} topics) ===", grade, grade_outline.topic_count()).bold()
        );
        if grade_outline.sections.is_empty() {
            println!("  {}", "No sections found".dimmed());
            continue;
        }
        for section in &grade_outline.sections {
            println!("\n  {}", section.name.bold());
            if section.topics.is_empty() {
                println!("    {}", "(no topics)".dimmed());
            }
            for topic in &section.topics {
                println!("    {:<12} {}", topic.code.cyan(), topic.name);
            }
        }
    }
    println!();
}

/// Display how a template scored against each topic it could plausibly match.
pub fn display_breakdowns(rows: &[(String, String, ScoreBreakdown)], threshold: u32) {
    if rows.is_empty() {
        println!("No topic scored above zero.");
        return;
    }

    println!(
        "  {:<12} {:>5}  {:<40} {}",
        "Code".dimmed(),
        "Score".dimmed(),
        "Topic".dimmed(),
        "Why".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for (code, name, breakdown) in rows {
        let score = if breakdown.score >= threshold {
            breakdown.score.to_string().green().bold()
        } else {
            breakdown.score.to_string().dimmed()
        };
        let mut why = Vec::new();
        if !breakdown.categories.is_empty() {
            why.push(format!("categories: {}", breakdown.categories.join(", ")));
        }
        if !breakdown.shared_words.is_empty() {
            why.push(format!("words: {}", breakdown.shared_words.join(", ")));
        }
        println!(
            "  {:<12} {:>5}  {:<40} {}",
            code,
            score,
            super::truncate_chars(name, 37),
            why.join("; ").dimmed()
        );
    }
}
