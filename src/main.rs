use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use curriculum_audit::config::Config;
use curriculum_audit::curriculum::Template;
use curriculum_audit::inputs::{read_curriculum, read_outline};
use curriculum_audit::matching::{KeywordMatcher, MatchResult, TemplateText, TopicMatcher};
use curriculum_audit::outline::GradeLevel;
use curriculum_audit::output::{json, terminal};
use curriculum_audit::pipeline::audit;

/// Curriculum audit: map curriculum templates onto official topics.
///
/// Reports which templates align with which official Year 10-12 topics,
/// which templates have no clear match, and which topics have no templates.
#[derive(Parser)]
#[command(name = "curriculum-audit", version, about)]
struct Cli {
    /// Official topic outline (overrides AUDIT_OUTLINE_PATH)
    #[arg(long, global = true)]
    outline: Option<PathBuf>,

    /// Curriculum JSON (overrides AUDIT_CURRICULUM_PATH)
    #[arg(long, global = true)]
    curriculum: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full audit and print the report
    Audit {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the parsed topic outline
    Outline {
        /// Only show this year level (10, 11 or 12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(10..=12))]
        grade: Option<u8>,
    },

    /// Score a skill name and stem against every topic of a year level
    Score {
        /// Year level to match within (10, 11 or 12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(10..=12))]
        grade: u8,

        /// Skill name, as it appears in the curriculum
        #[arg(long)]
        skill: String,

        /// Question stem text
        #[arg(long, default_value = "")]
        stem: String,

        /// How many topics to list (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Show configured inputs and what they contain
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("curriculum_audit=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.with_paths(cli.outline, cli.curriculum);

    match cli.command {
        Commands::Audit {
            json: as_json,
            output,
        } => {
            config.require_inputs()?;

            let outline = read_outline(&config.outline_path, &config.parser())?;
            let templates = read_curriculum(&config.curriculum_path, config.stem_chars)?;
            let matcher = KeywordMatcher::with_settings(config.match_settings());

            let report = audit::run(&outline, &templates, &matcher);
            info!(
                matched = report.summary.matched,
                unmatched = report.summary.unmatched,
                uncovered = report.summary.uncovered,
                "Audit complete"
            );

            if as_json {
                println!("{}", json::to_json(&report)?);
            } else {
                terminal::display_report(&report);
            }

            if let Some(path) = output {
                json::write_report(&report, &path)?;
                eprintln!("{}", format!("JSON report saved to: {}", path.display()).bold());
            }
        }

        Commands::Outline { grade } => {
            config.require_outline()?;
            let outline = read_outline(&config.outline_path, &config.parser())?;
            let only = grade.and_then(|g| GradeLevel::from_year(g as u32));
            terminal::display_outline(&outline, only);
        }

        Commands::Score {
            grade,
            skill,
            stem,
            top,
        } => {
            config.require_outline()?;
            let Some(grade) = GradeLevel::from_year(grade as u32) else {
                anyhow::bail!("Unsupported year level {grade}. Use 10, 11 or 12.");
            };

            let outline = read_outline(&config.outline_path, &config.parser())?;
            let matcher = KeywordMatcher::with_settings(config.match_settings());
            let text = TemplateText::new(&skill, &stem);

            let mut rows: Vec<_> = outline
                .topics(grade)
                .map(|t| (t.code.clone(), t.name.clone(), matcher.explain(&text, &t.name)))
                .filter(|(_, _, b)| b.score > 0)
                .collect();
            // Stable sort keeps outline order among equal scores
            rows.sort_by(|a, b| b.2.score.cmp(&a.2.score));
            rows.truncate(top);

            println!(
                "\n{}",
                format!("=== Scores for \"{skill}\" ({grade}) ===").bold()
            );
            terminal::display_breakdowns(&rows, config.match_threshold);

            let probe = Template {
                template_id: "cli".to_string(),
                skill_id: "cli".to_string(),
                skill_name: skill,
                strand: String::new(),
                stem,
            };
            let result = outline
                .grade(grade)
                .map(|g| matcher.best_match(&probe, g))
                .unwrap_or(MatchResult::Unmatched);

            match result {
                MatchResult::Matched { topic, score } => println!(
                    "\n{} {} - {} (score {score})",
                    "Best match:".green().bold(),
                    topic.code,
                    topic.name
                ),
                MatchResult::Unmatched => println!(
                    "\n{} nothing reached the threshold of {}",
                    "No match:".red().bold(),
                    config.match_threshold
                ),
            }
        }

        Commands::Status => {
            curriculum_audit::status::show(&config)?;
        }
    }

    Ok(())
}
