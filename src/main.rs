//! Placement prep: job description analysis and readiness planning tool

mod analysis;
mod cli;
mod config;
mod error;
mod intel;
mod model;
mod output;
mod storage;
mod tracking;

use analysis::engine::{AnalysisEngine, AnalysisRequest};
use clap::Parser;
use cli::{
    ChecklistAction, Cli, Commands, ConfidenceAction, ConfigAction, HistoryAction, ShipAction,
};
use colored::Colorize;
use config::Config;
use error::{PlacementPrepError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use output::formatter::ReportRenderer;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;
use storage::history::HistoryStore;
use storage::kv::{JsonFileStore, KeyValueStore};
use tracking::checklist::{ChecklistTracker, TEST_ITEMS};
use tracking::proof::{validate_url, ProofTracker, BUILD_STEPS};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    config.ensure_data_dir()?;
    Ok(Arc::new(JsonFileStore::new(config.data_dir().clone())))
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            jd,
            company,
            role,
            output,
            save,
            no_delay,
        } => {
            info!("Starting job description analysis");

            let output_format =
                cli::parse_output_format(&output).map_err(PlacementPrepError::InvalidInput)?;

            let jd_text = read_jd_text(&jd)?;
            if jd_text.trim().is_empty() {
                return Err(PlacementPrepError::InvalidInput(
                    "job description text is required".to_string(),
                ));
            }

            let company = company.unwrap_or_default();
            let role = role.unwrap_or_default();

            println!("🚀 Placement readiness analysis");
            if !company.is_empty() {
                println!("🏢 Company: {}", company);
            }
            if !role.is_empty() {
                println!("💼 Role: {}", role);
            }
            println!("📄 JD length: {} characters", jd_text.chars().count());

            if jd_text.chars().count() < config.analysis.short_jd_warning_chars {
                println!(
                    "{}",
                    format!(
                        "⚠️  Short JD (<{} chars) - results may be thin. Paste the full posting for better coverage.",
                        config.analysis.short_jd_warning_chars
                    )
                    .yellow()
                );
            }

            // Cosmetic pause so the spinner is visible; the pipeline itself
            // is synchronous.
            if !no_delay && config.analysis.processing_delay_ms > 0 {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.set_message("Analyzing job description...");
                spinner.enable_steady_tick(Duration::from_millis(80));
                tokio::time::sleep(Duration::from_millis(config.analysis.processing_delay_ms))
                    .await;
                spinner.finish_and_clear();
            }

            let engine = AnalysisEngine::new()?;
            let outcome = engine.analyze(&AnalysisRequest {
                company,
                role,
                jd_text,
            })?;

            println!(
                "🎯 Detected {} skills across {} categories",
                outcome.extraction.total_skills_found,
                outcome.record.extracted_skills.detected_category_count()
            );
            if !outcome.extraction.has_skills {
                println!("⚠️  No known skills detected - using general preparation defaults");
            }

            let store = open_store(&config)?;
            let history = HistoryStore::new(store);
            let mut record = outcome.record;
            let id = history.save(&mut record)?;
            println!("💾 Saved to history as {}", id);

            let renderer = ReportRenderer::new(
                config.output.color_output,
                config.output.detailed,
            );
            let rendered = renderer.render(&record, output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                std::fs::write(&save_path, &rendered)?;
                println!("📁 Output written to {}", save_path.display());
            }
        }

        Commands::History { action } => {
            let store = open_store(&config)?;
            let history = HistoryStore::new(store);

            match action {
                HistoryAction::List => {
                    let snapshot = history.snapshot()?;
                    if snapshot.dropped > 0 {
                        println!(
                            "⚠️  Dropped {} corrupted history entries",
                            snapshot.dropped
                        );
                    }
                    if snapshot.entries.is_empty() {
                        println!("📭 No saved analyses yet. Run `placement-prep analyze` first.");
                        return Ok(());
                    }

                    println!("📚 Saved analyses ({})\n", snapshot.entries.len());
                    for record in &snapshot.entries {
                        let company = if record.company.is_empty() {
                            "Unknown"
                        } else {
                            record.company.as_str()
                        };
                        let role = if record.role.is_empty() {
                            String::new()
                        } else {
                            format!(" - {}", record.role)
                        };
                        println!(
                            "  • {} [{}] {}{} (score {}/100)",
                            record.id,
                            record.created_at.format("%Y-%m-%d"),
                            company,
                            role,
                            record.final_score
                        );
                    }
                }

                HistoryAction::Show { id, output } => {
                    let output_format = cli::parse_output_format(&output)
                        .map_err(PlacementPrepError::InvalidInput)?;
                    let record = match history.get(&id) {
                        Ok(record) => record,
                        Err(PlacementPrepError::NotFound(_)) => {
                            println!("❓ Analysis '{}' was not found. It may have been deleted.", id);
                            println!("💡 Run `placement-prep history list` to see saved analyses.");
                            return Ok(());
                        }
                        Err(e) => return Err(e),
                    };

                    let renderer = ReportRenderer::new(
                        config.output.color_output,
                        config.output.detailed,
                    );
                    println!("{}", renderer.render(&record, output_format)?);
                }

                HistoryAction::Delete { id } => {
                    history.delete(&id)?;
                    println!("🗑️  Deleted analysis {} (if it existed)", id);
                }

                HistoryAction::Clear => {
                    history.clear()?;
                    println!("🗑️  History cleared");
                }
            }
        }

        Commands::Confidence { action } => {
            let store = open_store(&config)?;
            let history = HistoryStore::new(store);

            match action {
                ConfidenceAction::Set { id, skill, level } => {
                    let level =
                        cli::parse_confidence(&level).map_err(PlacementPrepError::InvalidInput)?;
                    let record = history.set_confidence(&id, &skill, level)?;
                    println!(
                        "✅ {} marked as {:?}. Score: {}/100 (base {})",
                        skill, level, record.final_score, record.base_score
                    );
                }

                ConfidenceAction::Clear { id, skill } => {
                    let record = history.clear_confidence(&id, &skill)?;
                    println!(
                        "✅ Cleared confidence for {}. Score: {}/100 (base {})",
                        skill, record.final_score, record.base_score
                    );
                }
            }
        }

        Commands::Checklist { action } => {
            let store = open_store(&config)?;
            let checklist = ChecklistTracker::new(store);

            match action {
                ChecklistAction::List => {
                    let state = checklist.state()?;
                    let progress = checklist.progress()?;

                    println!("🧪 Manual test checklist\n");
                    for test in TEST_ITEMS {
                        let passed = state.get(test.id).copied().unwrap_or(false);
                        let mark = if passed { "✅" } else { "⬜" };
                        println!("  {} {} - {}", mark, test.id, test.label);
                        if config.output.detailed {
                            println!("       💡 {}", test.hint);
                        }
                    }
                    println!(
                        "\n📊 {}/{} passing ({}%)",
                        progress.passed, progress.total, progress.percentage
                    );
                }

                ChecklistAction::Check { test_id } => {
                    checklist.update(&test_id, true)?;
                    let progress = checklist.progress()?;
                    println!(
                        "✅ {} marked passing ({}/{})",
                        test_id, progress.passed, progress.total
                    );
                }

                ChecklistAction::Uncheck { test_id } => {
                    checklist.update(&test_id, false)?;
                    println!("⬜ {} marked not passing", test_id);
                }

                ChecklistAction::Reset => {
                    checklist.reset()?;
                    println!("🔄 Checklist reset - all tests unchecked");
                }
            }
        }

        Commands::Ship { action } => {
            let store = open_store(&config)?;
            let proof = ProofTracker::new(store);

            match action {
                ShipAction::Status => {
                    let status = proof.completion_status()?;
                    let gate = |done: bool| if done { "✅" } else { "❌" };

                    println!("🚢 Ship readiness\n");
                    println!("  {} Build steps complete", gate(status.steps));
                    println!("  {} Test checklist passing", gate(status.checklist));
                    println!("  {} Submission links valid", gate(status.artifacts));

                    if proof.is_shipped()? {
                        println!("\n{}", "🎉 Shipped! All gates passed.".green().bold());
                    } else {
                        println!("\n⏳ Not shipped yet.");
                    }
                }

                ShipAction::Steps => {
                    let steps = proof.steps()?;
                    println!("🧱 Build steps\n");
                    for step in BUILD_STEPS {
                        let done = steps.get(step.id).copied().unwrap_or(false);
                        let mark = if done { "✅" } else { "⬜" };
                        println!("  {} {} - {}", mark, step.id, step.label);
                    }
                }

                ShipAction::Complete { step_id } => {
                    proof.update_step(&step_id, true)?;
                    println!("✅ {} marked complete", step_id);
                }

                ShipAction::Uncomplete { step_id } => {
                    proof.update_step(&step_id, false)?;
                    println!("⬜ {} marked incomplete", step_id);
                }

                ShipAction::Submission {
                    project,
                    repo,
                    deployed,
                } => {
                    let mut submission = proof.submission()?;
                    let mut changed = false;

                    for (label, value, slot) in [
                        ("project", project, &mut submission.project_url),
                        ("repo", repo, &mut submission.repo_url),
                        ("deployed", deployed, &mut submission.deployed_url),
                    ] {
                        if let Some(url) = value {
                            if !validate_url(&url) {
                                return Err(PlacementPrepError::InvalidInput(format!(
                                    "invalid {} link '{}': must start with http:// or https:// and be a well-formed URL",
                                    label, url
                                )));
                            }
                            *slot = url;
                            changed = true;
                        }
                    }

                    if changed {
                        proof.save_submission(&submission)?;
                        println!("💾 Submission links saved");
                    }

                    let show = |url: &str| {
                        if url.is_empty() {
                            "[Not provided]".to_string()
                        } else {
                            url.to_string()
                        }
                    };
                    println!("🔗 Project:  {}", show(&submission.project_url));
                    println!("🔗 Repo:     {}", show(&submission.repo_url));
                    println!("🔗 Deployed: {}", show(&submission.deployed_url));
                }

                ShipAction::Report => {
                    println!("{}", proof.submission_text()?);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Data Directory: {}", config.data_dir().display());
                println!(
                    "Processing Delay: {} ms",
                    config.analysis.processing_delay_ms
                );
                println!(
                    "Short JD Warning: < {} chars",
                    config.analysis.short_jd_warning_chars
                );
                println!("Output Format: {:?}", config.output.format);
                println!("Color Output: {}", config.output.color_output);
                println!("Detailed Output: {}", config.output.detailed);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Read JD text from a file or stdin ("-").
fn read_jd_text(path: &PathBuf) -> Result<String> {
    if path == &PathBuf::from("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    cli::validate_file_extension(path, &["txt", "md"])
        .map_err(|e| PlacementPrepError::InvalidInput(format!("Job description file: {}", e)))?;

    if !path.exists() {
        return Err(PlacementPrepError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    warn_if_empty(path);
    Ok(std::fs::read_to_string(path)?)
}

fn warn_if_empty(path: &Path) {
    if let Ok(metadata) = std::fs::metadata(path) {
        if metadata.len() == 0 {
            warn!("Job description file is empty: {}", path.display());
        }
    }
}
