//! CLI interface for placement prep

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "placement-prep")]
#[command(about = "Job description analysis and placement readiness planning tool")]
#[command(
    long_about = "Analyze job descriptions with deterministic skill extraction, generate round-wise prep checklists, 7-day study plans, and interview questions, and track readiness over time"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a job description and save the result to history
    Analyze {
        /// Path to the job description file (TXT, MD), or "-" for stdin
        #[arg(short, long)]
        jd: PathBuf,

        /// Company name (optional, improves intel and score)
        #[arg(short = 'C', long)]
        company: Option<String>,

        /// Role / position (optional)
        #[arg(short, long)]
        role: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save rendered output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the cosmetic processing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Inspect and manage saved analyses
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Toggle skill confidence on a saved analysis
    Confidence {
        #[command(subcommand)]
        action: ConfidenceAction,
    },

    /// Manual QA checklist
    Checklist {
        #[command(subcommand)]
        action: ChecklistAction,
    },

    /// Build milestones and final submission
    Ship {
        #[command(subcommand)]
        action: ShipAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved analyses, newest first
    List,

    /// Show one analysis by id
    Show {
        /// Analysis id
        id: String,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Delete one analysis by id
    Delete {
        /// Analysis id
        id: String,
    },

    /// Delete the entire history
    Clear,
}

#[derive(Subcommand)]
pub enum ConfidenceAction {
    /// Mark a skill as known or needing practice
    Set {
        /// Analysis id
        id: String,

        /// Skill label as shown in the analysis (e.g. "React")
        skill: String,

        /// Confidence level: know, practice
        level: String,
    },

    /// Remove a skill's confidence entry
    Clear {
        /// Analysis id
        id: String,

        /// Skill label
        skill: String,
    },
}

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// List test items with their state
    List,

    /// Mark a test as passing
    Check {
        /// Test id (see list)
        test_id: String,
    },

    /// Mark a test as not passing
    Uncheck {
        /// Test id
        test_id: String,
    },

    /// Uncheck all tests
    Reset,
}

#[derive(Subcommand)]
pub enum ShipAction {
    /// Show the full ship-readiness status
    Status,

    /// List build steps with their state
    Steps,

    /// Mark a build step as complete
    Complete {
        /// Step id (see steps)
        step_id: String,
    },

    /// Mark a build step as incomplete
    Uncomplete {
        /// Step id
        step_id: String,
    },

    /// Show or update submission links
    Submission {
        /// Project link
        #[arg(long)]
        project: Option<String>,

        /// Repository link
        #[arg(long)]
        repo: Option<String>,

        /// Deployed application link
        #[arg(long)]
        deployed: Option<String>,
    },

    /// Print the formatted submission report
    Report,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse a confidence level argument
pub fn parse_confidence(level: &str) -> Result<crate::model::record::Confidence, String> {
    match level.to_lowercase().as_str() {
        "know" => Ok(crate::model::record::Confidence::Know),
        "practice" => Ok(crate::model::record::Confidence::Practice),
        _ => Err(format!(
            "Invalid confidence level: {}. Supported: know, practice",
            level
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
