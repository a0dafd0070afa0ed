// CivicPulse command-line entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{error, info};

use civicpulse_core::analysis::{Severity, TextAnalyzer};
use civicpulse_core::config::AppConfig;
use civicpulse_core::engagement::EngagementPlanner;
use civicpulse_core::registry::{load_submissions, CommunityRegistry};
use civicpulse_core::telemetry;

#[derive(Parser, Debug)]
#[command(name = "civicpulse")]
#[command(version, about = "Keyword analysis and engagement planning for community problems")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one problem and print the analysis JSON
    Analyze {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        category: String,
    },
    /// Submit every problem in a JSON file and print problems plus dashboard counts
    Batch {
        /// JSON array of problem submissions
        path: PathBuf,
    },
    /// Print an engagement plan for a category and severity
    Plan {
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "Low")]
        severity: Severity,
    },
}

fn run(args: Args) -> anyhow::Result<()> {
    let output = match args.command {
        Command::Analyze {
            title,
            description,
            category,
        } => {
            let analysis = TextAnalyzer::shared().analyze(&title, &description, &category);
            analysis.to_json()?
        }
        Command::Batch { path } => {
            let submissions = load_submissions(&path)
                .with_context(|| format!("failed to load submissions from {}", path.display()))?;
            info!("Loaded {} submissions from {}", submissions.len(), path.display());

            let mut registry = CommunityRegistry::new();
            for (index, submission) in submissions.into_iter().enumerate() {
                if let Err(e) = registry.submit_problem(submission) {
                    error!("Skipping submission #{}: {}", index, e);
                }
            }

            serde_json::to_string_pretty(&json!({
                "problems": registry.problems(),
                "dashboard": registry.dashboard(),
            }))?
        }
        Command::Plan { category, severity } => {
            let plan = EngagementPlanner::new().plan(&category, severity, &[]);
            serde_json::to_string_pretty(&plan)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    telemetry::init_tracing(&config)?;

    info!("Starting civicpulse v{}", env!("CARGO_PKG_VERSION"));
    run(args)
}
