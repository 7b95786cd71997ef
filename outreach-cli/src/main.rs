//! CLI for previewing campaign risk against an account snapshot.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use outreach_core::modules::config::{default_config_path, load_config, load_config_or_default};
use outreach_core::planner::{
    build_submission, count_variants, uniqueness_score, validate_for_submission, Planner,
    RecipientPool,
};
use outreach_types::models::{Account, CampaignDraft, Contact};
use outreach_types::RiskModelConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log planner internals
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Projects each selected account's health after the campaign
    Project {
        #[command(flatten)]
        inputs: PlanInputs,
        /// Evaluation time in epoch seconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,
        /// Print the projection as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Prints the start-campaign payload for the draft
    Payload {
        #[command(flatten)]
        inputs: PlanInputs,
    },
    /// Counts the distinct variants a spintax template renders
    Variants {
        /// Path to the template file
        template: PathBuf,
    },
}

#[derive(Args, Debug)]
struct PlanInputs {
    /// JSON array of account records
    #[arg(long)]
    accounts: PathBuf,
    /// JSON campaign draft
    #[arg(long)]
    draft: PathBuf,
    /// JSON array of contacts; overrides the draft's recipients and counts
    #[arg(long)]
    contacts: Option<PathBuf>,
    /// Template file; overrides the draft's uniqueness score
    #[arg(long)]
    template: Option<PathBuf>,
    /// Risk model tuning file (defaults to ~/.outreach/risk_model.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

struct LoadedPlan {
    accounts: Vec<Account>,
    draft: CampaignDraft,
    config: RiskModelConfig,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn resolve_config(explicit: Option<&Path>) -> Result<RiskModelConfig> {
    if let Some(path) = explicit {
        return load_config(path).with_context(|| format!("loading {}", path.display()));
    }
    match default_config_path() {
        Ok(path) => Ok(load_config_or_default(&path)),
        Err(e) => {
            tracing::warn!("No data directory, using default risk model: {}", e);
            Ok(RiskModelConfig::default())
        },
    }
}

impl PlanInputs {
    fn load(&self) -> Result<LoadedPlan> {
        let accounts: Vec<Account> = read_json(&self.accounts)?;
        let mut draft: CampaignDraft = read_json(&self.draft)?;

        if let Some(path) = &self.contacts {
            let contacts: Vec<Contact> = read_json(path)?;
            RecipientPool::from_contacts(&contacts).apply_to(&mut draft);
        }
        if let Some(path) = &self.template {
            let template = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            draft.uniqueness_score = uniqueness_score(&template);
        }

        let config = resolve_config(self.config.as_deref())?;
        info!(
            "Loaded {} accounts, {} selected, {} recipients ({} risky)",
            accounts.len(),
            draft.selected_accounts.len(),
            draft.total_recipients,
            draft.risky_recipients
        );
        Ok(LoadedPlan { accounts, draft, config })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber =
        FmtSubscriber::builder().with_max_level(level).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    match cli.command {
        Commands::Project { inputs, now, json } => {
            let LoadedPlan { accounts, draft, config } = inputs.load()?;
            let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp());

            let projection = Planner::new(config).project_campaign(&draft, &accounts, now);
            if json {
                println!("{}", serde_json::to_string_pretty(&projection)?);
            } else {
                print!("{}", render::projection_table(&projection));
            }
        },
        Commands::Payload { inputs } => {
            let LoadedPlan { accounts, draft, config } = inputs.load()?;
            validate_for_submission(&draft, &accounts).context("draft is not submittable")?;

            let payload = build_submission(&draft, &config);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        },
        Commands::Variants { template } => {
            let text = fs::read_to_string(&template)
                .with_context(|| format!("reading {}", template.display()))?;
            println!("{}", count_variants(&text));
        },
    }

    Ok(())
}
