use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "talenthub")]
#[command(about = "TalentHub CLI - profile completeness, onboarding and talent matching", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding onboarding state (defaults to the platform config directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the completeness breakdown for one user
    Completeness {
        /// JSON file mapping user ids to profile snapshots
        snapshots: PathBuf,
        #[arg(long)]
        user: String,
    },
    /// Inspect or drive a user's onboarding state
    Onboarding {
        #[command(subcommand)]
        action: OnboardingAction,
    },
    /// Rank talents for an opportunity
    Match {
        /// JSON file describing the opportunity
        opportunity: PathBuf,
        /// JSON file mapping user ids to profile snapshots
        snapshots: PathBuf,
    },
}

#[derive(Subcommand)]
enum OnboardingAction {
    /// Initialize from the user's profile and print the resulting state
    Show {
        #[arg(long)]
        user: String,
        #[arg(long, default_value = "profiles.json")]
        profiles: PathBuf,
    },
    /// Return the user to the welcome flow and delete stored state
    Reset {
        #[arg(long)]
        user: String,
    },
    /// Finish the wizard and route the user to the dashboard
    Complete {
        #[arg(long)]
        user: String,
        #[arg(long, default_value = "profiles.json")]
        profiles: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let context = commands::Context::new(cli.config, cli.data_dir)?;

    match cli.command {
        Commands::Completeness { snapshots, user } => {
            commands::completeness::run(&snapshots, &user).await?
        }
        Commands::Onboarding { action } => match action {
            OnboardingAction::Show { user, profiles } => {
                commands::onboarding::show(&context, &user, &profiles).await?
            }
            OnboardingAction::Reset { user } => commands::onboarding::reset(&context, &user)?,
            OnboardingAction::Complete { user, profiles } => {
                commands::onboarding::complete(&context, &user, &profiles).await?
            }
        },
        Commands::Match {
            opportunity,
            snapshots,
        } => commands::matching::run(&opportunity, &snapshots).await?,
    }

    Ok(())
}
