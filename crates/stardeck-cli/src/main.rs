mod apod;
mod ask;
mod context;
mod extras;
mod missions;

use clap::{Parser, Subcommand};

use crate::context::Context;

#[derive(Debug, Parser)]
#[command(name = "stardeck")]
#[command(about = "Browse NASA mission imagery and daily astronomy content")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, inspect, and refresh the mission collection
    Missions {
        #[command(subcommand)]
        command: MissionsCommands,
    },
    /// Show the Astronomy Picture of the Day
    Apod {
        /// Ignore today's cached picture
        #[arg(long)]
        refresh: bool,
    },
    /// Interpret a navigation phrase such as "show me mars"
    Ask {
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
    /// Countdowns to upcoming launches
    Launches,
    /// Print a space fact
    Fact {
        /// Pick a specific fact (wraps around); defaults to today's fact
        #[arg(long)]
        index: Option<usize>,
    },
    /// Manage the local cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Debug, Subcommand)]
enum MissionsCommands {
    /// List missions matching a search term and category
    List {
        /// Case-insensitive text matched against title, description, destination, keywords
        #[arg(long, default_value = "")]
        search: String,
        /// Destination label (e.g. Mars) or "all"
        #[arg(long, default_value = stardeck_core::ALL_CATEGORIES)]
        category: String,
    },
    /// Show one mission in full
    Show {
        /// Provider-assigned mission id
        id: String,
    },
    /// Missions ordered by year
    Timeline {
        #[arg(long, default_value_t = stardeck_core::DEFAULT_TIMELINE_LIMIT)]
        limit: usize,
    },
    /// Re-fetch every query, bypassing the cache
    Refresh,
}

#[derive(Debug, Subcommand)]
enum CacheCommands {
    /// Remove cached missions and the cached astronomy picture
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("stardeck ready; run `stardeck --help` for commands");
        return Ok(());
    };

    // Config-free commands skip env loading so they work without a key.
    match command {
        Commands::Launches => {
            extras::run_launches(chrono::Utc::now());
            Ok(())
        }
        Commands::Fact { index } => {
            extras::run_fact(index, chrono::Utc::now());
            Ok(())
        }
        command => run_with_config(command).await,
    }
}

async fn run_with_config(command: Commands) -> anyhow::Result<()> {
    let config = stardeck_core::load_app_config()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");
    let ctx = Context::from_config(config)?;

    match command {
        Commands::Missions { command } => match command {
            MissionsCommands::List { search, category } => {
                missions::run_missions_list(&ctx, &search, &category).await
            }
            MissionsCommands::Show { id } => missions::run_missions_show(&ctx, &id).await,
            MissionsCommands::Timeline { limit } => {
                missions::run_missions_timeline(&ctx, limit).await
            }
            MissionsCommands::Refresh => missions::run_missions_refresh(&ctx).await,
        },
        Commands::Apod { refresh } => apod::run_apod(&ctx, refresh).await,
        Commands::Ask { phrase } => ask::run_ask(&ctx, &phrase.join(" ")).await,
        Commands::Cache {
            command: CacheCommands::Clear,
        } => ctx.clear_cache(),
        // Handled in `main` before config loading.
        Commands::Launches | Commands::Fact { .. } => Ok(()),
    }
}
