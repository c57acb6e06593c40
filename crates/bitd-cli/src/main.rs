//! CLI frontend for the Blades character mechanics engine.

mod commands;
mod prompt;

use std::path::PathBuf;
use std::process;

use bitd_mechanics::RollSettings;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bitd",
    about = "Dice pools and rolls for Blades in the Dark characters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a character's dice pools
    Pools {
        /// Character id or name (case-insensitive)
        character: String,

        /// Roster file
        #[arg(short, long, default_value = "roster.json")]
        file: PathBuf,
    },

    /// Show stress, trauma and crew-derived stats
    Stats {
        /// Character id or name (case-insensitive)
        character: String,

        /// Roster file
        #[arg(short, long, default_value = "roster.json")]
        file: PathBuf,
    },

    /// List the actions a character can roll
    Actions {
        /// Character id or name (case-insensitive)
        character: String,

        /// Roster file
        #[arg(short, long, default_value = "roster.json")]
        file: PathBuf,
    },

    /// Configure and roll against a skill or attribute
    Roll {
        /// Character id or name (case-insensitive)
        character: String,

        /// Skill (action) or attribute (resistance) to roll
        target: String,

        /// Preselected dice for engagement rolls
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        dice: i64,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Do not offer the action roll
        #[arg(long)]
        no_action_roll: bool,

        /// Do not offer the threat roll
        #[arg(long)]
        no_threat_roll: bool,

        /// Roster file
        #[arg(short, long, default_value = "roster.json")]
        file: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pools { character, file } => commands::pools::run(&file, &character),
        Commands::Stats { character, file } => commands::stats::run(&file, &character),
        Commands::Actions { character, file } => commands::actions::run(&file, &character),
        Commands::Roll {
            character,
            target,
            dice,
            seed,
            no_action_roll,
            no_threat_roll,
            file,
        } => {
            let settings = RollSettings::default()
                .with_action_roll(!no_action_roll)
                .with_threat_roll(!no_threat_roll);
            commands::roll::run(&file, &character, &target, dice, seed, settings).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
