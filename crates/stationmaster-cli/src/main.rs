// Rust guideline compliant 2026-08-23

//! Stationmaster CLI Application
//!
//! Command-line interface for the Stationmaster feature-flag ("boarding
//! ticket") lifecycle manager.

use clap::{ArgAction, Parser};
use stationmaster_cli::commands;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stationmaster",
    version,
    about = "Stationmaster: feature-flag lifecycle management",
    long_about = "Stationmaster manages feature flags as boarding tickets stored in a \
                  structured config file, with expiration, tracking metadata, and a \
                  terminal 'boarded' state once a feature is fully adopted.",
    after_help = "Examples:\n  stationmaster setup\n  stationmaster new dark-mode --ticket PROJ-42 --expiration \"30 days\"\n  stationmaster show dark-mode\n  stationmaster update dark-mode --enable false\n  stationmaster board dark-mode\n  stationmaster list\n"
)]
struct Cli {
    /// Config file containing the boarding information
    #[arg(
        short = 'f',
        long,
        global = true,
        default_value = "boarding.conf",
        value_name = "FILE"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create a new config file for storing boarding information
    Setup,

    /// Create a new boarding ticket
    New {
        /// Name of the boarding ticket
        name: String,

        /// Enable the boarding ticket
        #[arg(short = 'e', long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
        enable: bool,

        /// When the boarding ticket expires (timestamp or e.g. "30 days")
        #[arg(short = 'x', long)]
        expiration: Option<String>,

        /// Description of what the boarding ticket is for
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Tracking ticket for the boarding ticket
        #[arg(short = 't', long)]
        ticket: Option<String>,

        /// The target version for the boarding ticket
        #[arg(short = 'V', long)]
        target_version: Option<String>,
    },

    /// Update a boarding ticket (unspecified options stay unchanged)
    Update {
        /// Name of the boarding ticket
        name: String,

        /// Enable or disable the boarding ticket
        #[arg(short = 'e', long, action = ArgAction::Set, value_name = "BOOL")]
        enable: Option<bool>,

        /// When the boarding ticket expires (timestamp or e.g. "30 days")
        #[arg(short = 'x', long)]
        expiration: Option<String>,

        /// Description of what the boarding ticket is for
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Tracking ticket for the boarding ticket
        #[arg(short = 't', long)]
        ticket: Option<String>,

        /// The target version for the boarding ticket
        #[arg(short = 'V', long)]
        target_version: Option<String>,
    },

    /// Show a boarding ticket and when it expires
    Show {
        /// Name of the boarding ticket
        name: String,
    },

    /// Board a feature: mark its flag fully adopted (terminal)
    Board {
        /// Name of the boarding ticket
        name: String,

        /// Refuse to board while the ticket is still enabled
        #[arg(long)]
        require_disabled: bool,
    },

    /// List all boarding tickets with their effective state
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup => {
            commands::setup::execute(&cli.file)?;
        }
        Commands::New {
            name,
            enable,
            expiration,
            description,
            ticket,
            target_version,
        } => {
            commands::new::execute(
                &cli.file,
                name,
                enable,
                expiration,
                description,
                ticket,
                target_version,
            )?;
        }
        Commands::Update {
            name,
            enable,
            expiration,
            description,
            ticket,
            target_version,
        } => {
            commands::update::execute(
                &cli.file,
                name,
                enable,
                expiration,
                description,
                ticket,
                target_version,
            )?;
        }
        Commands::Show { name } => {
            commands::show::execute(&cli.file, name)?;
        }
        Commands::Board {
            name,
            require_disabled,
        } => {
            commands::board::execute(&cli.file, name, require_disabled)?;
        }
        Commands::List => {
            commands::list::execute(&cli.file)?;
        }
    }

    Ok(())
}
