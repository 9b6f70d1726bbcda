use clap::{Parser, Subcommand, ValueEnum};

use crate::export::ExportKind;

/// Command-line interface for vreport
/// Volunteer participation reports and CSV/PDF exports over an SQLite store
#[derive(Parser)]
#[command(
    name = "vreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Volunteer participation reporting: CSV and PDF exports of events, history and per-volunteer reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Datasets that can be exported directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Events,
    History,
}

impl From<Entity> for ExportKind {
    fn from(e: Entity) -> Self {
        match e {
            Entity::Events => ExportKind::Events,
            Entity::History => ExportKind::History,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Load accounts, profiles, events and history from a JSON dataset
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Build the volunteer participation report
    Report {
        #[arg(long, default_value = "csv", help = "Output format: csv or pdf")]
        format: String,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export events or participation history
    Export {
        #[arg(value_enum)]
        entity: Entity,

        #[arg(long, default_value = "csv", help = "Output format: csv or pdf")]
        format: String,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long,
            value_name = "KEY",
            help = "History order: participationDate or createdAt (default: insertion)"
        )]
        sort: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the CSV preview of events or history
    Preview {
        #[arg(value_enum)]
        entity: Entity,
    },

    /// Run an HTTP-style export target, e.g. "/reports/volunteer-history?format=pdf"
    Get {
        target: String,

        #[arg(long, value_name = "FILE", help = "Write the body here instead of stdout")]
        out: Option<String>,
    },
}
