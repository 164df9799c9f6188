//! Command-line interface for `PinPeople`.

mod commands;

use clap::{Parser, Subcommand};

/// `PinPeople` - HR records service
/// Employee listing API and survey CSV import
#[derive(Parser)]
#[command(name = "pinpeople")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve,

    /// Import employees from a semicolon-delimited survey CSV
    Import {
        /// CSV file to import; defaults to `import.default_path`
        path: Option<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
