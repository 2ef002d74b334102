use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "properorder",
    version,
    about = "Checks that types, constructors, and methods are declared in order"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log progress to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file (default: .properorder/properorder.json)
    #[arg(long, global = true, env = "PROPERORDER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check declaration streams for ordering violations
    Check {
        /// Stream documents or directories to walk (default: current directory)
        paths: Vec<PathBuf>,
    },

    /// List registered checks and whether they are enabled
    Checks,

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}
