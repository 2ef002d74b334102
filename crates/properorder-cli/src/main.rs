//! properorder CLI: declaration order checks.
//!
//! This binary provides the `properorder` command with subcommands for
//! checking declaration streams, listing checks, and writing a config.
//! See `properorder --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "info" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let formatter: Box<dyn properorder_output::OutputFormatter> = if cli.json {
        Box::new(properorder_output::json::JsonFormatter)
    } else {
        Box::new(properorder_output::human::HumanFormatter)
    };

    let config = cli.config.as_deref();
    let exit_code = match cli.command {
        Commands::Check { paths } => commands::check::run(&*formatter, config, paths),
        Commands::Checks => commands::checks::run(&*formatter, config),
        Commands::Init { force } => commands::init::run(force),
    };

    std::process::exit(exit_code);
}
