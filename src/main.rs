mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use expdf::{ExtractError, Severity};

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { path, json } => {
            commands::info::run(&path, json)?;
        }
        Commands::Pages { path } => {
            commands::pages::run(&path)?;
        }
        Commands::Extract { path, page, output } => {
            commands::extract::run(&path, &page, &output)?;
        }
        Commands::Split {
            path,
            output_dir,
            prefix,
        } => {
            commands::split::run(&path, &output_dir, &prefix)?;
        }
    }

    Ok(())
}

// Mistaken input exits 2, I/O and document faults exit 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExtractError>().map(ExtractError::severity) {
        Some(Severity::Warning) => 2,
        _ => 1,
    }
}
