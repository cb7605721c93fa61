mod agents;
mod cli;
mod error;
mod utils;
mod version;
mod workflow;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use colored::Colorize;
use error::{Result, VerbumpError};
use std::process;
use utils::logging::VERBOSE_ENV;

fn main() {
    let result = parse_cli().and_then(run);

    match result {
        Ok(()) => {}
        Err(VerbumpError::Usage(message)) => {
            print!("{message}");
            process::exit(1);
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn parse_cli() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(VerbumpError::Usage(e.to_string())),
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        unsafe {
            std::env::set_var(VERBOSE_ENV, "1");
        }
    }

    match cli.next_version {
        Some(next_version) if !cli.current => {
            workflow::execute_bump(&cli.path, &cli.manifest, &next_version, cli.dry_run)
        }
        _ => workflow::execute_show(&cli.path, &cli.manifest),
    }
}
