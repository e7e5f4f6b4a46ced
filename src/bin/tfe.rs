//! tfe CLI Binary
//!
//! Command-line interface for Terraform Enterprise organizations and workspaces.

use clap::Parser;
use std::process;
use tfe::logging::init_logging;
use tfe::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing client: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
