mod cli;
mod client;
mod error;
mod models;

use clap::Parser;
use cli::{App, Cli};
use colored::*;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the action output
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Initializing config client lifecycle script...");

    let app = App::new();
    let stdout = std::io::stdout();
    match app.run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command execution failed: {:?}", e);
            eprintln!("{} {}", "Error executing command:".red(), e.to_string().red());
            ExitCode::FAILURE
        },
    }
}
