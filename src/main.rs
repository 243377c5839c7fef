//! string-validator - Entry Point
//!
//! Checks a string against the complexity policy and prints whether it passes.

use clap::Parser;
use log::info;
use tokio::io::{BufReader, stderr, stdin, stdout};

use string_validator::cli::{Cli, run};
use string_validator::config::ValidatorConfig;
use string_validator::error::CliError;
use string_validator::error::handlers::{error_to_exit_code, handle_error};
use string_validator::prompt::Prompter;

async fn try_main(cli: Cli) -> Result<bool, CliError> {
    let config = ValidatorConfig::load()?;
    let mut prompter = Prompter::new(BufReader::new(stdin()), stdout());
    run(&cli, &config, &mut prompter, &mut stderr()).await
}

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let cli = Cli::parse();
    info!("Launching string validator...");

    if let Err(err) = try_main(cli).await {
        handle_error(&err);
        eprintln!("error: {}", err);
        std::process::exit(error_to_exit_code(&err));
    }
}
