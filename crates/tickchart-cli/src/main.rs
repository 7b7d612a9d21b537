mod cli;
mod commands;
mod error;
mod logging;
mod prompt;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine; the key may come from the real environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match commands::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "tickchart failed");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}
