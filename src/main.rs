//! precis - Summarize text, web articles and YouTube videos with Gemini
//!
//! Entry point for the precis CLI application.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use precis::cli::{commands, input, Cli};
use precis::config::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env is fine; the key may come from the environment or config
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.general.log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = settings.require_api_key() {
        eprintln!("{}", commands::api_key_help(&err));
        std::process::exit(1);
    }

    let handler = match commands::build_handler(&settings) {
        Ok(handler) => handler,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    let input = input::resolve_input(cli.input, stdin.lock(), is_terminal, std::io::stdout())?;

    commands::summarize(&handler, &input).await;

    Ok(())
}
