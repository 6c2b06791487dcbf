//! Admin Console Main Entry Point
//!
//! Runs a single command from the arguments, or the interactive shell when
//! no command is given.

use std::sync::Arc;

use admin_console::view::{Notifier, TerminalDisplay, TerminalPrompter};
use admin_console::{Cli, Command, Console, ConsoleError, Dependencies, LogFormat, Session};
use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging. Logs go to stderr so stdout only carries tables.
fn init_tracing(format: LogFormat) -> Result<(), ConsoleError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("admin_console=info,admin_console_repository=info")
    });

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| ConsoleError::config(e.to_string()))?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| ConsoleError::config(e.to_string()))?;
        }
    }

    info!(
        service_name = "admin-console",
        service_version = env!("CARGO_PKG_VERSION"),
        log_format = ?format,
        "Tracing initialized"
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing(LogFormat::from_env())?;

    let cli = Cli::parse();

    let deps = match Dependencies::new() {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let console = Console::new(deps.service, TerminalPrompter);
    let session = Session::new(console, Notifier::new(Arc::new(TerminalDisplay)));

    let result = match cli.command {
        None | Some(Command::Shell) => session.run_shell().await,
        Some(command) => session.run_once(command),
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
