use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use crate::cli::{Config, LogLevel};
use crate::error::{FormatError, EXIT_SUCCESS};
use crate::handler::HandlerRegistry;
use crate::host::Session;
use crate::transport::StdioTransport;

/// Logs go to stderr only; stdout carries protocol frames. `RUST_LOG` wins over `level`.
pub fn init_logging(level: LogLevel) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

/// Runs one session over stdio and returns the process exit status.
pub async fn run(config: Config) -> i32 {
    let registry = HandlerRegistry::with_defaults();
    let mut session = Session::new(StdioTransport::stdio(), config.options)
        .with_delegate_timeout(config.delegate_timeout);

    let result = session.run_once(&registry).await;
    drop(session);
    exit_status(result)
}

fn exit_status(result: Result<(), FormatError>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e @ FormatError::UnsupportedLanguage(_)) => {
            tracing::debug!("{}", e);
            e.exit_code()
        }
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}
