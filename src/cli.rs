use crate::error::{FormatError, EXIT_FAILURE, EXIT_SUCCESS};
use crate::options::FormatOptions;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub options: FormatOptions,
    pub log_level: LogLevel,
    pub delegate_timeout: Option<Duration>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    Log,
    Debug,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Log => "info",
            LogLevel::Debug => "debug",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sandbox_fmt", version)]
#[command(
    about = "Format one source file read as a JSON line on stdin; Go is delegated back over stdout",
    long_about = None
)]
pub struct Cli {
    /// Formatting options as a JSON object, e.g. '{"parser":"go"}' or '{"filepath":"a.json"}'
    #[arg(default_value = "{}")]
    options: String,
    /// What level of logs to report (written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Log)]
    log_level: LogLevel,
    /// Give up on the delegate response after this many milliseconds (default: wait forever)
    #[arg(long)]
    delegate_timeout_ms: Option<u64>,
}

impl Cli {
    pub fn from_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn into_config(self) -> Result<Config, FormatError> {
        let options = FormatOptions::from_json(&self.options).map_err(FormatError::InvalidConfig)?;
        Ok(Config {
            options,
            log_level: self.log_level,
            delegate_timeout: self.delegate_timeout_ms.map(Duration::from_millis),
        })
    }
}

/// Exit status for a rejected command line: `--help` / `--version` succeed, anything
/// else is a plain failure rather than clap's own usage code.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}
