//! Error types for a formatting session.

use thiserror::Error;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for any failure other than an unsupported language.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when no handler is registered for the requested parser.
pub const EXIT_UNSUPPORTED: i32 = 10;

#[derive(Debug, Error)]
pub enum FormatError {
    /// A line was not a JSON object, or lacked a string `name`.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// The counterpart answered with a tag other than the one expected.
    #[error("protocol violation: expected response name \"gofmt-response\", got \"{name}\"")]
    ProtocolViolation { name: String },

    #[error("no parser could be inferred: {0}")]
    UnsupportedLanguage(String),

    /// A handler failed while formatting.
    #[error("{0}")]
    Handler(String),

    #[error("invalid config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The inbound stream hit EOF before a full line arrived.
    #[error("connection closed")]
    ConnectionClosed,

    #[error("delegate response timeout")]
    DelegateTimeout,
}

impl FormatError {
    pub fn exit_code(&self) -> i32 {
        match self {
            FormatError::UnsupportedLanguage(_) => EXIT_UNSUPPORTED,
            _ => EXIT_FAILURE,
        }
    }

    /// Wraps a handler error, keeping the whole context chain in the message.
    pub fn handler(err: anyhow::Error) -> Self {
        FormatError::Handler(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::MalformedFrame(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
