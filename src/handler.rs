pub mod local;
pub mod registry;

use crate::options::FormatOptions;

pub use local::{JsonFormatter, TextFormatter};
pub use registry::HandlerRegistry;

/// A formatter that runs entirely in-process.
pub trait LocalFormatter: Send + Sync {
    fn format(&self, source: &str, options: &FormatOptions) -> anyhow::Result<String>;
}

/// How a language gets formatted. `Delegate` hands the text to the counterpart over the
/// session's channel and blocks the session until it answers.
pub enum Handler {
    Local(Box<dyn LocalFormatter>),
    Delegate,
}

impl Handler {
    pub fn local(formatter: impl LocalFormatter + 'static) -> Self {
        Handler::Local(Box::new(formatter))
    }

    pub fn is_delegate(&self) -> bool {
        matches!(self, Handler::Delegate)
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Local(_) => f.write_str("Handler::Local"),
            Handler::Delegate => f.write_str("Handler::Delegate"),
        }
    }
}
