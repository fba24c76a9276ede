//! One formatting session: read the input frame, format it, write the result frame.
use crate::delegate::DelegateChannel;
use crate::error::{FormatError, Result};
use crate::frame::{self, Frame};
use crate::handler::{Handler, HandlerRegistry};
use crate::options::FormatOptions;
use crate::transport::LineTransport;
use std::time::Duration;

/// Owns both streams for the life of the process. Formats exactly one input.
pub struct Session<T: LineTransport> {
    transport: T,
    options: FormatOptions,
    delegate_timeout: Option<Duration>,
}

impl<T: LineTransport> Session<T> {
    pub fn new(transport: T, options: FormatOptions) -> Self {
        Session {
            transport,
            options,
            delegate_timeout: None,
        }
    }

    /// Bound the delegate round-trip. Without this the session waits on the
    /// counterpart for as long as it takes.
    pub fn with_delegate_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.delegate_timeout = timeout;
        self
    }

    /// Run the session to completion. On `Ok` the result frame has been written and
    /// flushed; on `Err` nothing has been written except any delegate request.
    pub async fn run_once(&mut self, registry: &HandlerRegistry) -> Result<()> {
        let source = self.read_input().await?;

        let (parser, handler) = registry.resolve(&self.options)?;
        tracing::debug!(parser = %parser, delegate = handler.is_delegate(), "dispatching");

        let formatted = match handler {
            Handler::Local(formatter) => formatter
                .format(&source, &self.options)
                .map_err(FormatError::handler)?,
            Handler::Delegate => {
                DelegateChannel::new(&mut self.transport)
                    .request_with_timeout(&source, self.delegate_timeout)
                    .await?
            }
        };

        self.emit(&formatted).await
    }

    async fn read_input(&mut self) -> Result<String> {
        let line = self.transport.read().await?;
        let input = frame::decode(&line)?;
        tracing::debug!(name = %input.name, bytes = input.body.len(), "got input");
        Ok(input.body)
    }

    async fn emit(&mut self, formatted: &str) -> Result<()> {
        let line = frame::encode(&Frame::result(formatted))?;
        self.transport.send(&line).await?;
        tracing::debug!(bytes = formatted.len(), "wrote result");
        Ok(())
    }
}
