//! Line transport: raw newline-terminated text over a reader/writer pair.
use crate::error::{FormatError, Result};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Minimal async trait for line transport.
/// - `send` takes one line (no terminator), appends `\n` and flushes.
/// - `read` waits for the next full line and returns it with the terminator stripped.
#[async_trait]
pub trait LineTransport: Send {
    async fn send(&mut self, line: &str) -> Result<()>;
    async fn read(&mut self) -> Result<String>;
}

pub struct StdioTransport<R, W> {
    reader: R,
    writer: W,
}

impl StdioTransport<BufReader<Stdin>, Stdout> {
    /// Transport over the process's own stdin/stdout.
    pub fn stdio() -> Self {
        StdioTransport::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StdioTransport { reader, writer }
    }
}

#[async_trait]
impl<R, W> LineTransport for StdioTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, line: &str) -> Result<()> {
        write_line_to(&mut self.writer, line).await
    }

    async fn read(&mut self) -> Result<String> {
        read_line_from(&mut self.reader).await
    }
}

/// Write a single line and flush. A reader blocked on the other end sees nothing until the flush.
pub(crate) async fn write_line_to<W>(writer: &mut W, line: &str) -> Result<()>
where
    W: AsyncWrite + Unpin + Send,
{
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Read a single line. A final line without terminator is still returned; EOF with
/// nothing buffered is `ConnectionClosed`.
pub(crate) async fn read_line_from<R>(reader: &mut R) -> Result<String>
where
    R: AsyncBufRead + Unpin + Send,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Err(FormatError::ConnectionClosed);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
