//! The other end of the session: feeds the input frame, answers delegate requests and
//! collects the result. This is what a supervisor outside the sandbox runs.
use crate::error::Result;
use crate::frame::{self, Frame, GOFMT_REQUEST, RESULT};
use crate::transport::LineTransport;

/// Send `source` to the session, answer every `gofmt-request` with `gofmt`, and return
/// the body of the `result` frame.
///
/// A failing `gofmt` answers with the request body unchanged, so the session never
/// stalls on a request that cannot be formatted. EOF before a result means the session
/// ended without output (unsupported language or a failure) and surfaces as
/// `FormatError::ConnectionClosed`; the caller learns which from the session's exit status.
pub async fn drive<T, F>(transport: &mut T, source: &str, mut gofmt: F) -> Result<String>
where
    T: LineTransport + ?Sized,
    F: FnMut(&str) -> anyhow::Result<String>,
{
    transport
        .send(&frame::encode(&Frame::input(source))?)
        .await?;

    loop {
        let line = transport.read().await?;
        let msg = frame::decode(&line)?;
        match msg.name.as_str() {
            GOFMT_REQUEST => {
                let formatted = match gofmt(&msg.body) {
                    Ok(formatted) => formatted,
                    Err(e) => {
                        tracing::warn!("gofmt failed, returning source unchanged: {:#}", e);
                        msg.body
                    }
                };
                transport
                    .send(&frame::encode(&Frame::response(formatted))?)
                    .await?;
            }
            RESULT => return Ok(msg.body),
            other => {
                tracing::warn!(name = %other, "ignoring unexpected message from session");
            }
        }
    }
}
