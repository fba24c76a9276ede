//! Delegate channel: one blocking `gofmt-request` / `gofmt-response` round-trip.
use crate::error::{FormatError, Result};
use crate::frame::{self, Frame, GOFMT_RESPONSE};
use crate::transport::LineTransport;
use std::time::Duration;

/// Borrows the session's transport for the duration of one exchange. The `&mut`
/// borrow is what keeps a second request from being issued while one is pending.
pub struct DelegateChannel<'a, T: LineTransport + ?Sized> {
    transport: &'a mut T,
}

impl<'a, T: LineTransport + ?Sized> DelegateChannel<'a, T> {
    pub fn new(transport: &'a mut T) -> Self {
        DelegateChannel { transport }
    }

    /// Send `text` out for formatting and wait for the answer. There is no deadline:
    /// if the counterpart never answers, neither does this.
    pub async fn request(&mut self, text: &str) -> Result<String> {
        let line = frame::encode(&Frame::request(text))?;
        self.transport.send(&line).await?;
        tracing::debug!(bytes = text.len(), "sent gofmt-request, waiting for response");

        let line = self.transport.read().await?;
        let response = frame::decode(&line)?;
        if response.name != GOFMT_RESPONSE {
            return Err(FormatError::ProtocolViolation {
                name: response.name,
            });
        }
        tracing::debug!(bytes = response.body.len(), "received gofmt-response");
        Ok(response.body)
    }

    /// `request`, bounded by an optional deadline. With `None` it waits forever.
    pub async fn request_with_timeout(
        &mut self,
        text: &str,
        timeout: Option<Duration>,
    ) -> Result<String> {
        match timeout {
            Some(dur) => match tokio::time::timeout(dur, self.request(text)).await {
                Ok(res) => res,
                Err(_) => Err(FormatError::DelegateTimeout),
            },
            None => self.request(text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::tests::transport_pair;

    #[tokio::test]
    async fn test_request_round_trip() {
        let (mut local, mut remote) = transport_pair();

        let peer = tokio::spawn(async move {
            let line = remote.read().await.unwrap();
            let request = frame::decode(&line).unwrap();
            assert_eq!(request, Frame::request("func  f( ){}"));
            let reply = frame::encode(&Frame::response("func f() {}")).unwrap();
            remote.send(&reply).await.unwrap();
            remote
        });

        let mut channel = DelegateChannel::new(&mut local);
        let formatted = channel.request("func  f( ){}").await.unwrap();
        assert_eq!(formatted, "func f() {}");

        peer.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_rejects_wrong_tag() {
        let (mut local, mut remote) = transport_pair();

        let peer = tokio::spawn(async move {
            remote.read().await.unwrap();
            let reply = frame::encode(&Frame::result("not for you")).unwrap();
            remote.send(&reply).await.unwrap();
            remote
        });

        let err = DelegateChannel::new(&mut local)
            .request("x")
            .await
            .unwrap_err();
        match err {
            FormatError::ProtocolViolation { name } => assert_eq!(name, "result"),
            other => panic!("unexpected error: {other:?}"),
        }

        peer.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_waits_without_response() {
        let (mut local, remote) = transport_pair();

        let pending = tokio::time::timeout(
            Duration::from_millis(50),
            DelegateChannel::new(&mut local).request("x"),
        )
        .await;
        assert!(pending.is_err(), "request resolved without a response");

        drop(remote);
    }

    #[tokio::test]
    async fn test_request_with_timeout_elapses() {
        let (mut local, _remote) = transport_pair();

        let err = DelegateChannel::new(&mut local)
            .request_with_timeout("x", Some(Duration::from_millis(20)))
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::DelegateTimeout));
    }

    #[tokio::test]
    async fn test_request_counterpart_gone() {
        let (mut local, remote) = transport_pair();
        drop(remote);

        let err = DelegateChannel::new(&mut local)
            .request("x")
            .await
            .unwrap_err();
        // Either the write or the read notices the closed peer.
        assert!(matches!(
            err,
            FormatError::ConnectionClosed | FormatError::Io(_)
        ));
    }

    #[tokio::test]
    async fn test_request_malformed_response() {
        let (mut local, mut remote) = transport_pair();

        let peer = tokio::spawn(async move {
            remote.read().await.unwrap();
            remote.send("garbage").await.unwrap();
            remote
        });

        let err = DelegateChannel::new(&mut local)
            .request("x")
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::MalformedFrame(_)));

        peer.await.unwrap();
    }
}
