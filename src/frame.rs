//! Line framing: one JSON object `{"name", "body"}` per line.
use crate::error::{FormatError, Result};
use serde::{Deserialize, Serialize};

pub const GOFMT_REQUEST: &str = "gofmt-request";
pub const GOFMT_RESPONSE: &str = "gofmt-response";
pub const RESULT: &str = "result";
pub const INPUT: &str = "input";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    #[serde(default)]
    pub body: String,
}

impl Frame {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Frame {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn request(body: impl Into<String>) -> Self {
        Frame::new(GOFMT_REQUEST, body)
    }

    pub fn response(body: impl Into<String>) -> Self {
        Frame::new(GOFMT_RESPONSE, body)
    }

    pub fn result(body: impl Into<String>) -> Self {
        Frame::new(RESULT, body)
    }

    pub fn input(body: impl Into<String>) -> Self {
        Frame::new(INPUT, body)
    }
}

/// Serialize a frame into a single line, without the terminator.
pub fn encode(frame: &Frame) -> Result<String> {
    // serde_json escapes control characters, so the output never holds a raw newline.
    Ok(serde_json::to_string(frame)?)
}

/// Parse one line back into a frame.
pub fn decode(line: &str) -> Result<Frame> {
    let line = line.trim_end_matches(['\n', '\r']);
    let json: serde_json::Value = serde_json::from_str(line)?;
    if !json.is_object() {
        return Err(FormatError::MalformedFrame(format!(
            "expected a JSON object, got `{}`",
            truncate(line)
        )));
    }
    if json.get("name").is_none() {
        return Err(FormatError::MalformedFrame("missing `name` field".into()));
    }
    Ok(serde_json::from_value(json)?)
}

fn truncate(s: &str) -> &str {
    match s.char_indices().nth(64) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_single_line() {
        let frame = Frame::request("package main\nfunc  f( ){}\n");
        let line = encode(&frame).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(
            line,
            r#"{"name":"gofmt-request","body":"package main\nfunc  f( ){}\n"}"#
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let frame = Frame::new("x", "tab\there \"quoted\" \u{1F600}\r\n");
        let decoded = decode(&encode(&frame).unwrap()).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_decode_tolerates_line_terminator() {
        let decoded = decode("{\"name\":\"gofmt-response\",\"body\":\"ok\"}\r\n").unwrap();
        assert_eq!(decoded, Frame::response("ok"));
    }

    #[test]
    fn test_decode_missing_body_is_empty() {
        let decoded = decode(r#"{"name":"input"}"#).unwrap();
        assert_eq!(decoded.body, "");
    }

    #[test]
    fn test_decode_not_json() {
        let err = decode("not json").unwrap_err();
        assert!(matches!(err, FormatError::MalformedFrame(_)));
    }

    #[test]
    fn test_decode_not_object() {
        let err = decode(r#"["gofmt-response","x"]"#).unwrap_err();
        assert!(matches!(err, FormatError::MalformedFrame(_)));
    }

    #[test]
    fn test_decode_missing_name() {
        let err = decode(r#"{"body":"x"}"#).unwrap_err();
        assert!(matches!(err, FormatError::MalformedFrame(_)));
    }

    #[test]
    fn test_decode_non_string_name() {
        let err = decode(r#"{"name":7,"body":"x"}"#).unwrap_err();
        assert!(matches!(err, FormatError::MalformedFrame(_)));
    }
}
