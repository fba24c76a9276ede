// in-process formatters bundled with the host
use crate::handler::LocalFormatter;
use crate::options::FormatOptions;
use anyhow::Context;
use serde::Serialize;

/// Re-indents a JSON document.
pub struct JsonFormatter;

impl LocalFormatter for JsonFormatter {
    fn format(&self, source: &str, options: &FormatOptions) -> anyhow::Result<String> {
        let value: serde_json::Value =
            serde_json::from_str(source).context("json: parsing input")?;

        let indent = options.indent().context("json: invalid options")?;
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser).context("json: writing output")?;

        let mut out = String::from_utf8(buf).context("json: output is not UTF-8")?;
        out.push('\n');
        Ok(apply_end_of_line(&out, options))
    }
}

/// Normalizes line endings, strips trailing whitespace, ends with exactly one newline.
pub struct TextFormatter;

impl LocalFormatter for TextFormatter {
    fn format(&self, source: &str, options: &FormatOptions) -> anyhow::Result<String> {
        let mut out = String::with_capacity(source.len());
        for line in split_lines(source) {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(apply_end_of_line(&out, options))
    }
}

/// Splits on `\r\n`, `\r` or `\n`.
fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    s.split('\n').flat_map(|l| {
        let l = l.strip_suffix('\r').unwrap_or(l);
        l.split('\r')
    })
}

// input is `\n`-terminated
fn apply_end_of_line(s: &str, options: &FormatOptions) -> String {
    let eol = options.end_of_line().as_str();
    if eol == "\n" {
        s.to_string()
    } else {
        s.replace('\n', eol)
    }
}
