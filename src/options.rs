use serde::{Deserialize, Serialize};
use std::path::Path;

/// Widest indentation level `tabWidth` may ask for.
pub const MAX_TAB_WIDTH: usize = 64;

/// Caller-supplied formatting options, passed as one JSON object.
/// Keys the host does not read are kept in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_line: Option<EndOfLine>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    Auto,
}

impl EndOfLine {
    pub fn as_str(self) -> &'static str {
        match self {
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Cr => "\r",
            EndOfLine::Lf | EndOfLine::Auto => "\n",
        }
    }
}

impl FormatOptions {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// One indentation level, from `useTabs` / `tabWidth` (default two spaces).
    pub fn indent(&self) -> anyhow::Result<String> {
        if self.use_tabs.unwrap_or(false) {
            return Ok("\t".to_string());
        }
        let width = self.tab_width.unwrap_or(2);
        anyhow::ensure!(
            width <= MAX_TAB_WIDTH,
            "tabWidth {} is out of range (max {})",
            width,
            MAX_TAB_WIDTH
        );
        Ok(" ".repeat(width))
    }

    pub fn end_of_line(&self) -> EndOfLine {
        self.end_of_line.unwrap_or_default()
    }

    /// Lowercased extension of `filepath`, including the leading dot.
    pub fn extension(&self) -> Option<String> {
        let path = self.filepath.as_deref()?;
        let ext = Path::new(path).extension()?.to_str()?;
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }
}
