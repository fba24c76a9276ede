//! Handler registry - maps parser names (and file extensions) to handlers.
use crate::error::{FormatError, Result};
use crate::handler::{Handler, JsonFormatter, TextFormatter};
use crate::options::FormatOptions;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
    /// `.ext` -> parser name
    extensions: HashMap<String, String>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handlers shipped with the host: `go` is delegated, the rest run locally.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("go", &[".go"], Handler::Delegate);
        registry.register("json", &[".json"], Handler::local(JsonFormatter));
        registry.register("text", &[".txt"], Handler::local(TextFormatter));
        registry
    }

    /// Register `handler` under `parser`. A later registration for the same parser or
    /// extension replaces the earlier one.
    pub fn register(&mut self, parser: &str, extensions: &[&str], handler: Handler) {
        for ext in extensions {
            self.extensions
                .insert(ext.to_ascii_lowercase(), parser.to_string());
        }
        self.handlers.insert(parser.to_string(), handler);
    }

    /// Pick the parser name: the explicit `parser` option wins, otherwise infer it from
    /// the `filepath` extension.
    pub fn infer_parser<'a>(&'a self, options: &'a FormatOptions) -> Option<&'a str> {
        if let Some(parser) = options.parser.as_deref() {
            return Some(parser);
        }
        let ext = options.extension()?;
        self.extensions.get(&ext).map(String::as_str)
    }

    pub fn resolve(&self, options: &FormatOptions) -> Result<(String, &Handler)> {
        let parser = self.infer_parser(options).ok_or_else(|| {
            FormatError::UnsupportedLanguage(match options.filepath.as_deref() {
                Some(path) => format!("file \"{path}\""),
                None => "no parser or filepath given".to_string(),
            })
        })?;
        let handler = self
            .handlers
            .get(parser)
            .ok_or_else(|| FormatError::UnsupportedLanguage(format!("parser \"{parser}\"")))?;
        Ok((parser.to_string(), handler))
    }
}
