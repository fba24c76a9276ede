//! Formats one source file per process run, reading a JSON line on stdin and writing a
//! JSON line on stdout. Go sources are delegated back to the caller over the same two
//! streams with a `gofmt-request` / `gofmt-response` exchange.

pub mod app;
pub mod cli;
pub mod counterpart;
pub mod delegate;
pub mod error;
pub mod frame;
pub mod handler;
pub mod host;
pub mod options;
pub mod transport;
