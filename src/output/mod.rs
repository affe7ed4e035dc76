// src/output/mod.rs
//! Payload delivery — the system clipboard, or stdout in pipe mode.

mod clipboard;

pub use clipboard::{
    write_clipboard, write_with_strategies, ClipboardPayload, ClipboardStrategy,
};

use crate::error::AppError;
use crate::pipeline::PayloadSink;
use std::io::Write;

/// Delivers payloads to the system clipboard.
pub struct ClipboardSink;

impl PayloadSink for ClipboardSink {
    fn deliver(&self, payload: &ClipboardPayload) -> Result<(), AppError> {
        write_clipboard(payload)
    }
}

/// Prints the plain-text payload to stdout, for shell composition.
pub struct StdoutSink;

impl PayloadSink for StdoutSink {
    fn deliver(&self, payload: &ClipboardPayload) -> Result<(), AppError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(payload.text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
