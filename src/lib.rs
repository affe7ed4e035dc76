// src/lib.rs
//! outline2clip library — exports outliner block trees as chat- and
//! document-ready clipboard content.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `ExportConfig`
//! - **Domain model** — `Block`, `BlockId`, `ApiToken`
//! - **Host access** — `BlockSource`, `Notifier`, `HostHttpClient`, `BlockTreeFetcher`
//! - **Formatting** — `ExportFormat`, `to_html_fragment`
//! - **Delivery** — `ClipboardPayload`, `ClipboardStrategy`, the sinks
//! - **Pipeline traits** — `TreeSource`, `PayloadComposer`, `PayloadSink`

mod config;
mod error;
mod export;
mod format;
mod host;
mod model;
mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig};

// --- Domain Model ---
pub use crate::model::Block;
pub use crate::types::{ApiToken, BlockId};

// --- Host Access ---
pub use crate::host::{
    BlockSource, BlockTreeFetcher, ChildRef, HostBlock, HostHttpClient, LogNotifier, Notifier,
};

// --- Formatting ---
pub use crate::format::html::to_html_fragment;
pub use crate::format::{render_tree, BulletRule, ExportFormat, FormatStyle};

// --- Delivery ---
pub use crate::export::Exporter;
pub use crate::output::{
    write_clipboard, write_with_strategies, ClipboardPayload, ClipboardSink, ClipboardStrategy,
    StdoutSink,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{PayloadComposer, PayloadSink, TreeSource};
