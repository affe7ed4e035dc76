// src/host/mod.rs
//! Outline host interaction — the ability to retrieve blocks and show
//! messages in the host UI.
//!
//! Business logic depends on the capability traits here, never on HTTP
//! details, so every consumer can be driven by a test double.

mod client;
mod fetcher;
mod refs;

pub use client::HostHttpClient;
pub use fetcher::BlockTreeFetcher;
pub use refs::ChildRef;

use crate::error::AppError;
use crate::types::BlockId;
use serde::Deserialize;

/// The ability to retrieve raw blocks from the outline host.
#[async_trait::async_trait]
pub trait BlockSource: Send + Sync {
    /// Retrieves one block, or `None` when the host reports no such block.
    /// Not-found is a normal outcome, never an error.
    async fn block(&self, id: &BlockId) -> Result<Option<HostBlock>, AppError>;
}

/// The ability to show a transient message in the host UI.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Shows a transient message. Best-effort: failures are logged, never raised.
    async fn notify(&self, message: &str);
}

/// A notifier that writes messages to the log instead of the host UI.
/// Used in pipe mode, where stdout must stay clean for the payload.
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// One block as the host returns it: text content plus child references
/// in whatever shape the host chose to encode them.
#[derive(Debug, Clone, Deserialize)]
pub struct HostBlock {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub children: Vec<serde_json::Value>,
}
