// src/pipeline.rs
//! Pipeline capability traits — the three stages of one export.
//!
//! Each trait describes a single capability, enabling testing each
//! stage in isolation.

use crate::error::AppError;
use crate::model::Block;
use crate::output::ClipboardPayload;
use crate::types::BlockId;

/// Retrieves a block tree by root id; `None` when the root does not exist.
#[async_trait::async_trait]
pub trait TreeSource {
    async fn fetch_tree(&self, id: &BlockId) -> Result<Option<Block>, AppError>;
}

/// Transforms a block tree into a clipboard payload.
pub trait PayloadComposer {
    fn compose(&self, tree: &Block) -> ClipboardPayload;
}

/// Delivers a composed payload to its destination.
pub trait PayloadSink: Send + Sync {
    fn deliver(&self, payload: &ClipboardPayload) -> Result<(), AppError>;
}
