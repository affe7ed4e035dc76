// src/export.rs
//! The per-format export operation: fetch → format → deliver → notify.

use crate::error::AppError;
use crate::format::html::to_html_fragment;
use crate::format::ExportFormat;
use crate::host::{BlockSource, BlockTreeFetcher, Notifier};
use crate::model::Block;
use crate::output::ClipboardPayload;
use crate::pipeline::{PayloadComposer, PayloadSink, TreeSource};
use crate::types::BlockId;
use std::sync::Arc;

/// Exports one block tree to a target format.
///
/// Exactly one user notification is sent per call. Any failure is
/// logged, surfaced through the notifier, and re-raised to the caller.
pub struct Exporter {
    fetcher: BlockTreeFetcher,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn PayloadSink>,
    format: ExportFormat,
}

impl Exporter {
    pub fn new(
        source: Arc<dyn BlockSource>,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn PayloadSink>,
        format: ExportFormat,
        max_depth: usize,
    ) -> Self {
        Self {
            fetcher: BlockTreeFetcher::new(source, max_depth),
            notifier,
            sink,
            format,
        }
    }

    /// Runs the full export for `id`, notifying the user of the outcome.
    pub async fn export_block(&self, id: &BlockId) -> Result<(), AppError> {
        let label = self.format.display_name();

        match self.run(id).await {
            Ok(()) => {
                self.notifier
                    .notify(&format!("Block exported to {} format!", label))
                    .await;
                Ok(())
            }
            Err(e) => {
                log::error!("Error exporting block {} to {}: {}", id, label, e);
                self.notifier
                    .notify(&format!("Error exporting block to {} format", label))
                    .await;
                Err(e)
            }
        }
    }

    async fn run(&self, id: &BlockId) -> Result<(), AppError> {
        let tree = self
            .fetch_tree(id)
            .await?
            .ok_or_else(|| AppError::BlockNotFound(id.to_string()))?;

        log::info!(
            "Fetched block {}: {} blocks, depth {}",
            id,
            tree.node_count(),
            tree.depth()
        );

        let payload = self.compose(&tree);
        self.sink.deliver(&payload)
    }
}

#[async_trait::async_trait]
impl TreeSource for Exporter {
    async fn fetch_tree(&self, id: &BlockId) -> Result<Option<Block>, AppError> {
        self.fetcher.fetch(id).await
    }
}

impl PayloadComposer for Exporter {
    fn compose(&self, tree: &Block) -> ClipboardPayload {
        let text = self.format.render(tree);
        if self.format.wants_html() {
            let html = to_html_fragment(&text);
            ClipboardPayload::with_html(text, html)
        } else {
            ClipboardPayload::plain(text)
        }
    }
}
