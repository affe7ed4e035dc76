// src/host/fetcher.rs
//! Recursive block tree retrieval.

use super::{BlockSource, ChildRef};
use crate::error::AppError;
use crate::model::Block;
use crate::types::BlockId;
use futures::future::BoxFuture;
use std::collections::HashSet;
use std::sync::Arc;

/// Fetches a block and recursively resolves its children into a tree.
///
/// One provider call per node, children fetched sequentially in outline
/// order. A child that fails to resolve is dropped from the tree —
/// partial trees are preferred over total failure — and only failures
/// on the root propagate. A visited set guards against cyclic child
/// links, and `max_depth` caps nesting.
pub struct BlockTreeFetcher {
    source: Arc<dyn BlockSource>,
    max_depth: usize,
}

impl BlockTreeFetcher {
    pub fn new(source: Arc<dyn BlockSource>, max_depth: usize) -> Self {
        Self { source, max_depth }
    }

    /// Retrieves the tree rooted at `id`, or `None` when the root does not exist.
    pub async fn fetch(&self, id: &BlockId) -> Result<Option<Block>, AppError> {
        let mut visited = HashSet::new();
        self.fetch_node(id.clone(), 0, &mut visited).await
    }

    fn fetch_node<'a>(
        &'a self,
        id: BlockId,
        depth: usize,
        visited: &'a mut HashSet<BlockId>,
    ) -> BoxFuture<'a, Result<Option<Block>, AppError>> {
        Box::pin(async move {
            if !visited.insert(id.clone()) {
                log::warn!("Cyclic child reference to {}; skipping", id);
                return Ok(None);
            }

            let Some(raw) = self.source.block(&id).await? else {
                return Ok(None);
            };

            let mut children = Vec::new();
            if depth >= self.max_depth && !raw.children.is_empty() {
                log::warn!(
                    "Maximum nesting depth ({}) reached at {}; children dropped",
                    self.max_depth,
                    id
                );
            } else {
                for reference in &raw.children {
                    let Some(child_ref) = ChildRef::decode(reference) else {
                        log::debug!("Skipping unrecognized child reference {} of {}", reference, id);
                        continue;
                    };
                    let Some(child_id) = child_ref.block_id() else {
                        log::debug!("Skipping malformed child id '{}' of {}", child_ref.raw_id(), id);
                        continue;
                    };
                    match self.fetch_node(child_id.clone(), depth + 1, &mut *visited).await {
                        Ok(Some(child)) => children.push(child),
                        Ok(None) => {}
                        Err(e) => log::warn!("Skipping child {} of {}: {}", child_id, id, e),
                    }
                }
            }

            Ok(Some(Block {
                content: raw.content,
                children,
            }))
        })
    }
}
