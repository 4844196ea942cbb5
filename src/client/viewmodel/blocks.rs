//! Admin block management screen.
//!
//! Blocks are shown grouped by level, in level order. Selecting a block opens
//! its detail dialog; every successful change reloads the list.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::watch;

use crate::client::repository::{AuthRepository, BlockRepository};
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::{Block, BlockDraft};
use crate::shared::Outcome;

/// Blocks keyed by level
pub type BlocksByLevel = BTreeMap<String, Vec<Block>>;

pub fn group_by_level(blocks: Vec<Block>) -> BlocksByLevel {
    let mut grouped = BlocksByLevel::new();
    for block in blocks {
        grouped.entry(block.level.clone()).or_default().push(block);
    }
    grouped
}

#[derive(Debug, Clone)]
struct BlocksCore {
    listing: AuthRepository,
    repository: BlockRepository,
    blocks: Loadable<BlocksByLevel>,
    action: Loadable<()>,
}

impl BlocksCore {
    async fn load(&self) -> bool {
        self.blocks
            .run(async { self.listing.blocks().await.map(group_by_level) })
            .await
    }

    /// Run a change and reload the list when it succeeds.
    async fn apply<F>(&self, change: F) -> bool
    where
        F: std::future::Future<Output = Outcome<()>>,
    {
        let succeeded = self.action.run(change).await;
        if succeeded {
            self.load().await;
        }
        succeeded
    }

    async fn create(&self, draft: BlockDraft) -> bool {
        self.apply(async { self.repository.create_block(&draft).await.map(|_| ()) })
            .await
    }

    async fn update(&self, block_id: i64, draft: BlockDraft) -> bool {
        self.apply(async {
            self.repository
                .update_block(block_id, &draft)
                .await
                .map(|_| ())
        })
        .await
    }

    async fn toggle(&self, block_id: i64) -> bool {
        self.apply(self.repository.toggle_block(block_id)).await
    }

    async fn delete(&self, block_id: i64) -> bool {
        self.apply(self.repository.delete_block(block_id)).await
    }
}

#[derive(Debug)]
pub struct AdminBlocksViewModel {
    core: BlocksCore,
    selected: Arc<watch::Sender<Option<Block>>>,
    scope: TaskScope,
}

impl AdminBlocksViewModel {
    pub fn new(listing: AuthRepository, repository: BlockRepository) -> Self {
        let (selected, _rx) = watch::channel(None);
        Self {
            core: BlocksCore {
                listing,
                repository,
                blocks: Loadable::new(),
                action: Loadable::new(),
            },
            selected: Arc::new(selected),
            scope: TaskScope::new(),
        }
    }

    pub fn blocks(&self) -> watch::Receiver<UiState<BlocksByLevel>> {
        self.core.blocks.subscribe()
    }

    /// State of the last create/update/toggle/delete
    pub fn action_state(&self) -> watch::Receiver<UiState<()>> {
        self.core.action.subscribe()
    }

    pub fn selected_block(&self) -> watch::Receiver<Option<Block>> {
        self.selected.subscribe()
    }

    pub fn select_block(&self, block: Block) {
        self.selected.send_replace(Some(block));
    }

    pub fn dismiss_dialog(&self) {
        self.selected.send_replace(None);
    }

    pub async fn load_blocks(&self) -> bool {
        self.core.load().await
    }

    pub fn spawn_load_blocks(&self) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.load().await;
        });
    }

    pub async fn create_block(&self, draft: BlockDraft) -> bool {
        self.core.create(draft).await
    }

    pub fn spawn_create_block(&self, draft: BlockDraft) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.create(draft).await;
        });
    }

    pub async fn update_block(&self, block_id: i64, draft: BlockDraft) -> bool {
        self.core.update(block_id, draft).await
    }

    pub fn spawn_update_block(&self, block_id: i64, draft: BlockDraft) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.update(block_id, draft).await;
        });
    }

    pub async fn toggle_block(&self, block_id: i64) -> bool {
        self.core.toggle(block_id).await
    }

    pub fn spawn_toggle_block(&self, block_id: i64) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.toggle(block_id).await;
        });
    }

    /// Delete a block, closing its dialog if it was open.
    pub async fn delete_block(&self, block_id: i64) -> bool {
        let deleted = self.core.delete(block_id).await;
        if deleted {
            close_if_selected(&self.selected, block_id);
        }
        deleted
    }

    pub fn spawn_delete_block(&self, block_id: i64) {
        let core = self.core.clone();
        let selected = Arc::clone(&self.selected);
        self.scope.spawn(async move {
            if core.delete(block_id).await {
                close_if_selected(&selected, block_id);
            }
        });
    }
}

fn close_if_selected(selected: &watch::Sender<Option<Block>>, block_id: i64) {
    selected.send_if_modified(|current| {
        if current.as_ref().is_some_and(|b| b.id == block_id) {
            *current = None;
            true
        } else {
            false
        }
    });
}
