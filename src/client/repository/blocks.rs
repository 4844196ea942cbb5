//! Admin block management: detail, create, update, toggle and delete.

use crate::client::api::envelope::{AckResponse, BlockResponse};
use crate::client::api::{endpoints, RequestBody};
use crate::client::repository::{settle, Gateway};
use crate::shared::models::{Block, BlockDraft};
use crate::shared::{ClientError, Outcome};

const BLOCK_FALLBACK: &str = "Error al obtener el bloque";
const CREATE_BLOCK_FALLBACK: &str = "Error al crear el bloque";
const UPDATE_BLOCK_FALLBACK: &str = "Error al actualizar el bloque";
const TOGGLE_BLOCK_FALLBACK: &str = "Error al cambiar el estado del bloque";
const DELETE_BLOCK_FALLBACK: &str = "Error al eliminar el bloque";

#[derive(Debug, Clone)]
pub struct BlockRepository {
    gateway: Gateway,
}

impl BlockRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn block(&self, block_id: i64) -> Outcome<Block> {
        let result = self
            .gateway
            .fetch::<BlockResponse>(&endpoints::block(block_id), RequestBody::Empty, BLOCK_FALLBACK)
            .await;
        settle("block", result)
    }

    pub async fn create_block(&self, draft: &BlockDraft) -> Outcome<Block> {
        let result = self.save(&endpoints::create_block(), draft, CREATE_BLOCK_FALLBACK).await;
        settle("create_block", result)
    }

    pub async fn update_block(&self, block_id: i64, draft: &BlockDraft) -> Outcome<Block> {
        let result = self
            .save(&endpoints::update_block(block_id), draft, UPDATE_BLOCK_FALLBACK)
            .await;
        settle("update_block", result)
    }

    pub async fn toggle_block(&self, block_id: i64) -> Outcome<()> {
        let result = self
            .gateway
            .fetch::<AckResponse>(
                &endpoints::toggle_block(block_id),
                RequestBody::Empty,
                TOGGLE_BLOCK_FALLBACK,
            )
            .await;
        settle("toggle_block", result)
    }

    pub async fn delete_block(&self, block_id: i64) -> Outcome<()> {
        let result = self
            .gateway
            .fetch::<AckResponse>(
                &endpoints::delete_block(block_id),
                RequestBody::Empty,
                DELETE_BLOCK_FALLBACK,
            )
            .await;
        settle("delete_block", result)
    }

    async fn save(
        &self,
        endpoint: &endpoints::Endpoint,
        draft: &BlockDraft,
        fallback: &str,
    ) -> Result<Block, ClientError> {
        let body = RequestBody::json(draft)?;
        self.gateway.fetch::<BlockResponse>(endpoint, body, fallback).await
    }
}
