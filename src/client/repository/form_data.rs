//! Lookup data for admin forms: blocks and active specializations.

use crate::client::api::envelope::{BlocksResponse, SpecializationsResponse};
use crate::client::api::{endpoints, RequestBody};
use crate::client::repository::{settle, Gateway};
use crate::shared::models::{Block, Specialization};
use crate::shared::Outcome;

const BLOCKS_FALLBACK: &str = "Error al obtener bloques";
const SPECIALIZATIONS_FALLBACK: &str = "Error al obtener especializaciones";

#[derive(Debug, Clone)]
pub struct FormDataRepository {
    gateway: Gateway,
}

impl FormDataRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn blocks(&self) -> Outcome<Vec<Block>> {
        let result = self
            .gateway
            .fetch::<BlocksResponse>(&endpoints::blocks(), RequestBody::Empty, BLOCKS_FALLBACK)
            .await;
        settle("form_data.blocks", result)
    }

    pub async fn specializations(&self) -> Outcome<Vec<Specialization>> {
        let result = self
            .gateway
            .fetch::<SpecializationsResponse>(
                &endpoints::specializations(),
                RequestBody::Empty,
                SPECIALIZATIONS_FALLBACK,
            )
            .await;
        settle("form_data.specializations", result)
    }
}
