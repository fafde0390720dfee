//! Queries layered on the reference data
//!
//! Each query waits for initialization so that the transfers it returns can
//! be denormalized against a settled entity catalog.

use log::debug;
use serde::de::DeserializeOwned;
use tsosi_core::{Analytic, Entity, EntityDetails, Paginated, Transfer, TransferDetails};
use tsosi_gateway::Routes;
use tsosi_ports::{FetchRequest, decode};

use crate::error::{RefDataError, RefDataResult};
use crate::store::ReferenceStore;

impl ReferenceStore {
    /// Transfers, all of them or those involving `entity_id`
    pub async fn transfers(&self, entity_id: Option<&str>) -> RefDataResult<Vec<Transfer>> {
        let mut transfers: Vec<Transfer> = self.query(Routes::transfers(entity_id)).await?;
        self.attach_all(&mut transfers);
        Ok(transfers)
    }

    pub async fn transfer_details(&self, id: &str) -> RefDataResult<TransferDetails> {
        let mut details: TransferDetails = self.query(Routes::transfer_details(id)).await?;
        self.attach(&mut details);
        Ok(details)
    }

    pub async fn entity_details(&self, id: &str) -> RefDataResult<EntityDetails> {
        self.query(Routes::entity_details(id)).await
    }

    /// Yearly analytics of a recipient
    pub async fn analytics(&self, entity_id: &str) -> RefDataResult<Vec<Analytic>> {
        self.query(Routes::analytics(entity_id)).await
    }

    /// Entities that funded `entity_id`
    pub async fn emitters_for_entity(&self, entity_id: &str) -> RefDataResult<Vec<Entity>> {
        self.query(Routes::emitters_for_entity(entity_id)).await
    }

    /// First page of entities matching `query`, recipients first
    pub async fn search_entities(&self, query: &str) -> RefDataResult<Paginated<Entity>> {
        if query.is_empty() {
            return Err(RefDataError::EmptyQuery);
        }
        self.query(Routes::entity_search(query)).await
    }

    /// Page behind a `next` or `previous` link of an earlier page
    pub async fn follow_page<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> RefDataResult<Paginated<T>> {
        if url.is_empty() {
            return Err(RefDataError::EmptyQuery);
        }
        debug!("Following page {}", url);
        let value = self.gateway.fetch_url(url).await?;
        Ok(decode(value)?)
    }

    async fn query<T: DeserializeOwned>(&self, request: FetchRequest) -> RefDataResult<T> {
        self.initialize().await;
        debug!("Query {}", request);
        let value = self.gateway.get(&request).await?;
        Ok(decode(value)?)
    }
}
