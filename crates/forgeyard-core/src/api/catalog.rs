//! Catalog methods on ForgeyardApi.

use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::catalog::{ManufacturerRecord, NewManufacturer};
use crate::error::{ForgeyardError, Result};
use crate::ForgeyardApi;

impl ForgeyardApi {
    // ========================================
    // Catalog Methods
    // ========================================

    /// Validate and add a batch of manufacturers. All-or-nothing: one
    /// invalid payload rejects the whole batch.
    pub async fn add_manufacturers(
        &self,
        batch: Vec<NewManufacturer>,
    ) -> Result<Vec<ManufacturerRecord>> {
        self.store.insert_many(batch).await
    }

    /// Every manufacturer in the catalog, in insertion order.
    pub async fn list_manufacturers(&self) -> Result<Vec<ManufacturerRecord>> {
        self.store.find_all().await
    }

    /// A single manufacturer by id.
    pub async fn get_manufacturer(&self, id: Uuid) -> Result<ManufacturerRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ForgeyardError::ManufacturerNotFound { id: id.to_string() })
    }

    /// A random sample of up to `count` manufacturers, for storefront-style
    /// showcases. Order changes between calls.
    pub async fn featured_manufacturers(&self, count: usize) -> Result<Vec<ManufacturerRecord>> {
        let mut records = self.store.find_all().await?;
        let mut rng = rand::rng();
        records.shuffle(&mut rng);
        records.truncate(count);
        Ok(records)
    }
}
