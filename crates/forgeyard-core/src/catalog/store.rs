//! Data-store boundary for the manufacturer catalog.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{ManufacturerRecord, NewManufacturer};
use crate::error::{ForgeyardError, Result};

/// Read/write access to the manufacturer catalog.
///
/// The matching core only reads the catalog; writes come in through the API
/// surface. Implementations must be safe to share across tasks.
#[async_trait]
pub trait ManufacturerStore: Send + Sync {
    /// All records, in insertion order.
    async fn find_all(&self) -> Result<Vec<ManufacturerRecord>>;

    /// A single record by id, or `None` if unknown.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ManufacturerRecord>>;

    /// Validate and insert a batch. All-or-nothing: the first invalid payload
    /// rejects the whole batch and nothing is stored.
    async fn insert_many(&self, batch: Vec<NewManufacturer>) -> Result<Vec<ManufacturerRecord>>;
}

/// In-memory catalog behind a `tokio::sync::RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ManufacturerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with existing records.
    pub fn with_records(records: Vec<ManufacturerRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ManufacturerStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<ManufacturerRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ManufacturerRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_many(&self, batch: Vec<NewManufacturer>) -> Result<Vec<ManufacturerRecord>> {
        for payload in &batch {
            payload.validate()?;
        }

        let now = Utc::now();
        let inserted: Vec<ManufacturerRecord> = batch
            .into_iter()
            .map(|m| ManufacturerRecord {
                id: Uuid::new_v4(),
                name: m.name,
                industry: m.industry,
                location: m.location,
                contact: m.contact,
                rating: m.rating,
                operations: m.operations,
                created_at: now,
                updated_at: now,
            })
            .collect();

        let mut records = self.records.write().await;
        records.extend(inserted.iter().cloned());
        debug!(
            "inserted {} manufacturers, catalog now holds {}",
            inserted.len(),
            records.len()
        );
        Ok(inserted)
    }
}

/// Load a JSON seed file holding an array of new-manufacturer payloads and
/// insert it through the store, so seeds get the same validation as API
/// writes.
pub async fn load_seed(
    store: &dyn ManufacturerStore,
    path: &Path,
) -> Result<Vec<ManufacturerRecord>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ForgeyardError::io_with_path(e, path))?;
    let batch: Vec<NewManufacturer> = serde_json::from_str(&raw)?;
    info!(
        "seeding catalog from {} ({} manufacturers)",
        path.display(),
        batch.len()
    );
    store.insert_many(batch).await
}
