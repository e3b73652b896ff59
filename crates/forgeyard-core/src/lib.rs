//! Forgeyard Core - Headless library for manufacturer matching, ranking,
//! and production planning.
//!
//! This crate holds the full matching pipeline (operation normalization
//! through a chat backend, fuzzy vocabulary resolution, capability scoring,
//! ranking), the manufacturer catalog, and the production planning
//! generators. It can be used programmatically without any HTTP layer; for
//! the REST server see the `forgeyard-server` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use forgeyard_core::{ForgeyardApi, MatchOutcome, MatchRequest};
//!
//! #[tokio::main]
//! async fn main() -> forgeyard_core::Result<()> {
//!     let api = ForgeyardApi::builder().build();
//!
//!     let outcome = api
//!         .match_manufacturers(&MatchRequest {
//!             operation: "arc welding".into(),
//!             tools: vec!["MIG Welder".into()],
//!             materials: vec!["Steel".into()],
//!         })
//!         .await?;
//!
//!     match outcome {
//!         MatchOutcome::Ranked { manufacturers, .. } => {
//!             println!("Found {} manufacturers", manufacturers.len());
//!         }
//!         MatchOutcome::NoMatch { operation } => {
//!             println!("Nobody relevant for {operation}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod matching;
pub mod planner;

mod api;

// Re-export commonly used types
pub use catalog::{
    load_seed, CapabilityEntry, ContactInfo, ManufacturerRecord, ManufacturerStore, MatchRequest,
    MemoryStore, NewManufacturer,
};
pub use config::{LlmConfig, MatchingConfig, ScoreWeights};
pub use error::{ForgeyardError, Result};
pub use llm::{ChatBackend, ChatClient, ScriptedBackend};
pub use matching::{
    FuzzyMatcher, ManufacturerScorer, MatchEngine, MatchOutcome, OperationNormalizer,
    OperationVocabulary,
};
pub use planner::{
    InspectionPlan, InspectionStages, InspectionStep, PlannedOperation, ProcessSheet,
    ProductPlanner, Variant, VariantSheet,
};

// Re-export builder from api module
pub use api::ForgeyardApiBuilder;

use std::sync::Arc;

/// Main API struct for Forgeyard operations.
///
/// This is the primary entry point for programmatic access: catalog writes
/// and reads, manufacturer matching, and production planning. Construction
/// goes through [`ForgeyardApi::builder`], which wires one shared chat
/// backend into both the match engine and the planner.
pub struct ForgeyardApi {
    /// Catalog handle, shared with the match engine.
    store: Arc<dyn ManufacturerStore>,
    engine: MatchEngine,
    planner: ProductPlanner,
}

impl ForgeyardApi {
    /// Create an API with default configuration: an empty in-memory store,
    /// the builtin vocabulary, and an HTTP chat client against the default
    /// endpoint.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder for custom stores, backends, vocabularies, and weights.
    pub fn builder() -> ForgeyardApiBuilder {
        ForgeyardApiBuilder::new()
    }

    /// Shared handle to the catalog store, e.g. for seeding at startup.
    pub fn store(&self) -> Arc<dyn ManufacturerStore> {
        self.store.clone()
    }
}

impl Default for ForgeyardApi {
    fn default() -> Self {
        Self::new()
    }
}
