//! Builder for configuring ForgeyardApi initialization.

use std::sync::Arc;

use crate::catalog::{ManufacturerStore, MemoryStore};
use crate::config::{LlmConfig, MatchingConfig};
use crate::llm::{ChatBackend, ChatClient};
use crate::matching::{
    FuzzyMatcher, ManufacturerScorer, MatchEngine, OperationNormalizer, OperationVocabulary,
};
use crate::planner::ProductPlanner;
use crate::ForgeyardApi;

/// Builder for configuring ForgeyardApi initialization.
///
/// Every option has a working default; `build` never fails.
///
/// # Example
///
/// ```rust,ignore
/// use forgeyard_core::{ForgeyardApi, LlmConfig};
///
/// let api = ForgeyardApi::builder()
///     .with_llm_config(LlmConfig {
///         api_key: std::env::var("OPENAI_API_KEY").ok(),
///         ..LlmConfig::default()
///     })
///     .build();
/// ```
pub struct ForgeyardApiBuilder {
    store: Option<Arc<dyn ManufacturerStore>>,
    backend: Option<Arc<dyn ChatBackend>>,
    llm_config: LlmConfig,
    vocabulary: OperationVocabulary,
    matching_config: MatchingConfig,
}

impl ForgeyardApiBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            backend: None,
            llm_config: LlmConfig::default(),
            vocabulary: OperationVocabulary::builtin(),
            matching_config: MatchingConfig::default(),
        }
    }

    /// Use a custom catalog store.
    ///
    /// Default: an empty [`MemoryStore`].
    pub fn with_store(mut self, store: Arc<dyn ManufacturerStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a custom chat backend, e.g. a scripted one in tests.
    ///
    /// Takes precedence over `with_llm_config`.
    pub fn with_backend(mut self, backend: Arc<dyn ChatBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Configure the HTTP chat client. Ignored when a backend is injected.
    ///
    /// Default: [`LlmConfig::default`].
    pub fn with_llm_config(mut self, config: LlmConfig) -> Self {
        self.llm_config = config;
        self
    }

    /// Replace the operation vocabulary normalization resolves against.
    ///
    /// Default: [`OperationVocabulary::builtin`].
    pub fn with_vocabulary(mut self, vocabulary: OperationVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Override matching thresholds and score weights.
    ///
    /// Default: [`MatchingConfig::default`].
    pub fn with_matching_config(mut self, config: MatchingConfig) -> Self {
        self.matching_config = config;
        self
    }

    /// Assemble the API. The chat backend is shared between the match
    /// engine and the planner.
    pub fn build(self) -> ForgeyardApi {
        let store: Arc<dyn ManufacturerStore> = match self.store {
            Some(store) => store,
            None => Arc::new(MemoryStore::new()),
        };
        let backend: Arc<dyn ChatBackend> = match self.backend {
            Some(backend) => backend,
            None => Arc::new(ChatClient::new(self.llm_config)),
        };

        let matcher = FuzzyMatcher::new(self.matching_config.fuzzy_threshold);
        let normalizer = OperationNormalizer::new(backend.clone(), self.vocabulary, matcher);
        let scorer = ManufacturerScorer::new(self.matching_config);
        let engine = MatchEngine::new(store.clone(), normalizer, scorer);
        let planner = ProductPlanner::new(backend);

        ForgeyardApi {
            store,
            engine,
            planner,
        }
    }
}

impl Default for ForgeyardApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
