//! Ranking pipeline: normalize once, score everything, filter, sort.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{ManufacturerRecord, ManufacturerStore, MatchRequest};
use crate::error::Result;
use crate::matching::normalizer::OperationNormalizer;
use crate::matching::scorer::ManufacturerScorer;

/// One candidate with the score that places it. Lives only for the duration
/// of a ranking call; the outcome exposes plain records.
struct ScoredCandidate {
    record: ManufacturerRecord,
    score: f64,
}

/// Result of a ranking run.
///
/// `NoMatch` is a real outcome, not an error: the pipeline ran to completion
/// and no manufacturer scored above zero. Both variants carry the operation
/// the request was normalized to. The ranked list holds the original records
/// in best-first order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    Ranked {
        operation: String,
        manufacturers: Vec<ManufacturerRecord>,
    },
    NoMatch {
        operation: String,
    },
}

/// Runs the full matching pipeline against the catalog.
///
/// Normalization happens exactly once per request; its result is scored
/// against every candidate. A failed normalization aborts the run before
/// the catalog is consulted.
pub struct MatchEngine {
    store: Arc<dyn ManufacturerStore>,
    normalizer: OperationNormalizer,
    scorer: ManufacturerScorer,
}

impl MatchEngine {
    pub fn new(
        store: Arc<dyn ManufacturerStore>,
        normalizer: OperationNormalizer,
        scorer: ManufacturerScorer,
    ) -> Self {
        Self {
            store,
            normalizer,
            scorer,
        }
    }

    pub fn normalizer(&self) -> &OperationNormalizer {
        &self.normalizer
    }

    /// Rank every manufacturer in the catalog against the request.
    pub async fn rank(&self, request: &MatchRequest) -> Result<MatchOutcome> {
        let operation = self
            .normalizer
            .normalize(&request.operation, &request.tools, &request.materials)
            .await?;
        let candidates = self.store.find_all().await?;
        Ok(self.rank_with_operation(request, operation, candidates))
    }

    /// Rank the given candidates instead of the catalog.
    pub async fn rank_candidates(
        &self,
        request: &MatchRequest,
        candidates: Vec<ManufacturerRecord>,
    ) -> Result<MatchOutcome> {
        let operation = self
            .normalizer
            .normalize(&request.operation, &request.tools, &request.materials)
            .await?;
        Ok(self.rank_with_operation(request, operation, candidates))
    }

    fn rank_with_operation(
        &self,
        request: &MatchRequest,
        operation: String,
        candidates: Vec<ManufacturerRecord>,
    ) -> MatchOutcome {
        let total = candidates.len();
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter_map(|record| {
                let score =
                    self.scorer
                        .score(&record, &operation, &request.tools, &request.materials);
                (score > 0.0).then_some(ScoredCandidate { record, score })
            })
            .collect();

        // Stable sort keeps catalog order among equal scores.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        if scored.is_empty() {
            info!(
                "no relevant manufacturers for '{}' ({} candidates checked)",
                operation, total
            );
            return MatchOutcome::NoMatch { operation };
        }
        info!(
            "ranked {} of {} manufacturers for '{}'",
            scored.len(),
            total,
            operation
        );
        MatchOutcome::Ranked {
            operation,
            manufacturers: scored.into_iter().map(|c| c.record).collect(),
        }
    }
}
