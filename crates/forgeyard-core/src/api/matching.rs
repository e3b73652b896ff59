//! Matching and ranking methods on ForgeyardApi.

use crate::catalog::MatchRequest;
use crate::error::Result;
use crate::matching::{MatchOutcome, OperationVocabulary};
use crate::ForgeyardApi;

impl ForgeyardApi {
    // ========================================
    // Matching & Ranking Methods
    // ========================================

    /// Rank catalog manufacturers for a request.
    ///
    /// The free-text operation is normalized once through the chat backend,
    /// then every manufacturer is scored and the relevant ones returned in
    /// descending score order. Yields [`MatchOutcome::NoMatch`] when nothing
    /// scores above zero, and fails with
    /// [`crate::ForgeyardError::NormalizationFailed`] when the backend is
    /// unreachable or replies outside its contract.
    pub async fn match_manufacturers(&self, request: &MatchRequest) -> Result<MatchOutcome> {
        self.engine.rank(request).await
    }

    /// The vocabulary requests are normalized against.
    pub fn vocabulary(&self) -> &OperationVocabulary {
        self.engine.normalizer().vocabulary()
    }
}
