//! Resolves free-text operation names to vocabulary entries.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ForgeyardError, Result};
use crate::llm::{extract_json, prompts, ChatBackend};
use crate::matching::fuzzy::FuzzyMatcher;
use crate::matching::vocabulary::OperationVocabulary;

/// Reply shape the chat backend must produce. Extra fields are ignored;
/// a missing or mistyped `normalized_operation` fails the request.
#[derive(Debug, Deserialize)]
struct NormalizedReply {
    normalized_operation: String,
}

/// Normalizes a requested operation against the vocabulary.
///
/// The chat backend proposes a canonical name using the request's tools and
/// materials as context. The proposal is resolved against the vocabulary,
/// exactly first and fuzzily second; when neither resolves, the caller's raw
/// operation text is kept so scoring can still run against it.
pub struct OperationNormalizer {
    backend: Arc<dyn ChatBackend>,
    vocabulary: OperationVocabulary,
    matcher: FuzzyMatcher,
    instructions: String,
}

impl OperationNormalizer {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        vocabulary: OperationVocabulary,
        matcher: FuzzyMatcher,
    ) -> Self {
        let instructions = prompts::normalization_instructions(&vocabulary);
        Self {
            backend,
            vocabulary,
            matcher,
            instructions,
        }
    }

    pub fn vocabulary(&self) -> &OperationVocabulary {
        &self.vocabulary
    }

    /// Resolve `operation` to a canonical name.
    ///
    /// Fails with [`ForgeyardError::NormalizationFailed`] when the backend
    /// errors or replies outside the JSON contract; callers must not rank
    /// on a failed normalization.
    pub async fn normalize(
        &self,
        operation: &str,
        tools: &[String],
        materials: &[String],
    ) -> Result<String> {
        let user = prompts::normalization_request(operation, tools, materials);
        let reply = self
            .backend
            .complete(&self.instructions, &user)
            .await
            .map_err(|e| normalization_failed(format!("chat backend failed: {e}")))?;

        let proposed = parse_reply(&reply)?;
        debug!("backend proposed '{}' for operation '{}'", proposed, operation);

        if self.vocabulary.contains(&proposed) {
            return Ok(proposed);
        }
        if let Some(name) = self.matcher.best_match(&proposed, self.vocabulary.names()) {
            debug!("fuzzy-resolved '{}' to vocabulary entry '{}'", proposed, name);
            return Ok(name.to_string());
        }
        debug!(
            "'{}' matches no vocabulary entry, keeping raw operation '{}'",
            proposed, operation
        );
        Ok(operation.to_string())
    }
}

fn normalization_failed(reason: String) -> ForgeyardError {
    ForgeyardError::NormalizationFailed { reason }
}

fn parse_reply(reply: &str) -> Result<String> {
    let json = extract_json(reply)
        .ok_or_else(|| normalization_failed("reply contains no JSON object".to_string()))?;
    let parsed: NormalizedReply = serde_json::from_str(json)
        .map_err(|e| normalization_failed(format!("reply failed to parse: {e}")))?;
    Ok(parsed.normalized_operation)
}
