//! Capability scoring for a single manufacturer against a request.

use crate::catalog::ManufacturerRecord;
use crate::config::MatchingConfig;
use crate::matching::fuzzy::FuzzyMatcher;

/// Scores manufacturers against a normalized operation plus the requested
/// tools and materials.
///
/// Every capability entry is scored independently and the terms are summed,
/// so a manufacturer listing the same operation twice earns the operation
/// bonus twice. Scores are additive and have no upper bound.
#[derive(Debug, Clone)]
pub struct ManufacturerScorer {
    config: MatchingConfig,
    matcher: FuzzyMatcher,
}

impl ManufacturerScorer {
    pub fn new(config: MatchingConfig) -> Self {
        let matcher = FuzzyMatcher::new(config.fuzzy_threshold);
        Self { config, matcher }
    }

    /// Total score for one manufacturer. Zero means "no relevance at all";
    /// the engine drops those from the ranking.
    pub fn score(
        &self,
        manufacturer: &ManufacturerRecord,
        operation: &str,
        tools: &[String],
        materials: &[String],
    ) -> f64 {
        manufacturer
            .operations
            .iter()
            .map(|entry| {
                let mut score = 0.0;
                if entry.name == operation {
                    score += self.config.weights.operation;
                }
                score +=
                    self.coverage_term(materials, &entry.materials, self.config.weights.materials);
                score += self.coverage_term(tools, &entry.tools, self.config.weights.tools);
                score
            })
            .sum()
    }

    /// Proportional term with a hard floor: coverage below the floor earns
    /// nothing at all. An empty request list never earns the term.
    fn coverage_term(&self, requested: &[String], offered: &[String], weight: f64) -> f64 {
        if requested.is_empty() {
            return 0.0;
        }
        let covered = requested
            .iter()
            .filter(|item| self.is_covered(item, offered))
            .count();
        let fraction = covered as f64 / requested.len() as f64;
        if fraction >= self.config.coverage_floor {
            fraction * weight
        } else {
            0.0
        }
    }

    /// A requested item is covered when it appears verbatim in the offered
    /// list or fuzzy-matches one of its entries.
    fn is_covered(&self, item: &str, offered: &[String]) -> bool {
        offered.iter().any(|o| o == item) || self.matcher.matches_any(item, offered)
    }
}

impl Default for ManufacturerScorer {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}
