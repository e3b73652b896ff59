//! Edit-distance matcher used for vocabulary lookups and capability overlap.

use crate::config::MatchingDefaults;

/// Weight of the Jaro-Winkler component in the blended distance. The
/// remainder goes to normalized Levenshtein, which punishes short strings
/// embedded in longer phrases too hard on its own.
const JARO_WEIGHT: f64 = 0.6;

/// String matcher with a distance threshold.
///
/// Distances run from 0.0 (identical, ignoring case) to 1.0 (nothing in
/// common). A candidate is accepted when its distance is at or below the
/// threshold, so lower thresholds mean stricter matching.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Blended distance between two strings, case-insensitive.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let jw = strsim::jaro_winkler(&a, &b);
        let lev = strsim::normalized_levenshtein(&a, &b);
        1.0 - (JARO_WEIGHT * jw + (1.0 - JARO_WEIGHT) * lev)
    }

    /// Closest candidate within the threshold, or `None`.
    ///
    /// Ties keep the earliest candidate, so callers get deterministic
    /// results from an ordered candidate list.
    pub fn best_match<'a>(&self, query: &str, candidates: &'a [String]) -> Option<&'a str> {
        let mut best: Option<(&'a str, f64)> = None;
        for candidate in candidates {
            let d = self.distance(query, candidate);
            let better = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if better {
                best = Some((candidate.as_str(), d));
            }
        }
        match best {
            Some((name, d)) if d <= self.threshold => Some(name),
            _ => None,
        }
    }

    /// Whether `query` matches any candidate within the threshold.
    pub fn matches_any(&self, query: &str, candidates: &[String]) -> bool {
        self.best_match(query, candidates).is_some()
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(MatchingDefaults::FUZZY_THRESHOLD)
    }
}
