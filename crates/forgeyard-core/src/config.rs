//! Centralized configuration for forgeyard.
//!
//! This module provides constants for network operations plus the value
//! configurations injected into the matching core and the LLM client at
//! construction time.

use std::time::Duration;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    /// Total timeout for one text-service round trip. Normalization treats
    /// hitting this the same as a transport failure.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &'static str = "forgeyard";
}

/// Default tuning values for the matching core.
pub struct MatchingDefaults;

impl MatchingDefaults {
    /// Distance cutoff for fuzzy matches (0-1 scale, lower = stricter).
    pub const FUZZY_THRESHOLD: f64 = 0.3;
    /// Minimum fraction of requested items an entry must cover before its
    /// proportional term counts at all.
    pub const COVERAGE_FLOOR: f64 = 0.7;
    pub const OPERATION_WEIGHT: f64 = 20.0;
    pub const MATERIALS_WEIGHT: f64 = 30.0;
    pub const TOOLS_WEIGHT: f64 = 50.0;
}

/// Weights for the three capability scoring terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Flat bonus for an exact operation-name match.
    pub operation: f64,
    /// Ceiling of the proportional materials term.
    pub materials: f64,
    /// Ceiling of the proportional tools term.
    pub tools: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            operation: MatchingDefaults::OPERATION_WEIGHT,
            materials: MatchingDefaults::MATERIALS_WEIGHT,
            tools: MatchingDefaults::TOOLS_WEIGHT,
        }
    }
}

/// Tuning knobs for the matching core, injected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Fuzzy-match distance cutoff, applied both in normalization and in
    /// material/tool matching.
    pub fuzzy_threshold: f64,
    /// Coverage cliff: proportional terms below this fraction earn nothing.
    pub coverage_floor: f64,
    pub weights: ScoreWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: MatchingDefaults::FUZZY_THRESHOLD,
            coverage_floor: MatchingDefaults::COVERAGE_FLOOR,
            weights: ScoreWeights::default(),
        }
    }
}

/// Connection settings for the external text-normalization service.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible chat completions endpoint.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            timeout: NetworkConfig::REQUEST_TIMEOUT,
        }
    }
}
