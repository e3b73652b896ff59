//! Manufacturer matching: vocabulary, fuzzy lookup, normalization, scoring,
//! and the ranking pipeline that ties them together.

mod engine;
mod fuzzy;
mod normalizer;
mod scorer;
mod vocabulary;

pub use engine::{MatchEngine, MatchOutcome};
pub use fuzzy::FuzzyMatcher;
pub use normalizer::OperationNormalizer;
pub use scorer::ManufacturerScorer;
pub use vocabulary::OperationVocabulary;
