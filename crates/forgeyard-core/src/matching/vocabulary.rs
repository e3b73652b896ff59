//! Canonical operation names that normalization resolves against.

use serde::{Deserialize, Serialize};

/// Stock manufacturing vocabulary used when no custom list is injected.
const BUILTIN_OPERATIONS: &[&str] = &[
    "Cutting",
    "Welding",
    "Sewing",
    "Milling",
    "Turning",
    "Drilling",
    "Forging",
    "Casting",
    "Machining",
    "Stamping",
    "Grinding",
    "Bending",
    "Assembly",
    "Painting",
    "Coating",
    "Plating",
    "Heat Treatment",
    "Surface Treatment",
    "Finishing",
    "Injection Molding",
    "CNC Machining",
    "Laser Cutting",
    "Extrusion",
    "3D Printing",
    "Waterjet Cutting",
    "Brazing",
    "Soldering",
    "Laminating",
    "Electroplating",
    "Anodizing",
    "Blow Molding",
    "Compression Molding",
    "Powder Coating",
    "Roll Forming",
    "Vacuum Forming",
    "Sandblasting",
    "Polishing",
    "Die Casting",
    "Threading",
    "Pressing",
    "Shearing",
    "EDM (Electrical Discharge Machining)",
    "Hot Isostatic Pressing",
    "Quenching",
    "Tempering",
    "Shot Peening",
    "packaging",
];

/// Immutable, ordered list of canonical operation names.
///
/// Membership tests are exact and case-sensitive. Order matters: fuzzy
/// lookups over the vocabulary break ties in favor of the earliest entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationVocabulary {
    names: Vec<String>,
}

impl OperationVocabulary {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The stock vocabulary shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_OPERATIONS.iter().map(|s| s.to_string()).collect())
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for OperationVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
