//! Catalog record types and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ForgeyardError, Result};

/// Contact details for a manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// One operation a manufacturer offers, with the materials it handles and
/// the tools it uses. Materials and tools are non-empty at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityEntry {
    pub name: String,
    pub materials: Vec<String>,
    pub tools: Vec<String>,
}

/// A manufacturer as stored in the catalog.
///
/// Owned by the store; the matching core only ever reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub contact: ContactInfo,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub operations: Vec<CapabilityEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for adding a manufacturer. The store validates it before insert
/// and assigns the id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewManufacturer {
    pub name: String,
    pub industry: String,
    pub location: String,
    pub contact: ContactInfo,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub operations: Vec<CapabilityEntry>,
}

/// One ranking request: free-text operation plus the tools and materials
/// the caller wants covered. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub operation: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
}

fn validation_err(field: &str, message: impl Into<String>) -> ForgeyardError {
    ForgeyardError::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Loose address-shape check: `local@domain.tld` with a non-edge dot.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

impl NewManufacturer {
    /// Validate this payload against the catalog's write-side rules.
    pub fn validate(&self) -> Result<()> {
        // Bounds are in characters, not bytes, so multibyte names measure
        // the same as ASCII ones.
        let name = self.name.trim();
        if !(3..=100).contains(&name.chars().count()) {
            return Err(validation_err("name", "must be 3-100 characters"));
        }
        if self.industry.trim().is_empty() {
            return Err(validation_err("industry", "must not be empty"));
        }
        let location = self.location.trim();
        if !(2..=100).contains(&location.chars().count()) {
            return Err(validation_err("location", "must be 2-100 characters"));
        }
        if !is_plausible_email(self.contact.email.trim()) {
            return Err(validation_err("contact.email", "not a valid address"));
        }
        if self.contact.phone.trim().is_empty() {
            return Err(validation_err("contact.phone", "must not be empty"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(validation_err("rating", "must be between 0 and 5"));
        }
        for (i, entry) in self.operations.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(validation_err(
                    &format!("operations[{i}].name"),
                    "must not be empty",
                ));
            }
            if entry.materials.is_empty() {
                return Err(validation_err(
                    &format!("operations[{i}].materials"),
                    "there must be at least one material",
                ));
            }
            if entry.tools.is_empty() {
                return Err(validation_err(
                    &format!("operations[{i}].tools"),
                    "there must be at least one tool",
                ));
            }
        }
        Ok(())
    }
}
