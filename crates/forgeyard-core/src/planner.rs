//! Production planning generators backed by the chat service.
//!
//! Replies must satisfy the typed schemas in this module. Anything else
//! fails with [`ForgeyardError::GenerationFailed`] instead of passing
//! malformed JSON through to callers.

use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ForgeyardError, Result};
use crate::llm::{extract_json, prompts, ChatBackend};

/// One step in a process sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedOperation {
    pub operation: String,
    pub description: String,
    pub materials: Vec<String>,
    pub tools: Vec<String>,
    pub time_required: String,
    pub sequence: u32,
}

/// Ordered manufacturing steps for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessSheet {
    pub product: String,
    pub operations: Vec<PlannedOperation>,
}

/// One product variant: fixed name and materials plus free-form attributes
/// like size or voltage rating, which vary by product type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub materials: Vec<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

/// Variant list for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSheet {
    pub product: String,
    pub variants: Vec<Variant>,
}

/// A single inspection step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionStep {
    pub description: String,
    pub parameters: Vec<String>,
    pub tools: Vec<String>,
}

/// The three fixed stages of an inspection plan. Each stage maps step keys
/// ("step_1", "step_2", ...) to steps, kept in the order the reply listed
/// them so numeric keys past "step_9" do not re-sort lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionStages {
    pub initial_inspection: IndexMap<String, InspectionStep>,
    pub mid_inspection: IndexMap<String, InspectionStep>,
    pub final_inspection: IndexMap<String, InspectionStep>,
}

/// Quality inspection plan for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionPlan {
    pub product: String,
    pub inspection_plan: InspectionStages,
}

/// Generates process sheets, variant lists, and inspection plans.
pub struct ProductPlanner {
    backend: Arc<dyn ChatBackend>,
}

impl ProductPlanner {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Ordered manufacturing steps for `product`.
    pub async fn process_sheet(&self, product: &str) -> Result<ProcessSheet> {
        let user = prompts::process_sheet_request(product);
        self.generate("process sheet", prompts::PROCESS_SHEET_INSTRUCTIONS, &user)
            .await
    }

    /// Product variants, optionally steered by extra specifications.
    pub async fn variants(&self, product: &str, specs: Option<&str>) -> Result<VariantSheet> {
        let user = prompts::variants_request(product, specs);
        self.generate("variants", prompts::VARIANTS_INSTRUCTIONS, &user)
            .await
    }

    /// Three-stage quality inspection plan for `product`.
    pub async fn inspection_plan(&self, product: &str) -> Result<InspectionPlan> {
        self.generate("inspection plan", prompts::INSPECTION_INSTRUCTIONS, product)
            .await
    }

    async fn generate<T>(&self, what: &str, system: &str, user: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let reply = self
            .backend
            .complete(system, user)
            .await
            .map_err(|e| generation_failed(what, format!("chat backend failed: {e}")))?;
        let json = extract_json(&reply)
            .ok_or_else(|| generation_failed(what, "reply contains no JSON object".to_string()))?;
        serde_json::from_str(json)
            .map_err(|e| generation_failed(what, format!("reply failed to parse: {e}")))
    }
}

fn generation_failed(what: &str, reason: String) -> ForgeyardError {
    ForgeyardError::GenerationFailed {
        what: what.to_string(),
        reason,
    }
}
