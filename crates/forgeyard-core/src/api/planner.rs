//! Production planning methods on ForgeyardApi.

use crate::error::Result;
use crate::planner::{InspectionPlan, ProcessSheet, VariantSheet};
use crate::ForgeyardApi;

impl ForgeyardApi {
    // ========================================
    // Planning Methods
    // ========================================

    /// Ordered manufacturing steps for a product.
    pub async fn process_sheet(&self, product: &str) -> Result<ProcessSheet> {
        self.planner.process_sheet(product).await
    }

    /// Product variants, optionally steered by extra specifications.
    pub async fn product_variants(
        &self,
        product: &str,
        specs: Option<&str>,
    ) -> Result<VariantSheet> {
        self.planner.variants(product, specs).await
    }

    /// Three-stage quality inspection plan for a product.
    pub async fn inspection_plan(&self, product: &str) -> Result<InspectionPlan> {
        self.planner.inspection_plan(product).await
    }
}
