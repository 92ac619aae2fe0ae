//! Plan advisor
//!
//! Validates a customer's custom selection, prices it, and asks the
//! recommendation engine whether a fixed tier is a better deal.

use barbearia_core::{
    catalog::FixedPlan,
    models::{CustomPlanSelection, PlanRecommendation},
    AppResult,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::pricing::calculate_custom_plan_price;
use crate::recommendation::recommend_from;

/// Price of a custom selection and the optional tier suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanQuote {
    pub custom_price: Decimal,
    pub recommendation: Option<PlanRecommendation>,
}

/// Quotes custom plans against the fixed catalog
pub struct PlanAdvisor {
    catalog: Vec<FixedPlan>,
}

impl PlanAdvisor {
    /// Create an advisor over the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(FixedPlan::catalog())
    }

    pub fn with_catalog(catalog: Vec<FixedPlan>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &[FixedPlan] {
        &self.catalog
    }

    /// Validate and quote a custom selection
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the selection is outside the
    /// allowed discount tiers.
    #[instrument(skip(self))]
    pub fn quote(&self, selection: &CustomPlanSelection) -> AppResult<PlanQuote> {
        selection.validate_business_rules().map_err(|e| {
            warn!("Rejected custom plan selection: {}", e);
            e
        })?;

        let custom_price = calculate_custom_plan_price(selection);
        debug!("Custom plan priced at R$ {}", custom_price);

        let recommendation = recommend_from(&self.catalog, custom_price, selection);

        match &recommendation {
            Some(rec) => info!(
                plan = %rec.plan_id,
                difference = %rec.difference,
                "Recommending fixed plan over custom selection"
            ),
            None => debug!("No fixed plan recommended"),
        }

        Ok(PlanQuote {
            custom_price,
            recommendation,
        })
    }
}

impl Default for PlanAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
