//! Computed plan snapshots
//!
//! Neither type is persisted; both are rebuilt on every request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PlanType;

/// Month-to-date consumption of plan-covered services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanUsage {
    /// All counted plan bookings in the month
    pub total: u32,
    pub cuts: u32,
    pub beards: u32,
    pub eyebrows: u32,
    /// Localized month label, e.g. "outubro de 2026"
    pub month_name: String,
}

/// A fixed plan suggested in place of a custom selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecommendation {
    pub plan_id: PlanType,
    pub plan_name: String,
    pub plan_price: Decimal,
    /// `plan_price - custom_price`; negative means the plan is cheaper
    pub difference: Decimal,
    /// Human-readable benefits, savings message first when present
    pub extra_benefits: Vec<String>,
}

impl PlanRecommendation {
    /// Check if the recommended plan costs less than the custom plan
    pub fn saves_money(&self) -> bool {
        self.difference < Decimal::ZERO
    }
}
