//! Recommendation engine
//!
//! Suggests a fixed tier in place of a custom plan. Compatible tiers are
//! tried cheapest first (stable on catalog order); the first one that is
//! no more expensive, or at most `MAX_UPSELL` more expensive while adding
//! something, wins.

use barbearia_core::catalog::FixedPlan;
use barbearia_core::models::{CustomPlanSelection, PlanRecommendation};
use rust_decimal::Decimal;
use tracing::debug;

use crate::benefits::get_extra_benefits;
use crate::constants::{MAX_UPSELL, SAME_PRICE_MESSAGE};
use crate::matcher::plan_meets_requirements;

/// Recommend a catalog tier for a priced selection
pub fn get_recommendation(
    custom_price: Decimal,
    selection: &CustomPlanSelection,
) -> Option<PlanRecommendation> {
    recommend_from(&FixedPlan::catalog(), custom_price, selection)
}

/// Recommend a tier from an explicit catalog
pub fn recommend_from(
    catalog: &[FixedPlan],
    custom_price: Decimal,
    selection: &CustomPlanSelection,
) -> Option<PlanRecommendation> {
    let mut compatible: Vec<&FixedPlan> = catalog
        .iter()
        .filter(|plan| plan_meets_requirements(plan, selection))
        .collect();

    if compatible.is_empty() {
        debug!("No compatible fixed plan, custom plan required");
        return None;
    }

    // sort_by is stable, so equal prices keep catalog order
    compatible.sort_by(|a, b| a.price.cmp(&b.price));

    for plan in compatible {
        let difference = plan.price - custom_price;
        let mut extra_benefits = get_extra_benefits(plan, selection);

        if difference <= Decimal::ZERO {
            if difference < Decimal::ZERO {
                extra_benefits.insert(0, savings_message(difference));
            } else if extra_benefits.is_empty() {
                extra_benefits.push(SAME_PRICE_MESSAGE.to_string());
            }
            return Some(recommendation(plan, difference, extra_benefits));
        }

        if difference <= MAX_UPSELL && !extra_benefits.is_empty() {
            return Some(recommendation(plan, difference, extra_benefits));
        }

        debug!(
            "Skipping {}: {} more for {} extra benefits",
            plan.id,
            difference,
            extra_benefits.len()
        );
    }

    None
}

fn savings_message(difference: Decimal) -> String {
    format!("Economize R$ {}!", difference.abs().normalize())
}

fn recommendation(
    plan: &FixedPlan,
    difference: Decimal,
    extra_benefits: Vec<String>,
) -> PlanRecommendation {
    PlanRecommendation {
        plan_id: plan.id,
        plan_name: plan.name.clone(),
        plan_price: plan.price,
        difference,
        extra_benefits,
    }
}
