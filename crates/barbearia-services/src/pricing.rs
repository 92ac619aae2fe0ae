//! Custom plan pricing
//!
//! The price is the base plus one surcharge per selected option, read
//! straight from the pricing table. No multipliers, no proration.

use barbearia_core::catalog::custom_pricing as table;
use barbearia_core::models::{CustomPlanSelection, Priority};
use rust_decimal::Decimal;

/// Price a custom plan selection
pub fn calculate_custom_plan_price(selection: &CustomPlanSelection) -> Decimal {
    let flags = [
        (selection.unlimited_cuts, table::UNLIMITED_CUTS),
        (selection.unlimited_beard, table::UNLIMITED_BEARD),
        (selection.eyebrow_included, table::EYEBROW),
        (selection.add_friday, table::ADD_FRIDAY),
        (selection.add_saturday, table::ADD_SATURDAY),
        (selection.fixed_schedule, table::FIXED_SCHEDULE),
    ];

    let options: Decimal = flags
        .iter()
        .filter(|(selected, _)| *selected)
        .map(|(_, surcharge)| *surcharge)
        .sum();

    table::BASE
        + options
        + priority_surcharge(selection.priority)
        + discount_surcharge(selection.product_discount)
}

fn priority_surcharge(priority: Priority) -> Decimal {
    match priority {
        Priority::Normal => Decimal::ZERO,
        Priority::Medium => table::PRIORITY_MEDIUM,
        Priority::Max => table::PRIORITY_MAX,
    }
}

// Off-tier percentages fall back to the highest tier not above them.
fn discount_surcharge(discount: u8) -> Decimal {
    match discount {
        0..=4 => Decimal::ZERO,
        5..=9 => table::DISCOUNT_5,
        _ => table::DISCOUNT_10,
    }
}
