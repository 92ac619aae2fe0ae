//! Plan catalog and custom pricing table
//!
//! Both are compile-time data. Changing a price or an entitlement means
//! editing this file.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::{DayCode, PlanIncludes, PlanType, Priority};

/// A pre-priced subscription tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedPlan {
    pub id: PlanType,
    pub name: String,
    pub price: Decimal,
    pub includes: PlanIncludes,
}

impl FixedPlan {
    /// The fixed tiers in declaration order (ascending price)
    pub fn catalog() -> Vec<FixedPlan> {
        vec![
            FixedPlan {
                id: PlanType::ClubCorte,
                name: "Clube Corte".to_string(),
                price: dec!(130),
                includes: PlanIncludes {
                    unlimited_cuts: true,
                    unlimited_beard: false,
                    eyebrow_included: false,
                    allowed_days: days(&[]),
                    priority: Priority::Normal,
                    product_discount: 0,
                    fixed_schedule: false,
                },
            },
            FixedPlan {
                id: PlanType::ClubCombo,
                name: "Clube Combo".to_string(),
                price: dec!(180),
                includes: PlanIncludes {
                    unlimited_cuts: true,
                    unlimited_beard: true,
                    eyebrow_included: false,
                    allowed_days: days(&[DayCode::Sex]),
                    priority: Priority::Medium,
                    product_discount: 5,
                    fixed_schedule: false,
                },
            },
            FixedPlan {
                id: PlanType::ClubVip,
                name: "Clube VIP".to_string(),
                price: dec!(230),
                includes: PlanIncludes {
                    unlimited_cuts: true,
                    unlimited_beard: true,
                    eyebrow_included: true,
                    allowed_days: days(&[DayCode::Sex, DayCode::Sab]),
                    priority: Priority::Max,
                    product_discount: 10,
                    fixed_schedule: true,
                },
            },
        ]
    }

    /// Look up a fixed tier; `Custom` has no catalog entry
    pub fn find(id: PlanType) -> Option<FixedPlan> {
        Self::catalog().into_iter().find(|plan| plan.id == id)
    }
}

fn days(extra: &[DayCode]) -> std::collections::BTreeSet<DayCode> {
    DayCode::BASE_DAYS
        .iter()
        .chain(extra.iter())
        .copied()
        .collect()
}

/// Additive price table for custom plans (R$)
pub mod custom_pricing {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Base plan: seg..qui, 4 cuts per month
    pub const BASE: Decimal = dec!(80);

    pub const UNLIMITED_CUTS: Decimal = dec!(50);
    pub const UNLIMITED_BEARD: Decimal = dec!(40);
    pub const EYEBROW: Decimal = dec!(15);

    pub const ADD_FRIDAY: Decimal = dec!(15);
    pub const ADD_SATURDAY: Decimal = dec!(25);

    pub const PRIORITY_MEDIUM: Decimal = dec!(10);
    pub const PRIORITY_MAX: Decimal = dec!(20);

    pub const FIXED_SCHEDULE: Decimal = dec!(25);

    pub const DISCOUNT_5: Decimal = dec!(10);
    pub const DISCOUNT_10: Decimal = dec!(20);
}
