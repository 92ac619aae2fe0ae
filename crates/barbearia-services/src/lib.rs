//! Plan services for Barbearia
//!
//! This crate holds the plan business rules: pricing a custom plan,
//! matching it against the fixed tiers, recommending a tier, and counting
//! month-to-date plan usage.
//!
//! # Architecture
//!
//! The computations are plain synchronous functions over in-memory data:
//! - `pricing` - custom plan price from the additive table
//! - `matcher` - one predicate per requirement clause
//! - `benefits` - what a fixed tier grants beyond a selection
//! - `recommendation` - which fixed tier, if any, to suggest
//! - `usage` - month-to-date consumption counters
//!
//! Two services wrap them for callers:
//! - `PlanAdvisor` - validates a selection and produces a quote
//! - `PlanStatusService` - fetches plan and appointments, computes usage

pub mod advisor;
pub mod benefits;
pub mod matcher;
pub mod plan_status;
pub mod pricing;
pub mod recommendation;
pub mod usage;

pub use advisor::{PlanAdvisor, PlanQuote};
pub use benefits::get_extra_benefits;
pub use matcher::plan_meets_requirements;
pub use plan_status::{PlanOverview, PlanStatusService};
pub use pricing::calculate_custom_plan_price;
pub use recommendation::get_recommendation;
pub use usage::{calculate_plan_usage, MonthWindow};

/// Business logic constants
pub mod constants {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Largest premium over the custom price worth recommending (R$)
    pub const MAX_UPSELL: Decimal = dec!(40);

    /// Shown when a recommended tier costs the same and adds nothing
    pub const SAME_PRICE_MESSAGE: &str = "Mesmo preço, mais praticidade!";

    /// Service keywords (lowercase) counted as haircuts
    pub const CUT_KEYWORDS: [&str; 5] = ["social", "degradê", "degrade", "contornado", "infantil"];

    /// Service name/id counted as a beard trim
    pub const BEARD_SERVICE: &str = "barba";

    /// Service name/id counted as an eyebrow service
    pub const EYEBROW_SERVICE: &str = "sobrancelha";
}
