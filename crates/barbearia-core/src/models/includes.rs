//! Entitlement models
//!
//! `PlanIncludes` is the bundle of benefits a plan grants; a
//! `CustomPlanSelection` is what a customer asks for when assembling a
//! custom plan.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

use crate::error::AppError;

/// Day of the week as used by the shop (pt-BR abbreviations)
///
/// Variants are declared in week order, so sets of days iterate seg..dom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCode {
    Seg,
    Ter,
    Qua,
    Qui,
    Sex,
    Sab,
    Dom,
}

impl DayCode {
    /// Days covered by every plan: Monday through Thursday
    pub const BASE_DAYS: [DayCode; 4] = [DayCode::Seg, DayCode::Ter, DayCode::Qua, DayCode::Qui];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Seg => "seg",
            DayCode::Ter => "ter",
            DayCode::Qua => "qua",
            DayCode::Qui => "qui",
            DayCode::Sex => "sex",
            DayCode::Sab => "sab",
            DayCode::Dom => "dom",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seg" => Some(DayCode::Seg),
            "ter" => Some(DayCode::Ter),
            "qua" => Some(DayCode::Qua),
            "qui" => Some(DayCode::Qui),
            "sex" => Some(DayCode::Sex),
            "sab" => Some(DayCode::Sab),
            "dom" => Some(DayCode::Dom),
            _ => None,
        }
    }
}

impl From<Weekday> for DayCode {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayCode::Seg,
            Weekday::Tue => DayCode::Ter,
            Weekday::Wed => DayCode::Qua,
            Weekday::Thu => DayCode::Qui,
            Weekday::Fri => DayCode::Sex,
            Weekday::Sat => DayCode::Sab,
            Weekday::Sun => DayCode::Dom,
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Service priority tier
///
/// Totally ordered: `Normal < Medium < Max`. Requirement checks compare with
/// this order, so a plan with `Max` satisfies a request for `Medium`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Medium,
    Max,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Normal => write!(f, "normal"),
            Priority::Medium => write!(f, "medium"),
            Priority::Max => write!(f, "max"),
        }
    }
}

impl Priority {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Priority::Normal),
            "medium" => Some(Priority::Medium),
            "max" => Some(Priority::Max),
            _ => None,
        }
    }
}

/// Entitlement bundle attached to a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanIncludes {
    /// Unlimited haircuts within allowed days
    pub unlimited_cuts: bool,

    /// Unlimited beard trims
    pub unlimited_beard: bool,

    /// Eyebrow service included
    pub eyebrow_included: bool,

    /// Days of the week the plan can be used
    pub allowed_days: BTreeSet<DayCode>,

    /// Scheduling priority
    pub priority: Priority,

    /// Discount on shop products, in percent
    pub product_discount: u8,

    /// Customer keeps a fixed weekly slot
    pub fixed_schedule: bool,
}

impl PlanIncludes {
    /// Entitlements carried by a custom plan built from `selection`
    pub fn for_selection(selection: &CustomPlanSelection) -> Self {
        let mut allowed_days: BTreeSet<DayCode> = DayCode::BASE_DAYS.into_iter().collect();
        if selection.add_friday {
            allowed_days.insert(DayCode::Sex);
        }
        if selection.add_saturday {
            allowed_days.insert(DayCode::Sab);
        }

        Self {
            unlimited_cuts: selection.unlimited_cuts,
            unlimited_beard: selection.unlimited_beard,
            eyebrow_included: selection.eyebrow_included,
            allowed_days,
            priority: selection.priority,
            product_discount: selection.product_discount,
            fixed_schedule: selection.fixed_schedule,
        }
    }

    /// Check if the plan can be used on a given day
    #[inline]
    pub fn allows_day(&self, day: DayCode) -> bool {
        self.allowed_days.contains(&day)
    }
}

impl Default for PlanIncludes {
    fn default() -> Self {
        Self {
            unlimited_cuts: false,
            unlimited_beard: false,
            eyebrow_included: false,
            allowed_days: DayCode::BASE_DAYS.into_iter().collect(),
            priority: Priority::Normal,
            product_discount: 0,
            fixed_schedule: false,
        }
    }
}

/// A customer's desired custom plan
///
/// The base plan always covers seg..qui; Friday and Saturday are add-ons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomPlanSelection {
    #[serde(default)]
    pub unlimited_cuts: bool,

    #[serde(default)]
    pub unlimited_beard: bool,

    #[serde(default)]
    pub eyebrow_included: bool,

    #[serde(default)]
    pub add_friday: bool,

    #[serde(default)]
    pub add_saturday: bool,

    #[serde(default)]
    pub priority: Priority,

    /// Product discount percentage: 0, 5 or 10
    #[serde(default)]
    #[validate(range(max = 10, message = "Product discount cannot exceed 10%"))]
    pub product_discount: u8,

    #[serde(default)]
    pub fixed_schedule: bool,
}

impl CustomPlanSelection {
    /// Discount percentages a customer may pick
    pub const DISCOUNT_TIERS: [u8; 3] = [0, 5, 10];

    /// Validate field ranges and the closed discount tiers
    pub fn validate_business_rules(&self) -> Result<(), AppError> {
        self.validate()?;

        if !Self::DISCOUNT_TIERS.contains(&self.product_discount) {
            return Err(AppError::Validation(format!(
                "Product discount must be 0, 5 or 10 (got {})",
                self.product_discount
            )));
        }

        Ok(())
    }
}
