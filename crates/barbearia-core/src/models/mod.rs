//! Domain models for Barbearia
//!
//! This module contains all the core domain models used by the plan services.

pub mod appointment;
pub mod includes;
pub mod plan;
pub mod usage;

pub use appointment::{Appointment, AppointmentStatus};
pub use includes::{CustomPlanSelection, DayCode, PlanIncludes, Priority};
pub use plan::{Plan, PlanStatus, PlanType};
pub use usage::{PlanRecommendation, PlanUsage};
