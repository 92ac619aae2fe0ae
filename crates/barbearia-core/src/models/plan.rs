//! Plan model
//!
//! A plan is a customer's subscription request. It starts `pending`, an
//! admin approves or rejects it, and an approved plan can later be
//! deactivated. Only approved plans count for usage and booking.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{DayCode, PlanIncludes};
use crate::error::AppError;

/// Plan type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanType {
    ClubCorte,
    ClubCombo,
    ClubVip,
    /// Customer-assembled bundle with no fixed price
    Custom,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::ClubCorte => "club-corte",
            PlanType::ClubCombo => "club-combo",
            PlanType::ClubVip => "club-vip",
            PlanType::Custom => "custom",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "club-corte" => Some(PlanType::ClubCorte),
            "club-combo" => Some(PlanType::ClubCombo),
            "club-vip" => Some(PlanType::ClubVip),
            "custom" => Some(PlanType::Custom),
            _ => None,
        }
    }

    /// Check if this type maps to a catalog entry
    pub fn is_fixed(&self) -> bool {
        !matches!(self, PlanType::Custom)
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plan status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Waiting for admin review
    #[default]
    Pending,
    /// Active subscription
    Approved,
    /// Refused by an admin
    Rejected,
    /// Previously approved, no longer active
    Deactivated,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Pending => write!(f, "pending"),
            PlanStatus::Approved => write!(f, "approved"),
            PlanStatus::Rejected => write!(f, "rejected"),
            PlanStatus::Deactivated => write!(f, "deactivated"),
        }
    }
}

impl PlanStatus {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(PlanStatus::Pending),
            "approved" => Some(PlanStatus::Approved),
            "rejected" => Some(PlanStatus::Rejected),
            "deactivated" => Some(PlanStatus::Deactivated),
            _ => None,
        }
    }

    /// Check if a transition to `next` is allowed
    pub fn can_transition_to(&self, next: PlanStatus) -> bool {
        matches!(
            (self, next),
            (PlanStatus::Pending, PlanStatus::Approved)
                | (PlanStatus::Pending, PlanStatus::Rejected)
                | (PlanStatus::Approved, PlanStatus::Deactivated)
        )
    }
}

/// Plan entity
///
/// Persisted by the external datastore; this crate reads it and applies
/// lifecycle transitions in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier
    pub id: Uuid,

    /// Owner of the plan
    pub user_id: Uuid,

    /// Catalog tier or custom
    pub plan_type: PlanType,

    /// Lifecycle status
    pub status: PlanStatus,

    /// Granted entitlements
    pub includes: PlanIncludes,

    /// When the customer asked for the plan
    pub requested_at: DateTime<Utc>,

    /// When an admin approved it
    pub approved_at: Option<DateTime<Utc>>,
}

impl Plan {
    /// Create a new pending plan request
    pub fn request(user_id: Uuid, plan_type: PlanType, includes: PlanIncludes) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            plan_type,
            status: PlanStatus::Pending,
            includes,
            requested_at: Utc::now(),
            approved_at: None,
        }
    }

    /// Check if plan is approved
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Approved
    }

    /// Check if an approved plan can be booked on a weekday
    pub fn allows_day(&self, day: Weekday) -> bool {
        self.is_active() && self.includes.allows_day(DayCode::from(day))
    }

    fn transition(&mut self, next: PlanStatus) -> Result<(), AppError> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::InvalidPlanTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Approve a pending plan
    pub fn approve(&mut self, at: DateTime<Utc>) -> Result<(), AppError> {
        self.transition(PlanStatus::Approved)?;
        self.approved_at = Some(at);
        Ok(())
    }

    /// Reject a pending plan
    pub fn reject(&mut self) -> Result<(), AppError> {
        self.transition(PlanStatus::Rejected)
    }

    /// Deactivate an approved plan
    pub fn deactivate(&mut self) -> Result<(), AppError> {
        self.transition(PlanStatus::Deactivated)
    }
}
