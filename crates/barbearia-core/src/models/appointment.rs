//! Appointment model
//!
//! Only the fields the plan core reads. Appointments are owned by the
//! external datastore.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Canceled,
    Completed,
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Canceled => write!(f, "canceled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}

impl AppointmentStatus {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "canceled" => Some(AppointmentStatus::Canceled),
            "completed" => Some(AppointmentStatus::Completed),
            "no_show" => Some(AppointmentStatus::NoShow),
            _ => None,
        }
    }
}

/// Appointment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,

    pub user_id: Uuid,

    /// Scheduled start
    pub starts_at: DateTime<Utc>,

    /// Display name of the service (e.g. "Social", "Barba")
    pub service_name: String,

    /// Service identifier (e.g. "degrade", "sobrancelha")
    pub service_id: String,

    pub status: AppointmentStatus,

    /// Booked against a plan instead of paid per service
    #[serde(default)]
    pub is_plan_booking: bool,
}

impl Appointment {
    /// Check if this appointment consumes plan entitlement
    ///
    /// Everything except canceled plan bookings counts, including no-shows.
    #[inline]
    pub fn counts_against_plan(&self) -> bool {
        self.is_plan_booking && self.status != AppointmentStatus::Canceled
    }
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            starts_at: Utc::now(),
            service_name: String::new(),
            service_id: String::new(),
            status: AppointmentStatus::Pending,
            is_plan_booking: false,
        }
    }
}
