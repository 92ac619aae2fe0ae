//! Repository traits
//!
//! Plans and appointments live in an external hosted datastore. These traits
//! are the typed query functions the services consume.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Appointment, Plan};

/// Plan lookups
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Find the user's most recent plan, whatever its status
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Plan>, AppError>;
}

/// Appointment lookups
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// List every appointment the user has booked
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Appointment>, AppError>;
}
