//! Unified error handling for Barbearia
//!
//! The plan computations themselves are total; errors only arise at the
//! edges: reading data through the repository traits, validating customer
//! input, plan lifecycle transitions, and configuration.

use thiserror::Error;

use crate::models::PlanStatus;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Datastore Errors ====================
    #[error("Datastore error: {0}")]
    Datastore(String),

    // ==================== Plan Lifecycle Errors ====================
    #[error("Invalid plan transition from {from} to {to}")]
    InvalidPlanTransition { from: PlanStatus, to: PlanStatus },

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    // ==================== Configuration Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Datastore(_) => "datastore_error",
            AppError::InvalidPlanTransition { .. } => "invalid_plan_transition",
            AppError::Validation(_) => "validation_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }

    /// Whether the error was caused by the caller's input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::InvalidPlanTransition { .. }
        )
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
