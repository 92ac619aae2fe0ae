//! Barbearia Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the Barbearia plan system. It includes:
//!
//! - Domain models (plans, entitlements, custom selections, appointments)
//! - The fixed plan catalog and the custom plan pricing table
//! - Repository traits describing the external datastore
//! - Unified error handling
//! - Application configuration and tracing setup

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod traits;

pub use config::{AppConfig, SharedConfig};
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
