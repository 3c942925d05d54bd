#![forbid(unsafe_code)]

//! Core domain model and business logic for the EliteFit member system.
//!
//! This crate provides:
//! - Domain types (measurements, activities, meals, plans, profile)
//! - BMI computation engine
//! - Membership plan catalog
//! - Persistence (activity log, CSV archive, profile store)
//! - Dashboard and nutrition metrics

pub mod types;
pub mod error;
pub mod bmi;
pub mod plans;
pub mod config;
pub mod logging;
pub mod activity;
pub mod rollup;
pub mod history;
pub mod profile;
pub mod nutrition;
pub mod dashboard;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bmi::compute_bmi;
pub use config::Config;
pub use activity::{ActivitySink, JsonlSink};
pub use history::load_recent_entries;
pub use plans::{build_default_plans, get_default_plans};
pub use nutrition::default_diet_day;
