//! Dashboard Configuration Module
//!
//! Server address, model artifact locations, slider ranges and report
//! settings, loaded from a TOML file.
//!
//! ## Loading Order
//!
//! 1. `AQI_CONFIG` environment variable (path to TOML file)
//! 2. `aqi_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded config is passed explicitly (`Arc<DashboardConfig>` in the
//! HTTP state); there is no process-wide global.

mod dashboard_config;
pub mod defaults;
pub mod validation;

pub use dashboard_config::*;
