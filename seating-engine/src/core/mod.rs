//! Core module - configuration
//!
//! - [`Config`] - process configuration from the environment
//! - [`SeatingConfig`] - settings handed to each seating manager

pub mod config;

pub use config::{Config, SeatingConfig};
