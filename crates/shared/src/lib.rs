//! # Waybill Shared
//!
//! Common types used across all Waybill crates: the error taxonomy,
//! identifier validation and the configuration file format.

pub mod config;
pub mod error;
pub mod validation;

// Re-exports
pub use config::*;
pub use error::*;
pub use validation::*;
