//! Configuration types for Waybill
//!
//! The demo binary seeds its repositories from a JSON document:
//!
//! ```json
//! {
//!   "logLevel": "debug",
//!   "centers": [{ "id": "MAD01", "name": "Madrid", "location": "Calle A" }],
//!   "routes": [{ "id": "MAD01-BCN02-STD-001", "origin": "MAD01", "destination": "BCN02" }],
//!   "shipments": [{ "trackingCode": "ABC123", "sender": "A", "recipient": "B", "kind": "standard" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A logistic center to register at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterSeed {
    pub id: String,
    pub name: String,
    pub location: String,
}

/// A route to create at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSeed {
    pub id: String,
    pub origin: String,
    pub destination: String,
}

/// A shipment to register at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSeed {
    pub tracking_code: String,
    pub sender: String,
    pub recipient: String,

    /// Omitted for express shipments
    #[serde(default)]
    pub priority: Option<u8>,

    /// `standard`, `fragile` or `express`
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Route to stage the shipment on once registered
    #[serde(default)]
    pub route: Option<String>,
}

fn default_kind() -> String {
    "standard".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaybillConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub centers: Vec<CenterSeed>,

    #[serde(default)]
    pub routes: Vec<RouteSeed>,

    #[serde(default)]
    pub shipments: Vec<ShipmentSeed>,
}

impl Default for WaybillConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            centers: Vec::new(),
            routes: Vec::new(),
            shipments: Vec::new(),
        }
    }
}

impl WaybillConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }
}
