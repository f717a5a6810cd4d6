//! ShipmentStatus - Where a shipment is in its lifecycle
//!
//! The lifecycle is linear: REGISTERED → IN_TRANSIT → DELIVERED.
//! No skipping, no going back, no transition to self.

/// The current status of a Shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    /// Known to the system, not yet on the road
    Registered,
    /// Released by a center, travelling a route
    InTransit,
    /// Arrived at the destination center
    Delivered,
}

impl ShipmentStatus {
    /// The transition table: the only status reachable from `self`
    pub fn next(&self) -> Option<ShipmentStatus> {
        match self {
            ShipmentStatus::Registered => Some(ShipmentStatus::InTransit),
            ShipmentStatus::InTransit => Some(ShipmentStatus::Delivered),
            ShipmentStatus::Delivered => None,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Registered => "REGISTERED",
            ShipmentStatus::InTransit => "IN_TRANSIT",
            ShipmentStatus::Delivered => "DELIVERED",
        }
    }

    /// Parse a status name, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<ShipmentStatus> {
        match value.trim().to_uppercase().as_str() {
            "REGISTERED" => Some(ShipmentStatus::Registered),
            "IN_TRANSIT" => Some(ShipmentStatus::InTransit),
            "DELIVERED" => Some(ShipmentStatus::Delivered),
            _ => None,
        }
    }
}

impl core::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
