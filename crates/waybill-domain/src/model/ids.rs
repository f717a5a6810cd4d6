//! Identifiers - Value Objects naming shipments, centers and routes
//!
//! Each id can only be built through `parse`, which runs the shared
//! validators. Holding an id therefore means holding a well-formed one.

use shared::{route_endpoints, validate_center_id, validate_route_id, validate_tracking_code};

/// Unique identifier for a Shipment (e.g. `ABC123`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackingCode(String);

impl TrackingCode {
    pub fn parse(value: &str) -> shared::Result<Self> {
        validate_tracking_code(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a LogisticCenter (e.g. `MAD01`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CenterId(String);

impl CenterId {
    pub fn parse(value: &str) -> shared::Result<Self> {
        validate_center_id(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CenterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a Route (e.g. `MAD01-BCN02-STD-001`)
///
/// The first two segments name the origin and destination centers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(String);

impl RouteId {
    pub fn parse(value: &str) -> shared::Result<Self> {
        validate_route_id(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Center code embedded as the first segment
    pub fn origin_code(&self) -> &str {
        route_endpoints(&self.0).map(|(origin, _)| origin).unwrap_or_default()
    }

    /// Center code embedded as the second segment
    pub fn destination_code(&self) -> &str {
        route_endpoints(&self.0)
            .map(|(_, destination)| destination)
            .unwrap_or_default()
    }
}

impl core::fmt::Display for RouteId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
