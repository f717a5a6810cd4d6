//! Read-only projections returned by the listing operations
//!
//! Plain data, detached from the entities they were built from.

use serde::Serialize;
use waybill_domain::{LogisticCenter, Route, Shipment};

/// One row of the shipment listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSummary {
    pub tracking_code: String,
    pub status: String,
    pub priority: u8,
    pub kind: String,
    pub assigned_route: Option<String>,
}

impl From<&Shipment> for ShipmentSummary {
    fn from(shipment: &Shipment) -> Self {
        Self {
            tracking_code: shipment.tracking_code().to_string(),
            status: shipment.status().to_string(),
            priority: shipment.priority(),
            kind: shipment.kind().to_string(),
            assigned_route: shipment.assigned_route().map(|r| r.to_string()),
        }
    }
}

/// One row of the center listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    pub shipment_count: usize,
}

impl From<&LogisticCenter> for CenterSummary {
    fn from(center: &LogisticCenter) -> Self {
        Self {
            id: center.id().to_string(),
            name: center.name().to_string(),
            location: center.location().to_string(),
            shipment_count: center.shipment_count(),
        }
    }
}

/// One row of the route listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub active: bool,
    pub shipment_count: usize,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            id: route.id().to_string(),
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            active: route.is_active(),
            shipment_count: route.shipment_count(),
        }
    }
}
