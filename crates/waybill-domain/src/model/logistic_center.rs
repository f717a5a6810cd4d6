//! LogisticCenter - A physical location holding shipments
//!
//! The center records which shipments are physically present by tracking
//! code. Dispatching is the only way a shipment leaves REGISTERED.

use std::collections::BTreeSet;

use shared::{LogisticsError, Result};

use super::ids::{CenterId, TrackingCode};
use super::shipment::Shipment;
use super::status::ShipmentStatus;

/// LogisticCenter - A warehouse, hub or depot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogisticCenter {
    /// Unique identifier (Entity identity)
    id: CenterId,
    name: String,
    location: String,
    /// Shipments physically present
    shipments: BTreeSet<TrackingCode>,
}

impl LogisticCenter {
    /// Create a new empty center
    pub fn new(id: CenterId, name: &str, location: &str) -> Result<Self> {
        Ok(Self {
            id,
            name: shared::require_non_blank("center name", name)?,
            location: shared::require_non_blank("center location", location)?,
            shipments: BTreeSet::new(),
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &CenterId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Tracking codes present, sorted. The caller owns the copy.
    pub fn list_shipments(&self) -> Vec<TrackingCode> {
        self.shipments.iter().cloned().collect()
    }

    pub fn has_shipment(&self, tracking_code: &str) -> bool {
        self.shipments.iter().any(|c| c.as_str() == tracking_code)
    }

    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }

    // ========== Movements ==========

    /// Take a shipment into the center
    pub fn receive_shipment(&mut self, shipment: &Shipment) -> Result<()> {
        if self.shipments.contains(shipment.tracking_code()) {
            return Err(LogisticsError::conflict(format!(
                "shipment {} is already in center {}",
                shipment.tracking_code(),
                self.id
            )));
        }
        if shipment.status() == ShipmentStatus::InTransit {
            return Err(LogisticsError::invalid_state(format!(
                "shipment {} is in transit and cannot be received by center {}",
                shipment.tracking_code(),
                self.id
            )));
        }
        self.shipments.insert(shipment.tracking_code().clone());
        Ok(())
    }

    /// Release a shipment into transit
    ///
    /// Removes it from the center and moves its status to IN_TRANSIT.
    /// Both preconditions are checked before anything changes.
    pub fn dispatch_shipment(&mut self, shipment: &mut Shipment) -> Result<TrackingCode> {
        if !self.shipments.contains(shipment.tracking_code()) {
            return Err(LogisticsError::not_found(
                "shipment in center",
                format!("{}@{}", shipment.tracking_code(), self.id),
            ));
        }
        shipment.can_change_to(ShipmentStatus::InTransit.as_str())?;

        self.shipments.remove(shipment.tracking_code());
        shipment.transition_to(ShipmentStatus::InTransit)?;
        Ok(shipment.tracking_code().clone())
    }
}
