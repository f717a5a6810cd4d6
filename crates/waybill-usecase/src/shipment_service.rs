//! ShipmentService - Registration and priority of shipments

use shared::{LogisticsError, Result};
use tracing::{info, warn};
use waybill_domain::{Shipment, ShipmentKind, ShipmentRepository, TrackingCode};

use crate::lookup;
use crate::projection::ShipmentSummary;

/// Registers shipments and adjusts their priority
pub struct ShipmentService<S> {
    shipments: S,
}

impl<S: ShipmentRepository> ShipmentService<S> {
    pub fn new(shipments: S) -> Self {
        Self { shipments }
    }

    /// Register a new shipment of the given kind
    ///
    /// Express shipments reject an explicit `priority` with a usage error;
    /// out-of-bounds priorities are invalid arguments.
    pub fn register_shipment(
        &mut self,
        tracking_code: &str,
        sender: &str,
        recipient: &str,
        priority: Option<u8>,
        kind: ShipmentKind,
    ) -> Result<Shipment> {
        let code = TrackingCode::parse(tracking_code)?;
        if self.shipments.exists(&code)? {
            warn!(tracking_code = %code, "Rejected duplicate shipment");
            return Err(LogisticsError::conflict(format!(
                "a shipment with tracking code {} already exists",
                code
            )));
        }

        let shipment = Shipment::new(kind, code, sender, recipient, priority).inspect_err(|e| {
            warn!(kind = %kind, error = %e, "Rejected shipment registration");
        })?;
        self.shipments.add(shipment.clone())?;

        info!(
            tracking_code = %shipment.tracking_code(),
            kind = %shipment.kind(),
            priority = shipment.priority(),
            "Shipment registered"
        );
        Ok(shipment)
    }

    /// Same as [`register_shipment`](Self::register_shipment) with the kind given by name
    pub fn register_shipment_of_type(
        &mut self,
        tracking_code: &str,
        sender: &str,
        recipient: &str,
        priority: Option<u8>,
        kind: &str,
    ) -> Result<Shipment> {
        let kind = ShipmentKind::parse(kind)?;
        self.register_shipment(tracking_code, sender, recipient, priority, kind)
    }

    pub fn get_shipment(&self, tracking_code: &str) -> Result<Shipment> {
        lookup::shipment(&self.shipments, tracking_code)
    }

    /// All shipments, sorted by tracking code
    pub fn list_shipments(&self) -> Result<Vec<ShipmentSummary>> {
        let mut shipments = self.shipments.list_all()?;
        shipments.sort_by(|a, b| a.tracking_code().cmp(b.tracking_code()));
        Ok(shipments.iter().map(ShipmentSummary::from).collect())
    }

    pub fn increase_shipment_priority(&mut self, tracking_code: &str) -> Result<Shipment> {
        self.change_priority(tracking_code, Shipment::increase_priority)
    }

    pub fn decrease_shipment_priority(&mut self, tracking_code: &str) -> Result<Shipment> {
        self.change_priority(tracking_code, Shipment::decrease_priority)
    }

    fn change_priority(
        &mut self,
        tracking_code: &str,
        change: fn(&mut Shipment) -> Result<()>,
    ) -> Result<Shipment> {
        let mut shipment = lookup::shipment(&self.shipments, tracking_code)?;
        change(&mut shipment).inspect_err(|e| {
            warn!(tracking_code = %shipment.tracking_code(), error = %e, "Priority unchanged");
        })?;
        self.shipments.add(shipment.clone())?;

        info!(
            tracking_code = %shipment.tracking_code(),
            priority = shipment.priority(),
            "Shipment priority changed"
        );
        Ok(shipment)
    }
}
