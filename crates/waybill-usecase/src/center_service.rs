//! CenterService - Registration of centers and shipments entering / leaving them

use shared::{require_non_blank, LogisticsError, Result};
use tracing::{info, warn};
use waybill_domain::{CenterId, CenterRepository, LogisticCenter, Shipment, ShipmentRepository};

use crate::lookup;
use crate::projection::CenterSummary;

/// Registers centers and moves shipments in and out of them
pub struct CenterService<C, S> {
    centers: C,
    shipments: S,
}

impl<C: CenterRepository, S: ShipmentRepository> CenterService<C, S> {
    pub fn new(centers: C, shipments: S) -> Self {
        Self { centers, shipments }
    }

    /// Register a new, empty center
    pub fn register_center(&mut self, id: &str, name: &str, location: &str) -> Result<LogisticCenter> {
        let id = require_non_blank("center id", id)?;
        let name = require_non_blank("center name", name)?;
        let location = require_non_blank("center location", location)?;

        let id = CenterId::parse(&id)?;
        if self.centers.exists(&id)? {
            warn!(center_id = %id, "Rejected duplicate center");
            return Err(LogisticsError::conflict(format!(
                "a center with id {} is already registered",
                id
            )));
        }

        let center = LogisticCenter::new(id, &name, &location)?;
        self.centers.add(center.clone())?;

        info!(center_id = %center.id(), name = center.name(), "Center registered");
        Ok(center)
    }

    pub fn get_center(&self, id: &str) -> Result<LogisticCenter> {
        lookup::center(&self.centers, id, "center")
    }

    /// All centers, sorted by id
    pub fn list_centers(&self) -> Result<Vec<CenterSummary>> {
        let mut centers = self.centers.list_all()?;
        centers.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(centers.iter().map(CenterSummary::from).collect())
    }

    /// Shipments physically present in a center, sorted by tracking code
    pub fn list_shipments_in_center(&self, id: &str) -> Result<Vec<Shipment>> {
        let center = lookup::center(&self.centers, id, "center")?;
        lookup::shipments(&self.shipments, &center.list_shipments())
    }

    /// Take a registered shipment into a center
    ///
    /// A shipment is held by at most one center, so one already sitting
    /// somewhere else is a conflict.
    pub fn receive_shipment(&mut self, tracking_code: &str, center_id: &str) -> Result<LogisticCenter> {
        let mut center = lookup::center(&self.centers, center_id, "center")?;
        let shipment = lookup::shipment(&self.shipments, tracking_code)?;

        if let Some(holder) = self.centers.find_holding(shipment.tracking_code().as_str())? {
            warn!(
                tracking_code = %shipment.tracking_code(),
                center_id = %holder.id(),
                "Shipment already held by a center"
            );
            return Err(LogisticsError::conflict(format!(
                "shipment {} is already in center {}",
                shipment.tracking_code(),
                holder.id()
            )));
        }

        center.receive_shipment(&shipment)?;
        self.centers.add(center.clone())?;

        info!(
            tracking_code = %shipment.tracking_code(),
            center_id = %center.id(),
            "Shipment received"
        );
        Ok(center)
    }

    /// Release a shipment from a center into transit
    pub fn dispatch_shipment(&mut self, tracking_code: &str, center_id: &str) -> Result<Shipment> {
        let mut center = lookup::center(&self.centers, center_id, "center")?;
        let mut shipment = lookup::shipment(&self.shipments, tracking_code)?;

        center.dispatch_shipment(&mut shipment).inspect_err(|e| {
            warn!(center_id = %center.id(), error = %e, "Dispatch rejected");
        })?;
        self.shipments.add(shipment.clone())?;
        self.centers.add(center.clone())?;

        info!(
            tracking_code = %shipment.tracking_code(),
            center_id = %center.id(),
            "Shipment dispatched"
        );
        Ok(shipment)
    }
}
