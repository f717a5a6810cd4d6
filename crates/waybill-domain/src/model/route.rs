//! Route - A directed link between two logistic centers
//!
//! A Route is an Entity with a one-way lifecycle: active → inactive.
//! `complete_route` is the only way out of active, and there is no way back.
//!
//! Assigning a shipment is dual bookkeeping: the route records the code,
//! the shipment is tagged with the route, and the origin center holds it
//! until dispatch. `add_shipment` is the one place that does all three.

use std::collections::BTreeSet;

use shared::{LogisticsError, Result};

use super::ids::{CenterId, RouteId, TrackingCode};
use super::logistic_center::LogisticCenter;
use super::shipment::Shipment;
use super::status::ShipmentStatus;

/// Route - Origin, destination and the shipments travelling between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique identifier (Entity identity)
    id: RouteId,
    origin: CenterId,
    destination: CenterId,
    /// Shipments assigned to or travelling this route
    shipments: BTreeSet<TrackingCode>,
    /// False once the route has been completed
    active: bool,
}

impl Route {
    /// Create a new active route between two distinct centers
    ///
    /// The centers named inside the route id must be `origin` and
    /// `destination`, in that order.
    pub fn new(id: RouteId, origin: &LogisticCenter, destination: &LogisticCenter) -> Result<Self> {
        if origin.id() == destination.id() {
            return Err(LogisticsError::invalid_argument(format!(
                "origin and destination cannot be the same center ({})",
                origin.id()
            )));
        }
        if id.origin_code() != origin.id().as_str()
            || id.destination_code() != destination.id().as_str()
        {
            return Err(LogisticsError::invalid_argument(format!(
                "route id {} does not match centers {} -> {}",
                id,
                origin.id(),
                destination.id()
            )));
        }

        Ok(Self {
            id,
            origin: origin.id().clone(),
            destination: destination.id().clone(),
            shipments: BTreeSet::new(),
            active: true,
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn origin(&self) -> &CenterId {
        &self.origin
    }

    pub fn destination(&self) -> &CenterId {
        &self.destination
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tracking codes on this route, sorted. The caller owns the copy.
    pub fn list_shipments(&self) -> Vec<TrackingCode> {
        self.shipments.iter().cloned().collect()
    }

    pub fn has_shipment(&self, tracking_code: &str) -> bool {
        self.shipments.iter().any(|c| c.as_str() == tracking_code)
    }

    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }

    /// Shipments on this route still waiting in the origin center
    pub fn pending_dispatch(&self, origin: &LogisticCenter) -> Vec<TrackingCode> {
        self.shipments
            .iter()
            .filter(|code| origin.has_shipment(code.as_str()))
            .cloned()
            .collect()
    }

    // ========== Assignment ==========

    /// Assign a shipment and stage it in the origin center
    pub fn add_shipment(&mut self, shipment: &mut Shipment, origin: &mut LogisticCenter) -> Result<()> {
        self.ensure_active()?;
        if origin.id() != &self.origin {
            return Err(LogisticsError::invalid_argument(format!(
                "center {} is not the origin of route {}",
                origin.id(),
                self.id
            )));
        }
        if shipment.status() != ShipmentStatus::Registered {
            return Err(LogisticsError::invalid_state(format!(
                "shipment {} is {} and can no longer be assigned to a route",
                shipment.tracking_code(),
                shipment.status()
            )));
        }
        if let Some(current) = shipment.assigned_route() {
            return Err(LogisticsError::conflict(format!(
                "shipment {} is already assigned to route {}",
                shipment.tracking_code(),
                current
            )));
        }

        shipment.assign_route(&self.id)?;
        self.shipments.insert(shipment.tracking_code().clone());
        if !origin.has_shipment(shipment.tracking_code().as_str()) {
            origin.receive_shipment(shipment)?;
        }
        Ok(())
    }

    /// Take a shipment off the route
    ///
    /// The shipment stays physically in the origin center.
    pub fn remove_shipment(&mut self, shipment: &mut Shipment) -> Result<()> {
        if !self.shipments.contains(shipment.tracking_code()) {
            return Err(LogisticsError::not_found(
                "shipment on route",
                format!("{}@{}", shipment.tracking_code(), self.id),
            ));
        }
        if shipment.status() != ShipmentStatus::Registered {
            return Err(LogisticsError::invalid_state(format!(
                "shipment {} has already left the origin of route {}",
                shipment.tracking_code(),
                self.id
            )));
        }
        if shipment.assigned_route() != Some(&self.id) {
            return Err(LogisticsError::invalid_state(format!(
                "shipment {} is not tagged with route {}",
                shipment.tracking_code(),
                self.id
            )));
        }

        shipment.remove_route()?;
        self.shipments.remove(shipment.tracking_code());
        Ok(())
    }

    // ========== Completion ==========

    /// Deliver every shipment to the destination and deactivate the route
    ///
    /// `shipments` must contain every shipment on the route (extra entries
    /// are ignored). All of them must be IN_TRANSIT: a route is not completed
    /// while something is still waiting at the origin. Every check runs
    /// before the first mutation, so a failure leaves all state unchanged.
    pub fn complete_route(
        &mut self,
        destination: &mut LogisticCenter,
        shipments: &mut [Shipment],
    ) -> Result<Vec<TrackingCode>> {
        self.ensure_active()?;
        if destination.id() != &self.destination {
            return Err(LogisticsError::invalid_argument(format!(
                "center {} is not the destination of route {}",
                destination.id(),
                self.id
            )));
        }

        let mut delivering = Vec::with_capacity(self.shipments.len());
        for code in &self.shipments {
            let index = shipments
                .iter()
                .position(|s| s.tracking_code() == code)
                .ok_or_else(|| LogisticsError::not_found("shipment", code.as_str()))?;
            let shipment = &shipments[index];

            if shipment.status() != ShipmentStatus::InTransit {
                return Err(LogisticsError::invalid_state(format!(
                    "shipment {} on route {} is {}, not IN_TRANSIT; dispatch it first",
                    code,
                    self.id,
                    shipment.status()
                )));
            }
            if shipment.assigned_route() != Some(&self.id) {
                return Err(LogisticsError::invalid_state(format!(
                    "shipment {} is not tagged with route {}",
                    code, self.id
                )));
            }
            if destination.has_shipment(code.as_str()) {
                return Err(LogisticsError::conflict(format!(
                    "shipment {} is already in center {}",
                    code,
                    destination.id()
                )));
            }
            delivering.push(index);
        }

        for index in delivering {
            let shipment = &mut shipments[index];
            shipment.transition_to(ShipmentStatus::Delivered)?;
            shipment.remove_route()?;
            destination.receive_shipment(shipment)?;
        }

        let delivered = self.list_shipments();
        self.shipments.clear();
        self.active = false;
        Ok(delivered)
    }

    fn ensure_active(&self) -> Result<()> {
        if !self.active {
            return Err(LogisticsError::invalid_state(format!(
                "route {} is not active",
                self.id
            )));
        }
        Ok(())
    }
}
