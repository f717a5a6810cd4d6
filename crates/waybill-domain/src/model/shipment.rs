//! Shipment - A trackable parcel
//!
//! A Shipment is an Entity: its tracking code never changes, while status,
//! priority and route assignment evolve. Membership in a center or on a
//! route is recorded by the center / route, not here; the shipment only
//! carries the tag of the route it is assigned to.

use shared::{LogisticsError, Result};

use super::ids::{RouteId, TrackingCode};
use super::kind::ShipmentKind;
use super::status::ShipmentStatus;

/// Shipment - The parcel moving through the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    /// Unique identifier (Entity identity)
    tracking_code: TrackingCode,
    sender: String,
    recipient: String,
    /// Variant, which decides how priority may move
    kind: ShipmentKind,
    /// 1 (normal) to 3 (high)
    priority: u8,
    /// Current status
    status: ShipmentStatus,
    /// Every status held so far, oldest first
    status_history: Vec<ShipmentStatus>,
    /// Route this shipment is assigned to, if any
    assigned_route: Option<RouteId>,
}

impl Shipment {
    /// Create a new Shipment of the given kind
    ///
    /// `priority` is optional: when omitted the kind's default is used.
    /// Express shipments reject any explicit priority with a usage error.
    pub fn new(
        kind: ShipmentKind,
        tracking_code: TrackingCode,
        sender: &str,
        recipient: &str,
        priority: Option<u8>,
    ) -> Result<Self> {
        let sender = shared::require_non_blank("sender", sender)?;
        let recipient = shared::require_non_blank("recipient", recipient)?;
        let priority = kind.initial_priority(priority)?;

        Ok(Self {
            tracking_code,
            sender,
            recipient,
            kind,
            priority,
            status: ShipmentStatus::Registered,
            status_history: vec![ShipmentStatus::Registered],
            assigned_route: None,
        })
    }

    /// Standard shipment, priority 1..=3
    pub fn standard(
        tracking_code: TrackingCode,
        sender: &str,
        recipient: &str,
        priority: u8,
    ) -> Result<Self> {
        Self::new(
            ShipmentKind::Standard,
            tracking_code,
            sender,
            recipient,
            Some(priority),
        )
    }

    /// Fragile shipment, priority 2..=3
    pub fn fragile(
        tracking_code: TrackingCode,
        sender: &str,
        recipient: &str,
        priority: u8,
    ) -> Result<Self> {
        Self::new(
            ShipmentKind::Fragile,
            tracking_code,
            sender,
            recipient,
            Some(priority),
        )
    }

    /// Express shipment, priority fixed at 3
    pub fn express(tracking_code: TrackingCode, sender: &str, recipient: &str) -> Result<Self> {
        Self::new(ShipmentKind::Express, tracking_code, sender, recipient, None)
    }

    // ========== Getters ==========

    pub fn tracking_code(&self) -> &TrackingCode {
        &self.tracking_code
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn kind(&self) -> ShipmentKind {
        self.kind
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    /// Read-only view of the history, oldest first
    pub fn status_history(&self) -> &[ShipmentStatus] {
        &self.status_history
    }

    pub fn assigned_route(&self) -> Option<&RouteId> {
        self.assigned_route.as_ref()
    }

    pub fn is_assigned_to_route(&self) -> bool {
        self.assigned_route.is_some()
    }

    pub fn is_delivered(&self) -> bool {
        self.status == ShipmentStatus::Delivered
    }

    // ========== State Transitions ==========

    /// Check that `new_status` is the next step, without changing anything
    pub fn can_change_to(&self, new_status: &str) -> Result<()> {
        self.check_transition(new_status).map(|_| ())
    }

    /// Move to `new_status` (case-insensitive name)
    pub fn update_status(&mut self, new_status: &str) -> Result<()> {
        let next = self.check_transition(new_status)?;
        self.apply(next);
        Ok(())
    }

    /// Move to `next`, which must be the table's successor of the current status
    pub fn transition_to(&mut self, next: ShipmentStatus) -> Result<()> {
        self.check_transition(next.as_str())?;
        self.apply(next);
        Ok(())
    }

    fn check_transition(&self, requested: &str) -> Result<ShipmentStatus> {
        let wanted = ShipmentStatus::parse(requested);
        match (wanted, self.status.next()) {
            (Some(wanted), Some(allowed)) if wanted == allowed => Ok(wanted),
            _ => Err(LogisticsError::InvalidTransition {
                from: self.status.to_string(),
                to: requested.trim().to_uppercase(),
            }),
        }
    }

    fn apply(&mut self, next: ShipmentStatus) {
        self.status = next;
        self.status_history.push(next);
    }

    // ========== Route Assignment ==========

    /// Tag this shipment with a route
    ///
    /// Assigning the route it already carries is a no-op; any other route
    /// is a conflict until the current one is removed.
    pub fn assign_route(&mut self, route_id: &RouteId) -> Result<()> {
        match &self.assigned_route {
            Some(current) if current == route_id => Ok(()),
            Some(current) => Err(LogisticsError::conflict(format!(
                "shipment {} is already assigned to route {}",
                self.tracking_code, current
            ))),
            None => {
                self.assigned_route = Some(route_id.clone());
                Ok(())
            }
        }
    }

    /// Clear the route tag
    pub fn remove_route(&mut self) -> Result<()> {
        if self.assigned_route.take().is_none() {
            return Err(LogisticsError::invalid_state(format!(
                "shipment {} has no route assigned",
                self.tracking_code
            )));
        }
        Ok(())
    }

    // ========== Priority ==========

    pub fn increase_priority(&mut self) -> Result<()> {
        self.priority = self.kind.raised(self.priority)?;
        Ok(())
    }

    pub fn decrease_priority(&mut self) -> Result<()> {
        self.priority = self.kind.lowered(self.priority)?;
        Ok(())
    }
}
