//! RouteService - Creating routes and moving shipments along them
//!
//! Every operation loads what it needs, lets the `Route` entity run its
//! checks and mutations, then saves in the order shipments → centers →
//! route.

use shared::{require_non_blank, LogisticsError, Result};
use tracing::{debug, info, warn};
use waybill_domain::{
    CenterRepository, Route, RouteId, RouteRepository, Shipment, ShipmentRepository, TrackingCode,
};

use crate::lookup;
use crate::projection::RouteSummary;

/// Creates routes, assigns shipments to them, dispatches and completes them
pub struct RouteService<R, S, C> {
    routes: R,
    shipments: S,
    centers: C,
}

impl<R, S, C> RouteService<R, S, C>
where
    R: RouteRepository,
    S: ShipmentRepository,
    C: CenterRepository,
{
    pub fn new(routes: R, shipments: S, centers: C) -> Self {
        Self {
            routes,
            shipments,
            centers,
        }
    }

    /// Create an active route between two registered centers
    pub fn create_route(&mut self, id: &str, origin_id: &str, destination_id: &str) -> Result<Route> {
        let id = require_non_blank("route id", id)?;
        let origin_id = require_non_blank("origin center id", origin_id)?;
        let destination_id = require_non_blank("destination center id", destination_id)?;

        if origin_id == destination_id {
            warn!(route_id = %id, center_id = %origin_id, "Rejected loop route");
            return Err(LogisticsError::invalid_argument(format!(
                "origin and destination cannot be the same center ({})",
                origin_id
            )));
        }

        let id = RouteId::parse(&id)?;
        let origin = lookup::center(&self.centers, &origin_id, "origin center")?;
        let destination = lookup::center(&self.centers, &destination_id, "destination center")?;

        if self.routes.exists(&id)? {
            warn!(route_id = %id, "Rejected duplicate route");
            return Err(LogisticsError::conflict(format!(
                "a route with id {} already exists",
                id
            )));
        }

        let route = Route::new(id, &origin, &destination)?;
        self.routes.add(route.clone())?;

        info!(
            route_id = %route.id(),
            origin = %route.origin(),
            destination = %route.destination(),
            "Route created"
        );
        Ok(route)
    }

    pub fn get_route(&self, id: &str) -> Result<Route> {
        lookup::route(&self.routes, id)
    }

    /// All routes, sorted by id
    pub fn list_routes(&self) -> Result<Vec<RouteSummary>> {
        let mut routes = self.routes.list_all()?;
        routes.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(routes.iter().map(RouteSummary::from).collect())
    }

    /// Assign a shipment to a route, staging it in the route's origin center
    pub fn assign_shipment_to_route(&mut self, tracking_code: &str, route_id: &str) -> Result<Route> {
        let mut route = lookup::route(&self.routes, route_id)?;
        let mut shipment = lookup::shipment(&self.shipments, tracking_code)?;
        let code = shipment.tracking_code().clone();

        if !route.is_active() {
            warn!(route_id = %route.id(), tracking_code = %code, "Route is not active");
            return Err(LogisticsError::invalid_state(format!(
                "route {} is not active",
                route.id()
            )));
        }

        let carrying = self.routes.find_carrying(code.as_str())?;
        if let Some(current) = shipment
            .assigned_route()
            .cloned()
            .or_else(|| carrying.first().map(|r| r.id().clone()))
        {
            warn!(tracking_code = %code, route_id = %current, "Shipment already on a route");
            return Err(LogisticsError::conflict(format!(
                "shipment {} is already assigned to route {}",
                code, current
            )));
        }

        if let Some(holder) = self.centers.find_holding(code.as_str())? {
            if holder.id() != route.origin() {
                warn!(tracking_code = %code, center_id = %holder.id(), "Shipment is not at the route origin");
                return Err(LogisticsError::conflict(format!(
                    "shipment {} is in center {}, not at origin {} of route {}",
                    code,
                    holder.id(),
                    route.origin(),
                    route.id()
                )));
            }
        }

        let mut origin = self.centers.get_by_id(route.origin())?;
        route.add_shipment(&mut shipment, &mut origin)?;

        self.shipments.add(shipment)?;
        self.centers.add(origin)?;
        self.routes.add(route.clone())?;

        info!(tracking_code = %code, route_id = %route.id(), "Shipment assigned to route");
        Ok(route)
    }

    /// Take a shipment off a route; it stays in the origin center
    pub fn remove_shipment_from_route(&mut self, tracking_code: &str, route_id: &str) -> Result<Route> {
        let mut route = lookup::route(&self.routes, route_id)?;
        let mut shipment = lookup::shipment(&self.shipments, tracking_code)?;

        route.remove_shipment(&mut shipment).inspect_err(|e| {
            warn!(route_id = %route.id(), error = %e, "Shipment not removed from route");
        })?;

        info!(
            tracking_code = %shipment.tracking_code(),
            route_id = %route.id(),
            "Shipment removed from route"
        );
        self.shipments.add(shipment)?;
        self.routes.add(route.clone())?;
        Ok(route)
    }

    /// Dispatch every shipment on the route still waiting at the origin
    ///
    /// A route without shipments is left untouched. A route whose shipments
    /// have all left already is an error.
    pub fn dispatch_route(&mut self, route_id: &str) -> Result<Vec<TrackingCode>> {
        let route = lookup::route(&self.routes, route_id)?;
        if !route.is_active() {
            warn!(route_id = %route.id(), "Route already completed");
            return Err(LogisticsError::invalid_state(format!(
                "route {} has already been completed",
                route.id()
            )));
        }
        if route.shipment_count() == 0 {
            debug!(route_id = %route.id(), "Nothing to dispatch");
            return Ok(Vec::new());
        }

        let mut origin = self.centers.get_by_id(route.origin())?;
        let pending = route.pending_dispatch(&origin);
        if pending.is_empty() {
            warn!(route_id = %route.id(), "Route already dispatched");
            return Err(LogisticsError::invalid_state(format!(
                "route {} has already been dispatched",
                route.id()
            )));
        }

        let mut shipments = lookup::shipments(&self.shipments, &pending)?;
        for shipment in &shipments {
            shipment.can_change_to("IN_TRANSIT")?;
        }
        for shipment in &mut shipments {
            origin.dispatch_shipment(shipment)?;
        }

        for shipment in shipments {
            self.shipments.add(shipment)?;
        }
        self.centers.add(origin)?;

        info!(route_id = %route.id(), dispatched = pending.len(), "Route dispatched");
        Ok(pending)
    }

    /// Deliver every shipment on the route and deactivate it for good
    pub fn complete_route(&mut self, route_id: &str) -> Result<Vec<TrackingCode>> {
        let mut route = lookup::route(&self.routes, route_id)?;
        if !route.is_active() {
            warn!(route_id = %route.id(), "Route already finished");
            return Err(LogisticsError::invalid_state(format!(
                "route {} is already finished",
                route.id()
            )));
        }

        let mut destination = self.centers.get_by_id(route.destination())?;
        let mut shipments: Vec<Shipment> =
            lookup::shipments(&self.shipments, &route.list_shipments())?;

        let delivered = route
            .complete_route(&mut destination, &mut shipments)
            .inspect_err(|e| {
                warn!(route_id = %route.id(), error = %e, "Route not completed");
            })?;

        for shipment in shipments {
            self.shipments.add(shipment)?;
        }
        self.centers.add(destination)?;
        self.routes.add(route.clone())?;

        info!(route_id = %route.id(), delivered = delivered.len(), "Route completed");
        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CenterService, ShipmentService};
    use shared::ErrorKind;
    use waybill_adapter::{
        InMemoryCenterRepository, InMemoryRouteRepository, InMemoryShipmentRepository,
    };
    use waybill_domain::{ShipmentKind, ShipmentStatus};

    const ROUTE: &str = "MAD01-BCN02-STD-001";

    struct Fixture {
        routes: RouteService<
            InMemoryRouteRepository,
            InMemoryShipmentRepository,
            InMemoryCenterRepository,
        >,
        centers: CenterService<InMemoryCenterRepository, InMemoryShipmentRepository>,
        shipments: ShipmentService<InMemoryShipmentRepository>,
    }

    fn setup() -> Fixture {
        let route_repo = InMemoryRouteRepository::new();
        let center_repo = InMemoryCenterRepository::new();
        let shipment_repo = InMemoryShipmentRepository::new();

        let mut f = Fixture {
            routes: RouteService::new(route_repo, shipment_repo.clone(), center_repo.clone()),
            centers: CenterService::new(center_repo, shipment_repo.clone()),
            shipments: ShipmentService::new(shipment_repo),
        };
        f.centers.register_center("MAD01", "Madrid", "Calle A").unwrap();
        f.centers.register_center("BCN02", "Barcelona", "Calle B").unwrap();
        f
    }

    fn register(f: &mut Fixture, code: &str) {
        f.shipments
            .register_shipment(code, "A", "B", None, ShipmentKind::Standard)
            .unwrap();
    }

    #[test]
    fn test_create_route() {
        let mut f = setup();
        let route = f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();

        assert_eq!(route.origin().as_str(), "MAD01");
        assert_eq!(route.destination().as_str(), "BCN02");
        assert!(f.routes.get_route(ROUTE).unwrap().is_active());
    }

    #[test]
    fn test_create_route_errors() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();

        let err = f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = f
            .routes
            .create_route("MAD01-BCN02-STD-002", "NOEXIST", "BCN02")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("origin center"));

        let err = f
            .routes
            .create_route("MAD01-BCN02-STD-002", "MAD01", "NOEXIST")
            .unwrap_err();
        assert!(err.to_string().contains("destination center"));

        let err = f.routes.create_route("   ", "MAD01", "BCN02").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = f
            .routes
            .create_route("BCN02-MAD01-STD-002", "MAD01", "BCN02")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(f.routes.list_routes().unwrap().len(), 1);
    }

    #[test]
    fn test_create_route_same_origin_destination() {
        let mut f = setup();
        let err = f
            .routes
            .create_route("MAD01-MAD01-STD-001", "MAD01", "MAD01")
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("cannot be the same"));
        assert!(f.routes.list_routes().unwrap().is_empty());
    }

    #[test]
    fn test_list_routes() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        f.routes
            .create_route("BCN02-MAD01-STD-002", "BCN02", "MAD01")
            .unwrap();

        let routes = f.routes.list_routes().unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].id, "BCN02-MAD01-STD-002");
        assert!(routes.iter().all(|r| r.active));
    }

    #[test]
    fn test_get_route_errors() {
        let f = setup();
        assert_eq!(
            f.routes.get_route("MAD01-BCN02-STD-999").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            f.routes.get_route("   ").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_assign_shipment() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");

        let route = f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();
        assert_eq!(route.list_shipments()[0].as_str(), "ABC123");

        let shipment = f.shipments.get_shipment("ABC123").unwrap();
        assert_eq!(shipment.assigned_route().unwrap().as_str(), ROUTE);
        assert!(f.centers.get_center("MAD01").unwrap().has_shipment("ABC123"));
    }

    #[test]
    fn test_assign_lookup_misses() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");

        assert_eq!(
            f.routes
                .assign_shipment_to_route("ABC123", "MAD01-BCN02-STD-999")
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            f.routes
                .assign_shipment_to_route("NOEXIST", ROUTE)
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_assign_twice() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();

        let err = f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_string().contains("already assigned"));
    }

    #[test]
    fn test_assign_shipment_held_elsewhere() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.centers.receive_shipment("ABC123", "BCN02").unwrap();

        let err = f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(!f.centers.get_center("MAD01").unwrap().has_shipment("ABC123"));
        assert_eq!(f.routes.get_route(ROUTE).unwrap().shipment_count(), 0);
    }

    #[test]
    fn test_assign_shipment_already_at_origin() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.centers.receive_shipment("ABC123", "MAD01").unwrap();

        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();
        assert_eq!(f.centers.get_center("MAD01").unwrap().shipment_count(), 1);
    }

    #[test]
    fn test_remove_shipment_from_route() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();

        let route = f.routes.remove_shipment_from_route("ABC123", ROUTE).unwrap();
        assert_eq!(route.shipment_count(), 0);
        assert!(f.shipments.get_shipment("ABC123").unwrap().assigned_route().is_none());
        assert!(f.centers.get_center("MAD01").unwrap().has_shipment("ABC123"));
    }

    #[test]
    fn test_remove_shipment_not_on_route() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        f.routes
            .create_route("BCN02-MAD01-STD-002", "BCN02", "MAD01")
            .unwrap();
        register(&mut f, "ABC123");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();

        let err = f
            .routes
            .remove_shipment_from_route("ABC123", "BCN02-MAD01-STD-002")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = f
            .routes
            .remove_shipment_from_route("ABC123", "MAD01-BCN02-STD-999")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_dispatch_route() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();

        let dispatched = f.routes.dispatch_route(ROUTE).unwrap();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(
            f.shipments.get_shipment("ABC123").unwrap().status(),
            ShipmentStatus::InTransit
        );
        assert!(!f.centers.get_center("MAD01").unwrap().has_shipment("ABC123"));

        let err = f.routes.dispatch_route(ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(err.to_string().contains("already been dispatched"));
    }

    #[test]
    fn test_dispatch_route_without_shipments() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();

        assert!(f.routes.dispatch_route(ROUTE).unwrap().is_empty());
        assert!(f.routes.get_route(ROUTE).unwrap().is_active());
    }

    #[test]
    fn test_dispatch_completed_route() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        f.routes.complete_route(ROUTE).unwrap();

        let err = f.routes.dispatch_route(ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(err.to_string().contains("already been completed"));
        assert_eq!(
            f.routes.dispatch_route("MAD01-BCN02-STD-999").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_dispatch_late_assignment() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        register(&mut f, "XYZ789");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();
        f.routes.dispatch_route(ROUTE).unwrap();

        // A shipment added after the first dispatch goes out on the next one
        f.routes.assign_shipment_to_route("XYZ789", ROUTE).unwrap();
        let dispatched = f.routes.dispatch_route(ROUTE).unwrap();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].as_str(), "XYZ789");
    }

    #[test]
    fn test_complete_route() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();
        f.routes.dispatch_route(ROUTE).unwrap();

        let delivered = f.routes.complete_route(ROUTE).unwrap();
        assert_eq!(delivered.len(), 1);

        assert!(!f.routes.get_route(ROUTE).unwrap().is_active());
        let shipment = f.shipments.get_shipment("ABC123").unwrap();
        assert_eq!(shipment.status(), ShipmentStatus::Delivered);
        assert!(shipment.assigned_route().is_none());
        assert!(f.centers.get_center("BCN02").unwrap().has_shipment("ABC123"));

        let err = f.routes.complete_route(ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(err.to_string().contains("already finished"));
    }

    #[test]
    fn test_complete_route_without_shipments() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();

        assert!(f.routes.complete_route(ROUTE).unwrap().is_empty());
        assert!(!f.routes.get_route(ROUTE).unwrap().is_active());
    }

    #[test]
    fn test_complete_route_before_dispatch() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        register(&mut f, "ABC123");
        f.routes.assign_shipment_to_route("ABC123", ROUTE).unwrap();

        let err = f.routes.complete_route(ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        // Nothing moved
        assert!(f.routes.get_route(ROUTE).unwrap().is_active());
        assert!(f.centers.get_center("MAD01").unwrap().has_shipment("ABC123"));
        assert_eq!(
            f.shipments.get_shipment("ABC123").unwrap().status(),
            ShipmentStatus::Registered
        );
    }

    #[test]
    fn test_assign_to_inactive_route() {
        let mut f = setup();
        f.routes.create_route(ROUTE, "MAD01", "BCN02").unwrap();
        f.routes.complete_route(ROUTE).unwrap();
        register(&mut f, "XYZ789");

        let err = f.routes.assign_shipment_to_route("XYZ789", ROUTE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(err.to_string().contains("not active"));
    }
}
