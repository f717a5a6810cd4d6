//! Seeding the services from configuration and running the routes

use serde::Serialize;
use shared::config::WaybillConfig;
use shared::Result;
use tracing::info;
use waybill_adapter::{InMemoryCenterRepository, InMemoryRouteRepository, InMemoryShipmentRepository};
use waybill_domain::TrackingCode;
use waybill_usecase::{
    CenterService, CenterSummary, RouteService, RouteSummary, ShipmentService, ShipmentSummary,
};

/// Built-in seed used when no configuration file is given
pub const DEMO_SEED: &str = r#"{
    "logLevel": "info",
    "centers": [
        { "id": "MAD01", "name": "Madrid Hub", "location": "Calle Mayor 1" },
        { "id": "BCN02", "name": "Barcelona Hub", "location": "Carrer Gran 2" },
        { "id": "VAL03", "name": "Valencia Hub", "location": "Avinguda del Port 3" }
    ],
    "routes": [
        { "id": "MAD01-BCN02-STD-001", "origin": "MAD01", "destination": "BCN02" },
        { "id": "MAD01-VAL03-EXP-002", "origin": "MAD01", "destination": "VAL03" }
    ],
    "shipments": [
        { "trackingCode": "ABC123", "sender": "Alice", "recipient": "Bob", "route": "MAD01-BCN02-STD-001" },
        { "trackingCode": "FRG201", "sender": "Carol", "recipient": "Dave", "priority": 3, "kind": "fragile", "route": "MAD01-BCN02-STD-001" },
        { "trackingCode": "EXP301", "sender": "Erin", "recipient": "Frank", "kind": "express", "route": "MAD01-VAL03-EXP-002" },
        { "trackingCode": "XYZ789", "sender": "Grace", "recipient": "Heidi" }
    ]
}"#;

/// Final state of every repository, as printed by the binary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub shipments: Vec<ShipmentSummary>,
    pub centers: Vec<CenterSummary>,
    pub routes: Vec<RouteSummary>,
}

/// The three services wired to one shared set of in-memory repositories
pub struct Waybill {
    shipments: ShipmentService<InMemoryShipmentRepository>,
    centers: CenterService<InMemoryCenterRepository, InMemoryShipmentRepository>,
    routes: RouteService<InMemoryRouteRepository, InMemoryShipmentRepository, InMemoryCenterRepository>,
}

impl Waybill {
    pub fn in_memory() -> Self {
        // Adapters (could be swapped for a persistent store)
        let shipment_repo = InMemoryShipmentRepository::new();
        let center_repo = InMemoryCenterRepository::new();
        let route_repo = InMemoryRouteRepository::new();

        Self {
            shipments: ShipmentService::new(shipment_repo.clone()),
            centers: CenterService::new(center_repo.clone(), shipment_repo.clone()),
            routes: RouteService::new(route_repo, shipment_repo, center_repo),
        }
    }

    /// Register everything the configuration lists, stopping at the first error
    pub fn seed(&mut self, config: &WaybillConfig) -> Result<()> {
        for center in &config.centers {
            self.centers
                .register_center(&center.id, &center.name, &center.location)?;
        }
        for route in &config.routes {
            self.routes
                .create_route(&route.id, &route.origin, &route.destination)?;
        }
        for seed in &config.shipments {
            self.shipments.register_shipment_of_type(
                &seed.tracking_code,
                &seed.sender,
                &seed.recipient,
                seed.priority,
                &seed.kind,
            )?;
            if let Some(route) = &seed.route {
                self.routes
                    .assign_shipment_to_route(&seed.tracking_code, route)?;
            }
        }

        info!(
            centers = config.centers.len(),
            routes = config.routes.len(),
            shipments = config.shipments.len(),
            "Seed loaded"
        );
        Ok(())
    }

    /// Dispatch and complete every active route that carries shipments
    ///
    /// Returns the tracking codes delivered, in route order.
    pub fn run_routes(&mut self) -> Result<Vec<TrackingCode>> {
        let mut delivered = Vec::new();
        for route in self.routes.list_routes()? {
            if !route.active || route.shipment_count == 0 {
                continue;
            }
            self.routes.dispatch_route(&route.id)?;
            delivered.extend(self.routes.complete_route(&route.id)?);
        }
        Ok(delivered)
    }

    pub fn report(&self) -> Result<Report> {
        Ok(Report {
            shipments: self.shipments.list_shipments()?,
            centers: self.centers.list_centers()?,
            routes: self.routes.list_routes()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorKind;

    fn demo() -> Waybill {
        let config = WaybillConfig::from_json(DEMO_SEED).unwrap();
        let mut waybill = Waybill::in_memory();
        waybill.seed(&config).unwrap();
        waybill
    }

    #[test]
    fn test_demo_seed() {
        let waybill = demo();
        let report = waybill.report().unwrap();

        assert_eq!(report.shipments.len(), 4);
        assert_eq!(report.centers.len(), 3);
        assert_eq!(report.routes.len(), 2);

        // Route shipments wait at the shared origin
        let madrid = report.centers.iter().find(|c| c.id == "MAD01").unwrap();
        assert_eq!(madrid.shipment_count, 3);
    }

    #[test]
    fn test_run_routes() {
        let mut waybill = demo();
        let delivered = waybill.run_routes().unwrap();
        assert_eq!(delivered.len(), 3);

        let report = waybill.report().unwrap();
        assert!(report.routes.iter().all(|r| !r.active && r.shipment_count == 0));
        for shipment in &report.shipments {
            let expected = if shipment.tracking_code == "XYZ789" {
                "REGISTERED"
            } else {
                "DELIVERED"
            };
            assert_eq!(shipment.status, expected);
            assert!(shipment.assigned_route.is_none());
        }

        let counts: Vec<(String, usize)> = report
            .centers
            .into_iter()
            .map(|c| (c.id, c.shipment_count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("BCN02".to_string(), 2),
                ("MAD01".to_string(), 0),
                ("VAL03".to_string(), 1)
            ]
        );

        // Completed routes are skipped on a second pass
        assert!(waybill.run_routes().unwrap().is_empty());
    }

    #[test]
    fn test_seed_stops_on_bad_shipment() {
        let config = WaybillConfig::from_json(
            r#"{ "shipments": [
                { "trackingCode": "EXP301", "sender": "A", "recipient": "B", "kind": "express", "priority": 1 }
            ] }"#,
        )
        .unwrap();

        let mut waybill = Waybill::in_memory();
        let err = waybill.seed(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(waybill.report().unwrap().shipments.is_empty());
    }

    #[test]
    fn test_seed_unknown_route() {
        let config = WaybillConfig::from_json(
            r#"{ "shipments": [
                { "trackingCode": "ABC123", "sender": "A", "recipient": "B", "route": "MAD01-BCN02-STD-001" }
            ] }"#,
        )
        .unwrap();

        let err = Waybill::in_memory().seed(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_report_json() {
        let report = demo().report().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["routes"][0]["id"], "MAD01-BCN02-STD-001");
        assert_eq!(json["routes"][0]["shipmentCount"], 2);
        assert_eq!(json["shipments"][0]["trackingCode"], "ABC123");
    }
}
