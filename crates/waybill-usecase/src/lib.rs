//! # Waybill Use Case Layer
//!
//! Application services. Each service resolves identifiers against the
//! repositories, mutates the entities involved in a fixed order and saves
//! them back, so that no single call can leave a shipment in two places.
//!
//! ```text
//! caller ──▶ RouteService::assign_shipment_to_route("ABC123", "MAD01-BCN02-STD-001")
//!              ├── load route, shipment, origin center
//!              ├── Route::add_shipment (all checks, then route + tag + origin)
//!              └── save shipment, origin center, route
//! ```
//!
//! Services are generic over the repository traits. Handing several
//! services clones of the same in-memory repository makes them share state.

pub mod center_service;
pub mod projection;
pub mod route_service;
pub mod shipment_service;

mod lookup;

pub use waybill_domain;

pub use center_service::CenterService;
pub use projection::{CenterSummary, RouteSummary, ShipmentSummary};
pub use route_service::RouteService;
pub use shipment_service::ShipmentService;
