//! # Waybill Domain Layer
//!
//! Shipments moving between logistic centers along directed routes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Entities & Value Objects                     ││
//! │  │  repository/ - Trait definitions (not implementations)      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where a shipment lives
//!
//! Entities point at each other by identifier. A center or route holds
//! tracking codes; the `Shipment` value itself lives in its repository.
//! At any moment a shipment is in at most one center and on at most one
//! route, and its `status` / `assigned_route` agree with that placement:
//!
//! ```text
//! REGISTERED  ── received ──▶ center
//!             ── assigned ──▶ route + origin center (staged)
//! IN_TRANSIT  ── dispatched ─▶ route only (no center)
//! DELIVERED   ── completed ──▶ destination center (no route)
//! ```

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    ids::{CenterId, RouteId, TrackingCode},
    kind::ShipmentKind,
    logistic_center::LogisticCenter,
    route::Route,
    shipment::Shipment,
    status::ShipmentStatus,
};

pub use repository::{
    center_repository::CenterRepository, route_repository::RouteRepository,
    shipment_repository::ShipmentRepository,
};
