//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to persist data,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────────
//! trait ShipmentRepository│  InMemoryShipmentRepository
//!   fn add()              │
//!   fn find_by_id()       │
//! ```
//!
//! `add` inserts or overwrites and doubles as "save". Rejecting duplicate
//! identities is the service layer's job.

pub mod center_repository;
pub mod route_repository;
pub mod shipment_repository;
