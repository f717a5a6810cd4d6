//! # Waybill Adapter Layer
//!
//! Implementations of the domain's ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Persistence implementations

pub mod repository;

pub use repository::in_memory::{
    InMemoryCenterRepository, InMemoryRouteRepository, InMemoryShipmentRepository,
};
