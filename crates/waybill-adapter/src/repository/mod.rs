//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from waybill-domain.

pub mod in_memory;
