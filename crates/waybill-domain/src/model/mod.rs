//! Domain Models - The vocabulary of Waybill
//!
//! Every name here should match how operators talk about parcels.

pub mod ids;
pub mod kind;
pub mod logistic_center;
pub mod route;
pub mod shipment;
pub mod status;
