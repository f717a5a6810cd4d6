//! Shipment Repository - Abstract persistence for Shipments

use shared::RepositoryError;

use crate::model::ids::TrackingCode;
use crate::model::shipment::Shipment;

/// Shipment Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Note: No async here - that's an implementation detail.
pub trait ShipmentRepository {
    /// Store a shipment (create or overwrite)
    fn add(&mut self, shipment: Shipment) -> Result<(), RepositoryError>;

    /// Remove a shipment, returning it if it was stored
    fn remove(&mut self, tracking_code: &TrackingCode) -> Result<Option<Shipment>, RepositoryError>;

    /// Find a shipment by tracking code
    fn find_by_id(&self, tracking_code: &TrackingCode) -> Result<Option<Shipment>, RepositoryError>;

    /// List all stored shipments, in no particular order
    fn list_all(&self) -> Result<Vec<Shipment>, RepositoryError>;

    /// Get a shipment that must exist
    fn get_by_id(&self, tracking_code: &TrackingCode) -> Result<Shipment, RepositoryError> {
        self.find_by_id(tracking_code)?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "shipment",
                id: tracking_code.to_string(),
            })
    }

    /// Check if a shipment exists
    fn exists(&self, tracking_code: &TrackingCode) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(tracking_code)?.is_some())
    }
}
