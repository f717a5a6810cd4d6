//! Center Repository - Abstract persistence for LogisticCenters

use shared::RepositoryError;

use crate::model::ids::CenterId;
use crate::model::logistic_center::LogisticCenter;

/// Center Repository Trait
///
/// Used by the services to resolve center ids and to save centers back
/// after their shipment sets change.
pub trait CenterRepository {
    /// Store a center (create or overwrite)
    fn add(&mut self, center: LogisticCenter) -> Result<(), RepositoryError>;

    /// Remove a center, returning it if it was stored
    fn remove(&mut self, id: &CenterId) -> Result<Option<LogisticCenter>, RepositoryError>;

    /// Find a center by ID
    fn find_by_id(&self, id: &CenterId) -> Result<Option<LogisticCenter>, RepositoryError>;

    /// List all stored centers, in no particular order
    fn list_all(&self) -> Result<Vec<LogisticCenter>, RepositoryError>;

    /// Get a center that must exist
    fn get_by_id(&self, id: &CenterId) -> Result<LogisticCenter, RepositoryError> {
        self.find_by_id(id)?.ok_or_else(|| RepositoryError::NotFound {
            entity: "center",
            id: id.to_string(),
        })
    }

    /// Check if a center exists
    fn exists(&self, id: &CenterId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Find the center currently holding a shipment, if any
    fn find_holding(&self, tracking_code: &str) -> Result<Option<LogisticCenter>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .find(|c| c.has_shipment(tracking_code)))
    }
}
