//! Route Repository - Abstract persistence for Routes

use shared::RepositoryError;

use crate::model::ids::RouteId;
use crate::model::route::Route;

/// Route Repository Trait
pub trait RouteRepository {
    /// Store a route (create or overwrite)
    fn add(&mut self, route: Route) -> Result<(), RepositoryError>;

    /// Remove a route, returning it if it was stored
    fn remove(&mut self, id: &RouteId) -> Result<Option<Route>, RepositoryError>;

    /// Find a route by ID
    fn find_by_id(&self, id: &RouteId) -> Result<Option<Route>, RepositoryError>;

    /// List all stored routes, in no particular order
    fn list_all(&self) -> Result<Vec<Route>, RepositoryError>;

    /// Get a route that must exist
    fn get_by_id(&self, id: &RouteId) -> Result<Route, RepositoryError> {
        self.find_by_id(id)?.ok_or_else(|| RepositoryError::NotFound {
            entity: "route",
            id: id.to_string(),
        })
    }

    /// Check if a route exists
    fn exists(&self, id: &RouteId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Routes that currently carry a shipment
    fn find_carrying(&self, tracking_code: &str) -> Result<Vec<Route>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| r.has_shipment(tracking_code))
            .collect())
    }
}
