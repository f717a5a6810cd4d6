//! In-Memory Repository Implementations
//!
//! Simple in-memory implementations of repository traits.
//! Clones share the same map, so several services can be handed their
//! own copy of a repository and still see each other's writes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::RepositoryError;
use waybill_domain::model::ids::{CenterId, RouteId, TrackingCode};
use waybill_domain::model::logistic_center::LogisticCenter;
use waybill_domain::model::route::Route;
use waybill_domain::model::shipment::Shipment;
use waybill_domain::repository::center_repository::CenterRepository;
use waybill_domain::repository::route_repository::RouteRepository;
use waybill_domain::repository::shipment_repository::ShipmentRepository;

type Store<T> = Arc<RwLock<HashMap<String, T>>>;

fn read<T>(store: &Store<T>) -> Result<RwLockReadGuard<'_, HashMap<String, T>>, RepositoryError> {
    store.read().map_err(|_| RepositoryError::Persistence {
        message: "Failed to acquire read lock".to_string(),
    })
}

fn write<T>(store: &Store<T>) -> Result<RwLockWriteGuard<'_, HashMap<String, T>>, RepositoryError> {
    store.write().map_err(|_| RepositoryError::Persistence {
        message: "Failed to acquire write lock".to_string(),
    })
}

/// In-memory Shipment Repository
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentRepository {
    shipments: Store<Shipment>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self {
            shipments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl ShipmentRepository for InMemoryShipmentRepository {
    fn add(&mut self, shipment: Shipment) -> Result<(), RepositoryError> {
        let mut shipments = write(&self.shipments)?;
        shipments.insert(shipment.tracking_code().as_str().to_string(), shipment);
        Ok(())
    }

    fn remove(&mut self, tracking_code: &TrackingCode) -> Result<Option<Shipment>, RepositoryError> {
        let mut shipments = write(&self.shipments)?;
        Ok(shipments.remove(tracking_code.as_str()))
    }

    fn find_by_id(&self, tracking_code: &TrackingCode) -> Result<Option<Shipment>, RepositoryError> {
        let shipments = read(&self.shipments)?;
        Ok(shipments.get(tracking_code.as_str()).cloned())
    }

    fn list_all(&self) -> Result<Vec<Shipment>, RepositoryError> {
        let shipments = read(&self.shipments)?;
        Ok(shipments.values().cloned().collect())
    }
}

/// In-memory LogisticCenter Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCenterRepository {
    centers: Store<LogisticCenter>,
}

impl InMemoryCenterRepository {
    pub fn new() -> Self {
        Self {
            centers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl CenterRepository for InMemoryCenterRepository {
    fn add(&mut self, center: LogisticCenter) -> Result<(), RepositoryError> {
        let mut centers = write(&self.centers)?;
        centers.insert(center.id().as_str().to_string(), center);
        Ok(())
    }

    fn remove(&mut self, id: &CenterId) -> Result<Option<LogisticCenter>, RepositoryError> {
        let mut centers = write(&self.centers)?;
        Ok(centers.remove(id.as_str()))
    }

    fn find_by_id(&self, id: &CenterId) -> Result<Option<LogisticCenter>, RepositoryError> {
        let centers = read(&self.centers)?;
        Ok(centers.get(id.as_str()).cloned())
    }

    fn list_all(&self) -> Result<Vec<LogisticCenter>, RepositoryError> {
        let centers = read(&self.centers)?;
        Ok(centers.values().cloned().collect())
    }

    fn find_holding(&self, tracking_code: &str) -> Result<Option<LogisticCenter>, RepositoryError> {
        let centers = read(&self.centers)?;
        Ok(centers
            .values()
            .find(|c| c.has_shipment(tracking_code))
            .cloned())
    }
}

/// In-memory Route Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryRouteRepository {
    routes: Store<Route>,
}

impl InMemoryRouteRepository {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl RouteRepository for InMemoryRouteRepository {
    fn add(&mut self, route: Route) -> Result<(), RepositoryError> {
        let mut routes = write(&self.routes)?;
        routes.insert(route.id().as_str().to_string(), route);
        Ok(())
    }

    fn remove(&mut self, id: &RouteId) -> Result<Option<Route>, RepositoryError> {
        let mut routes = write(&self.routes)?;
        Ok(routes.remove(id.as_str()))
    }

    fn find_by_id(&self, id: &RouteId) -> Result<Option<Route>, RepositoryError> {
        let routes = read(&self.routes)?;
        Ok(routes.get(id.as_str()).cloned())
    }

    fn list_all(&self) -> Result<Vec<Route>, RepositoryError> {
        let routes = read(&self.routes)?;
        Ok(routes.values().cloned().collect())
    }
}
