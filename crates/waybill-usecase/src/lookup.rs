//! Identifier resolution shared by the services
//!
//! A blank identifier is an invalid argument. A non-blank one that does
//! not even have the right shape cannot name a stored entity, so it is
//! reported the same way as any other lookup miss.

use shared::{require_non_blank, LogisticsError, Result};
use tracing::debug;
use waybill_domain::{
    CenterId, CenterRepository, LogisticCenter, Route, RouteId, RouteRepository, Shipment,
    ShipmentRepository, TrackingCode,
};

pub(crate) fn tracking_code(raw: &str) -> Result<TrackingCode> {
    let value = require_non_blank("tracking code", raw)?;
    TrackingCode::parse(&value).map_err(|_| LogisticsError::not_found("shipment", value))
}

pub(crate) fn center_id(raw: &str, entity: &'static str) -> Result<CenterId> {
    let value = require_non_blank("center id", raw)?;
    CenterId::parse(&value).map_err(|_| LogisticsError::not_found(entity, value))
}

pub(crate) fn route_id(raw: &str) -> Result<RouteId> {
    let value = require_non_blank("route id", raw)?;
    RouteId::parse(&value).map_err(|_| LogisticsError::not_found("route", value))
}

pub(crate) fn shipment<S: ShipmentRepository>(repo: &S, raw: &str) -> Result<Shipment> {
    let code = tracking_code(raw)?;
    debug!(tracking_code = %code, "Looking up shipment");
    repo.find_by_id(&code)?
        .ok_or_else(|| LogisticsError::not_found("shipment", code.as_str()))
}

/// `entity` names the center's role in the error ("origin center", ...)
pub(crate) fn center<C: CenterRepository>(
    repo: &C,
    raw: &str,
    entity: &'static str,
) -> Result<LogisticCenter> {
    let id = center_id(raw, entity)?;
    debug!(center_id = %id, "Looking up center");
    repo.find_by_id(&id)?
        .ok_or_else(|| LogisticsError::not_found(entity, id.as_str()))
}

pub(crate) fn route<R: RouteRepository>(repo: &R, raw: &str) -> Result<Route> {
    let id = route_id(raw)?;
    debug!(route_id = %id, "Looking up route");
    repo.find_by_id(&id)?
        .ok_or_else(|| LogisticsError::not_found("route", id.as_str()))
}

/// Load every listed shipment, failing on the first one that is missing
pub(crate) fn shipments<S: ShipmentRepository>(
    repo: &S,
    codes: &[TrackingCode],
) -> Result<Vec<Shipment>> {
    codes
        .iter()
        .map(|code| -> Result<Shipment> {
            repo.find_by_id(code)?
                .ok_or_else(|| LogisticsError::not_found("shipment", code.as_str()))
        })
        .collect()
}
