//! Identifier validation
//!
//! Identifiers arrive as free text from callers. These checks run before
//! any entity is built, so the domain only ever sees well-formed ids.
//!
//! | identifier    | shape                              | example               |
//! |---------------|------------------------------------|-----------------------|
//! | tracking code | 3 letters + 3 digits               | `ABC123`              |
//! | center id     | 3-4 letters + 2 digits             | `MAD01`, `BCNA02`     |
//! | route id      | `ORIGIN-DEST-TYPE-SEQ`             | `MAD01-BCN02-STD-001` |

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LogisticsError, Result};

static TRACKING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("tracking code pattern"));

static CENTER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3,4}[0-9]{2}$").expect("center id pattern"));

static ROUTE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<origin>[A-Z]{3,4}[0-9]{2})-(?P<destination>[A-Z]{3,4}[0-9]{2})-[A-Z]{3}-[0-9]{3}$")
        .expect("route id pattern")
});

/// Trim `value` and reject it if nothing is left
pub fn require_non_blank(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LogisticsError::invalid_argument(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a shipment tracking code (3 letters + 3 digits)
pub fn validate_tracking_code(value: &str) -> Result<String> {
    let code = require_non_blank("tracking code", value)?;
    if !TRACKING_CODE.is_match(&code) {
        return Err(LogisticsError::invalid_argument(format!(
            "tracking code '{}' must be 3 uppercase letters followed by 3 digits",
            code
        )));
    }
    Ok(code)
}

/// Validate a logistic center id (3-4 letters + 2 digits)
pub fn validate_center_id(value: &str) -> Result<String> {
    let id = require_non_blank("center id", value)?;
    if !CENTER_ID.is_match(&id) {
        return Err(LogisticsError::invalid_argument(format!(
            "center id '{}' must be 3-4 uppercase letters followed by 2 digits",
            id
        )));
    }
    Ok(id)
}

/// Validate a route id (`ORIGIN-DEST-TYPE-SEQ`)
pub fn validate_route_id(value: &str) -> Result<String> {
    let id = require_non_blank("route id", value)?;
    if !ROUTE_ID.is_match(&id) {
        return Err(LogisticsError::invalid_argument(format!(
            "route id '{}' must look like ORIGIN-DEST-TYPE-SEQ (e.g. MAD01-BCN02-STD-001)",
            id
        )));
    }
    Ok(id)
}

/// Extract the origin and destination center codes embedded in a route id
///
/// Returns `None` if the id is not well-formed.
pub fn route_endpoints(route_id: &str) -> Option<(&str, &str)> {
    let caps = ROUTE_ID.captures(route_id)?;
    let origin = caps.name("origin")?.as_str();
    let destination = caps.name("destination")?.as_str();
    Some((origin, destination))
}
