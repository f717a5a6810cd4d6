//! ShipmentKind - The priority policy of a shipment
//!
//! Shipment variants differ only in how priority may move. Instead of one
//! type per variant, the kind carries the rule table:
//!
//! | kind     | bounds | default | explicit priority at creation |
//! |----------|--------|---------|-------------------------------|
//! | STANDARD | 1..=3  | 1       | allowed within bounds         |
//! | FRAGILE  | 2..=3  | 2       | allowed within bounds         |
//! | EXPRESS  | 3..=3  | 3       | rejected (usage error)        |

use shared::{LogisticsError, Result};

/// Variant of a Shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentKind {
    Standard,
    Fragile,
    Express,
}

impl ShipmentKind {
    /// Lowest priority this kind may hold
    pub fn min_priority(&self) -> u8 {
        match self {
            ShipmentKind::Standard => 1,
            ShipmentKind::Fragile => 2,
            ShipmentKind::Express => 3,
        }
    }

    /// Highest priority this kind may hold
    pub fn max_priority(&self) -> u8 {
        3
    }

    /// Priority used when none is given
    pub fn default_priority(&self) -> u8 {
        self.min_priority()
    }

    /// Express priority can never change
    pub fn has_fixed_priority(&self) -> bool {
        matches!(self, ShipmentKind::Express)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentKind::Standard => "STANDARD",
            ShipmentKind::Fragile => "FRAGILE",
            ShipmentKind::Express => "EXPRESS",
        }
    }

    /// Get all kinds (useful for iteration)
    pub fn all() -> &'static [ShipmentKind] {
        &[
            ShipmentKind::Standard,
            ShipmentKind::Fragile,
            ShipmentKind::Express,
        ]
    }

    /// Parse a kind name, ignoring case
    pub fn parse(value: &str) -> Result<ShipmentKind> {
        match value.trim().to_uppercase().as_str() {
            "STANDARD" => Ok(ShipmentKind::Standard),
            "FRAGILE" => Ok(ShipmentKind::Fragile),
            "EXPRESS" => Ok(ShipmentKind::Express),
            other => Err(LogisticsError::invalid_argument(format!(
                "unknown shipment type '{}' (expected STANDARD, FRAGILE or EXPRESS)",
                other
            ))),
        }
    }

    /// Resolve the priority a new shipment of this kind starts with
    pub fn initial_priority(&self, requested: Option<u8>) -> Result<u8> {
        let Some(priority) = requested else {
            return Ok(self.default_priority());
        };

        match self {
            ShipmentKind::Express => Err(LogisticsError::usage(
                "express shipments do not accept a priority; it is always 3",
            )),
            ShipmentKind::Fragile if priority < self.min_priority() => {
                Err(LogisticsError::invalid_argument(format!(
                    "fragile shipments cannot have a priority lower than {}",
                    self.min_priority()
                )))
            }
            _ if priority < self.min_priority() || priority > self.max_priority() => {
                Err(LogisticsError::invalid_argument(format!(
                    "priority must be between {} and {}",
                    self.min_priority(),
                    self.max_priority()
                )))
            }
            _ => Ok(priority),
        }
    }

    /// Priority after one step up from `current`
    pub fn raised(&self, current: u8) -> Result<u8> {
        if self.has_fixed_priority() {
            return Err(LogisticsError::invalid_state(
                "express shipment priority is fixed at 3",
            ));
        }
        if current >= self.max_priority() {
            return Err(LogisticsError::invalid_state(format!(
                "priority cannot go above {}",
                self.max_priority()
            )));
        }
        Ok(current + 1)
    }

    /// Priority after one step down from `current`
    pub fn lowered(&self, current: u8) -> Result<u8> {
        if self.has_fixed_priority() {
            return Err(LogisticsError::invalid_state(
                "express shipment priority is fixed at 3",
            ));
        }
        if current <= self.min_priority() {
            return Err(LogisticsError::invalid_state(format!(
                "{} shipment priority cannot go below {}",
                self.as_str().to_lowercase(),
                self.min_priority()
            )));
        }
        Ok(current - 1)
    }
}

impl core::fmt::Display for ShipmentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorKind;

    #[test]
    fn test_parse() {
        assert_eq!(ShipmentKind::parse("fragile").unwrap(), ShipmentKind::Fragile);
        assert_eq!(ShipmentKind::parse("EXPRESS").unwrap(), ShipmentKind::Express);
        assert_eq!(
            ShipmentKind::parse("unknown").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_initial_priority() {
        assert_eq!(ShipmentKind::Standard.initial_priority(None).unwrap(), 1);
        assert_eq!(ShipmentKind::Fragile.initial_priority(None).unwrap(), 2);
        assert_eq!(ShipmentKind::Express.initial_priority(None).unwrap(), 3);

        assert_eq!(
            ShipmentKind::Standard.initial_priority(Some(0)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ShipmentKind::Standard.initial_priority(Some(4)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ShipmentKind::Fragile.initial_priority(Some(1)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ShipmentKind::Express.initial_priority(Some(3)).unwrap_err().kind(),
            ErrorKind::Usage
        );
    }

    #[test]
    fn test_bounds() {
        for kind in ShipmentKind::all() {
            assert!(kind.raised(kind.max_priority()).is_err());
            assert!(kind.lowered(kind.min_priority()).is_err());
        }
        assert_eq!(ShipmentKind::Fragile.lowered(3).unwrap(), 2);
        assert_eq!(ShipmentKind::Standard.raised(1).unwrap(), 2);
    }
}
