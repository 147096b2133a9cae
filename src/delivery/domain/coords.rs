//! Geographic position of a delivery point.

use super::DeliveryDomainError;
use bigdecimal::BigDecimal;
use bigdecimal::rounding::RoundingMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale of the `latitud`/`longitud` columns.
const COORDINATE_SCALE: i64 = 6;

/// Validated latitude/longitude pair for a delivery point.
///
/// The schema stores the pair in two nullable `NUMERIC(9,6)` columns; the
/// domain treats them as one optional value so a record either has a full
/// position or none at all. Values are normalized to six fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: BigDecimal,
    longitude: BigDecimal,
}

impl Coordinates {
    /// Creates a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::LatitudeOutOfRange`] when the latitude
    /// is outside [-90, 90] or [`DeliveryDomainError::LongitudeOutOfRange`]
    /// when the longitude is outside [-180, 180].
    pub fn new(latitude: BigDecimal, longitude: BigDecimal) -> Result<Self, DeliveryDomainError> {
        if latitude < BigDecimal::from(-90) || latitude > BigDecimal::from(90) {
            return Err(DeliveryDomainError::LatitudeOutOfRange(latitude));
        }

        if longitude < BigDecimal::from(-180) || longitude > BigDecimal::from(180) {
            return Err(DeliveryDomainError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude: latitude.with_scale_round(COORDINATE_SCALE, RoundingMode::HalfUp),
            longitude: longitude.with_scale_round(COORDINATE_SCALE, RoundingMode::HalfUp),
        })
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> &BigDecimal {
        &self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> &BigDecimal {
        &self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
