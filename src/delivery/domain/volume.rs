//! Delivered water volume.

use super::DeliveryDomainError;
use bigdecimal::BigDecimal;
use bigdecimal::rounding::RoundingMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound implied by the `NUMERIC(10,2)` column: eight integer digits.
const MAX_LITERS: i64 = 100_000_000;

/// Scale of the `litros` column.
const LITERS_SCALE: i64 = 2;

/// Validated volume of water delivered, in liters.
///
/// The value is positive and normalized to two fractional digits, matching
/// the `NUMERIC(10,2)` column it is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LitersDelivered(BigDecimal);

impl LitersDelivered {
    /// Creates a validated liters value, rounding to two fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::NonPositiveLiters`] when the value is
    /// zero or negative, or [`DeliveryDomainError::LitersOutOfRange`] when it
    /// does not fit the storage column.
    pub fn new(liters: BigDecimal) -> Result<Self, DeliveryDomainError> {
        let rounded = liters.with_scale_round(LITERS_SCALE, RoundingMode::HalfUp);

        if rounded <= BigDecimal::from(0) {
            return Err(DeliveryDomainError::NonPositiveLiters(liters));
        }

        if rounded >= BigDecimal::from(MAX_LITERS) {
            return Err(DeliveryDomainError::LitersOutOfRange(liters));
        }

        Ok(Self(rounded))
    }

    /// Returns the volume as a decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl fmt::Display for LitersDelivered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} L", self.0)
    }
}
