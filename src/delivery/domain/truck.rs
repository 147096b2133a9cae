//! Validated truck identifier type.

use super::DeliveryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a truck code, matching the `VARCHAR(10)` column.
const MAX_TRUCK_ID_LENGTH: usize = 10;

/// Validated, uppercased short code identifying a delivery vehicle.
///
/// Truck codes are the fleet labels painted on the vehicles (e.g. `A1`,
/// `A5`, `B2-R`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruckId(String);

impl TruckId {
    /// Creates a validated truck identifier.
    ///
    /// The input is trimmed and uppercased. Only characters in `[A-Z0-9-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::EmptyTruckId`] when the value is empty
    /// after trimming, [`DeliveryDomainError::InvalidTruckId`] when it
    /// contains characters outside `[A-Z0-9-]`, or
    /// [`DeliveryDomainError::TruckIdTooLong`] when it exceeds 10
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DeliveryDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(DeliveryDomainError::EmptyTruckId);
        }

        if normalized.len() > MAX_TRUCK_ID_LENGTH {
            return Err(DeliveryDomainError::TruckIdTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-');

        if !is_valid {
            return Err(DeliveryDomainError::InvalidTruckId(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the truck code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TruckId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
