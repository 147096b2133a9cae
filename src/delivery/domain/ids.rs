//! Identifier types for the delivery domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted delivery record.
///
/// Identifiers are assigned by the database sequence on insert and are
/// immutable afterwards; the domain never mints one itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryId(i32);

impl DeliveryId {
    /// Wraps a raw identifier read from persistence.
    #[must_use]
    pub const fn from_raw(id: i32) -> Self {
        Self(id)
    }

    /// Returns the wrapped identifier.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
