//! Validated recipient name type.

use super::DeliveryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated name of the household head receiving a delivery.
///
/// Recipient names are free text (the `nombre` column is unbounded) but must
/// carry at least one non-whitespace character: the name is one third of the
/// per-day uniqueness key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientName(String);

impl RecipientName {
    /// Creates a validated recipient name. The input is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::EmptyRecipientName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DeliveryDomainError> {
        let trimmed = value.into().trim().to_owned();

        if trimmed.is_empty() {
            return Err(DeliveryDomainError::EmptyRecipientName);
        }

        Ok(Self(trimmed))
    }

    /// Returns the recipient name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecipientName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecipientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
