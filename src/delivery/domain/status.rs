//! Delivery outcome status.

use super::ParseDeliveryStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a delivery attempt.
///
/// Stored as a `SMALLINT` code in the `estado` column. The `motivo` column
/// normally explains a [`DeliveryStatus::NotDelivered`] outcome, though the
/// schema does not require it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Water was handed over at the delivery point.
    Delivered,
    /// The attempt failed (absent recipient, blocked road, broken pump).
    NotDelivered,
    /// The delivery was pushed to a later route day.
    Rescheduled,
}

impl DeliveryStatus {
    /// Returns the canonical storage code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Delivered => 1,
            Self::NotDelivered => 2,
            Self::Rescheduled => 3,
        }
    }

    /// Returns `true` for outcomes where no water reached the recipient.
    #[must_use]
    pub const fn is_undelivered(self) -> bool {
        matches!(self, Self::NotDelivered)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::NotDelivered => "not_delivered",
            Self::Rescheduled => "rescheduled",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i16> for DeliveryStatus {
    type Error = ParseDeliveryStatusError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Delivered),
            2 => Ok(Self::NotDelivered),
            3 => Ok(Self::Rescheduled),
            other => Err(ParseDeliveryStatusError(other)),
        }
    }
}
