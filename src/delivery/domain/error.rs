//! Error types for delivery domain validation and parsing.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing delivery domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryDomainError {
    /// The truck code is empty after trimming.
    #[error("truck code must not be empty")]
    EmptyTruckId,

    /// The truck code contains characters outside `[A-Z0-9-]`.
    #[error(
        "truck code '{0}' contains invalid characters (only alphanumeric and dashes allowed)"
    )]
    InvalidTruckId(String),

    /// The truck code exceeds the 10-character storage limit.
    #[error("truck code exceeds 10 character limit: {0}")]
    TruckIdTooLong(String),

    /// The recipient name is empty after trimming.
    #[error("recipient name must not be empty")]
    EmptyRecipientName,

    /// The delivered volume is zero or negative.
    #[error("delivered liters must be positive, got {0}")]
    NonPositiveLiters(BigDecimal),

    /// The delivered volume does not fit the `NUMERIC(10,2)` column.
    #[error("delivered liters exceed the storage column: {0}")]
    LitersOutOfRange(BigDecimal),

    /// The latitude is outside [-90, 90].
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(BigDecimal),

    /// The longitude is outside [-180, 180].
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(BigDecimal),

    /// A query's start date is after its end date.
    #[error("query start {from} is after end {to}")]
    InvalidDateRange {
        /// Start of the requested range.
        from: NaiveDate,
        /// End of the requested range.
        to: NaiveDate,
    },
}

/// Error returned while parsing a delivery status code from persistence.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unknown delivery status code: {0}")]
pub struct ParseDeliveryStatusError(pub i16);
