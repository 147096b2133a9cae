//! Filtered listing criteria for delivery records.

use super::{DeliveryDomainError, DeliveryStatus, TruckId};
use chrono::NaiveDate;

/// Date-range query over delivery records with optional filters.
///
/// Mirrors the listing surface external applications use against the table:
/// an inclusive date range narrowed by truck, status, or a case-insensitive
/// recipient-name fragment. Results are ordered newest first (date, then id,
/// both descending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryQuery {
    from: NaiveDate,
    to: NaiveDate,
    truck: Option<TruckId>,
    status: Option<DeliveryStatus>,
    recipient_fragment: Option<String>,
}

impl DeliveryQuery {
    /// Creates a query over the inclusive date range `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::InvalidDateRange`] when `from` is
    /// after `to`.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Result<Self, DeliveryDomainError> {
        if from > to {
            return Err(DeliveryDomainError::InvalidDateRange { from, to });
        }

        Ok(Self {
            from,
            to,
            truck: None,
            status: None,
            recipient_fragment: None,
        })
    }

    /// Restricts the query to a single truck.
    #[must_use]
    pub fn for_truck(mut self, truck: TruckId) -> Self {
        self.truck = Some(truck);
        self
    }

    /// Restricts the query to a single delivery status.
    #[must_use]
    pub const fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the query to recipients whose name contains the fragment,
    /// case-insensitively.
    #[must_use]
    pub fn recipient_contains(mut self, fragment: impl Into<String>) -> Self {
        self.recipient_fragment = Some(fragment.into());
        self
    }

    /// Returns the inclusive start of the range.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Returns the inclusive end of the range.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    /// Returns the truck filter, if any.
    #[must_use]
    pub const fn truck(&self) -> Option<&TruckId> {
        self.truck.as_ref()
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<DeliveryStatus> {
        self.status
    }

    /// Returns the recipient-name fragment filter, if any.
    #[must_use]
    pub fn recipient_fragment(&self) -> Option<&str> {
        self.recipient_fragment.as_deref()
    }
}
