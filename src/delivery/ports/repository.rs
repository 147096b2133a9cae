//! Repository port for delivery record persistence.

use crate::delivery::domain::{
    DeliveryDraft, DeliveryId, DeliveryQuery, DeliveryRecord, RecipientName, TruckId,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for delivery repository operations.
pub type DeliveryRepositoryResult<T> = Result<T, DeliveryRepositoryError>;

/// Delivery record persistence contract.
///
/// Implementations expose the table's native operations and its constraint
/// checking: the (date, truck, recipient) uniqueness rule is enforced on
/// both insert and update.
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Persists a draft and returns the full record, including the
    /// engine-assigned identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRepositoryError::DuplicateDelivery`] when a record
    /// with the same (date, truck, recipient) already exists.
    async fn insert(&self, draft: &DeliveryDraft) -> DeliveryRepositoryResult<DeliveryRecord>;

    /// Finds a delivery record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(
        &self,
        id: DeliveryId,
    ) -> DeliveryRepositoryResult<Option<DeliveryRecord>>;

    /// Returns all deliveries on a calendar date, ordered by truck then
    /// recipient.
    async fn list_on_date(
        &self,
        date: NaiveDate,
    ) -> DeliveryRepositoryResult<Vec<DeliveryRecord>>;

    /// Returns one truck's deliveries on a calendar date, ordered by
    /// recipient.
    async fn list_for_truck(
        &self,
        truck: &TruckId,
        date: NaiveDate,
    ) -> DeliveryRepositoryResult<Vec<DeliveryRecord>>;

    /// Returns deliveries matching a date-range query, newest first (date,
    /// then identifier, both descending).
    async fn search(&self, query: &DeliveryQuery) -> DeliveryRepositoryResult<Vec<DeliveryRecord>>;

    /// Persists changes to an existing record.
    ///
    /// Every column except the identifier and the creation timestamp is
    /// rewritten from the given record.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRepositoryError::NotFound`] when the record does
    /// not exist, or [`DeliveryRepositoryError::DuplicateDelivery`] when the
    /// updated (date, truck, recipient) collides with another record.
    async fn update(&self, record: &DeliveryRecord) -> DeliveryRepositoryResult<()>;

    /// Deletes a delivery record.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRepositoryError::NotFound`] when the record does
    /// not exist.
    async fn delete(&self, id: DeliveryId) -> DeliveryRepositoryResult<()>;
}

/// Errors returned by delivery repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DeliveryRepositoryError {
    /// A record with the same (date, truck, recipient) already exists.
    #[error("duplicate delivery for truck {truck} to {recipient} on {date}")]
    DuplicateDelivery {
        /// Delivery date of the conflicting record.
        date: NaiveDate,
        /// Truck code of the conflicting record.
        truck: TruckId,
        /// Recipient of the conflicting record.
        recipient: RecipientName,
    },

    /// The delivery record was not found.
    #[error("delivery record not found: {0}")]
    NotFound(DeliveryId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeliveryRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
