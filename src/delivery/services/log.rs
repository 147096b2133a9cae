//! Service layer for recording and consulting deliveries.
//!
//! Provides [`DeliveryLogService`] which validates raw input into domain
//! types and coordinates repository access for the record, lookup, amend,
//! and delete operations.

use crate::delivery::{
    domain::{
        Coordinates, DeliveryDomainError, DeliveryDraft, DeliveryId, DeliveryQuery,
        DeliveryRecord, DeliveryStatus, LitersDelivered, RecipientName, TruckId,
    },
    ports::{DeliveryRepository, DeliveryRepositoryError},
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for recording a delivery.
///
/// Carries raw caller input; validation into domain types happens when the
/// request is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDeliveryRequest {
    delivery_date: NaiveDate,
    truck: String,
    recipient: String,
    status: DeliveryStatus,
    liters: Option<BigDecimal>,
    reason: Option<String>,
    phone: Option<String>,
    coordinates: Option<(BigDecimal, BigDecimal)>,
    photo_url: Option<String>,
    recorded_by: Option<String>,
}

impl RecordDeliveryRequest {
    /// Creates a request with the four required fields.
    #[must_use]
    pub fn new(
        delivery_date: NaiveDate,
        truck: impl Into<String>,
        recipient: impl Into<String>,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            delivery_date,
            truck: truck.into(),
            recipient: recipient.into(),
            status,
            liters: None,
            reason: None,
            phone: None,
            coordinates: None,
            photo_url: None,
            recorded_by: None,
        }
    }

    /// Sets the delivered volume in liters.
    #[must_use]
    pub fn with_liters(mut self, liters: BigDecimal) -> Self {
        self.liters = Some(liters);
        self
    }

    /// Sets the reason accompanying the outcome.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the recipient's contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the delivery point position. Latitude and longitude travel as a
    /// pair; a record either has a full position or none.
    #[must_use]
    pub fn with_coordinates(mut self, latitude: BigDecimal, longitude: BigDecimal) -> Self {
        self.coordinates = Some((latitude, longitude));
        self
    }

    /// Sets the reference to the proof-of-delivery photo.
    #[must_use]
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Sets the username of the recording actor.
    #[must_use]
    pub fn with_recorded_by(mut self, user: impl Into<String>) -> Self {
        self.recorded_by = Some(user.into());
        self
    }
}

/// Service-level errors for delivery log operations.
#[derive(Debug, Error)]
pub enum DeliveryLogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DeliveryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DeliveryRepositoryError),
}

/// Result type for delivery log service operations.
pub type DeliveryLogServiceResult<T> = Result<T, DeliveryLogServiceError>;

/// Delivery recording and consultation service.
#[derive(Debug, Clone)]
pub struct DeliveryLogService<R>
where
    R: DeliveryRepository,
{
    repository: Arc<R>,
}

impl<R> DeliveryLogService<R>
where
    R: DeliveryRepository,
{
    /// Creates a new delivery log service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and persists a delivery record.
    ///
    /// Empty optional strings are treated as absent, matching how field
    /// crews leave blanks in the capture app.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryLogServiceError`] when input validation fails or
    /// the repository rejects persistence (including the per-day uniqueness
    /// rule).
    pub async fn record(
        &self,
        request: RecordDeliveryRequest,
    ) -> DeliveryLogServiceResult<DeliveryRecord> {
        let RecordDeliveryRequest {
            delivery_date,
            truck,
            recipient,
            status,
            liters,
            reason,
            phone,
            coordinates,
            photo_url,
            recorded_by,
        } = request;

        let truck_id = TruckId::new(truck)?;
        let recipient_name = RecipientName::new(recipient)?;

        let mut draft = DeliveryDraft::new(delivery_date, truck_id, recipient_name, status);
        if let Some(volume) = liters {
            draft = draft.with_liters(LitersDelivered::new(volume)?);
        }
        if let Some((latitude, longitude)) = coordinates {
            draft = draft.with_coordinates(Coordinates::new(latitude, longitude)?);
        }
        if let Some(text) = normalize_optional(reason) {
            draft = draft.with_reason(text);
        }
        if let Some(text) = normalize_optional(phone) {
            draft = draft.with_phone(text);
        }
        if let Some(text) = normalize_optional(photo_url) {
            draft = draft.with_photo_url(text);
        }
        if let Some(text) = normalize_optional(recorded_by) {
            draft = draft.with_recorded_by(text);
        }

        let record = self.repository.insert(&draft).await?;
        debug!(
            delivery_id = %record.id(),
            truck = %record.truck(),
            date = %record.delivery_date(),
            "recorded delivery"
        );
        Ok(record)
    }

    /// Finds a delivery record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryLogServiceError::Repository`] on persistence
    /// failure.
    pub async fn find(&self, id: DeliveryId) -> DeliveryLogServiceResult<Option<DeliveryRecord>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns all deliveries on a calendar date, ordered by truck then
    /// recipient.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryLogServiceError::Repository`] on persistence
    /// failure.
    pub async fn deliveries_on(
        &self,
        date: NaiveDate,
    ) -> DeliveryLogServiceResult<Vec<DeliveryRecord>> {
        Ok(self.repository.list_on_date(date).await?)
    }

    /// Returns one truck's deliveries on a calendar date, ordered by
    /// recipient.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryLogServiceError`] when the truck code is invalid
    /// or the repository fails.
    pub async fn truck_manifest(
        &self,
        truck: impl Into<String> + Send,
        date: NaiveDate,
    ) -> DeliveryLogServiceResult<Vec<DeliveryRecord>> {
        let truck_id = TruckId::new(truck)?;
        Ok(self.repository.list_for_truck(&truck_id, date).await?)
    }

    /// Returns deliveries matching a date-range query, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryLogServiceError::Repository`] on persistence
    /// failure.
    pub async fn search(
        &self,
        query: &DeliveryQuery,
    ) -> DeliveryLogServiceResult<Vec<DeliveryRecord>> {
        Ok(self.repository.search(query).await?)
    }

    /// Returns failed deliveries in the inclusive date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryLogServiceError`] when the range is inverted or
    /// the repository fails.
    pub async fn undelivered_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DeliveryLogServiceResult<Vec<DeliveryRecord>> {
        let query = DeliveryQuery::between(from, to)?.with_status(DeliveryStatus::NotDelivered);
        Ok(self.repository.search(&query).await?)
    }

    /// Replaces a record's outcome and reason.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRepositoryError::NotFound`] (wrapped) when the
    /// record does not exist, or a repository error when persistence fails.
    pub async fn amend_outcome(
        &self,
        id: DeliveryId,
        status: DeliveryStatus,
        reason: Option<String>,
    ) -> DeliveryLogServiceResult<DeliveryRecord> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DeliveryRepositoryError::NotFound(id))?;
        record.update_outcome(status, normalize_optional(reason));
        self.repository.update(&record).await?;
        debug!(delivery_id = %id, status = %status, "amended delivery outcome");
        Ok(record)
    }

    /// Attaches a proof-of-delivery photo reference to a record.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRepositoryError::NotFound`] (wrapped) when the
    /// record does not exist, or a repository error when persistence fails.
    pub async fn attach_photo(
        &self,
        id: DeliveryId,
        url: impl Into<String> + Send,
    ) -> DeliveryLogServiceResult<DeliveryRecord> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DeliveryRepositoryError::NotFound(id))?;
        record.attach_photo(url);
        self.repository.update(&record).await?;
        Ok(record)
    }

    /// Deletes a delivery record.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRepositoryError::NotFound`] (wrapped) when the
    /// record does not exist, or a repository error when persistence fails.
    pub async fn remove(&self, id: DeliveryId) -> DeliveryLogServiceResult<()> {
        self.repository.delete(id).await?;
        debug!(delivery_id = %id, "removed delivery record");
        Ok(())
    }
}

/// Treats empty-after-trim strings as absent values.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
