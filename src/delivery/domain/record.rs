//! Delivery record aggregate and its unsaved draft form.

use super::{Coordinates, DeliveryId, DeliveryStatus, LitersDelivered, RecipientName, TruckId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A delivery event that has not been persisted yet.
///
/// Drafts carry everything the caller supplies; the engine assigns the
/// identifier and the `creado_en` timestamp on insert, so neither appears
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDraft {
    delivery_date: NaiveDate,
    truck: TruckId,
    recipient: RecipientName,
    status: DeliveryStatus,
    liters: Option<LitersDelivered>,
    reason: Option<String>,
    phone: Option<String>,
    coordinates: Option<Coordinates>,
    photo_url: Option<String>,
    recorded_by: Option<String>,
}

impl DeliveryDraft {
    /// Creates a draft with the four required fields.
    ///
    /// Optional fields default to `None` and are set with the `with_*`
    /// builder methods.
    #[must_use]
    pub const fn new(
        delivery_date: NaiveDate,
        truck: TruckId,
        recipient: RecipientName,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            delivery_date,
            truck,
            recipient,
            status,
            liters: None,
            reason: None,
            phone: None,
            coordinates: None,
            photo_url: None,
            recorded_by: None,
        }
    }

    /// Sets the delivered volume.
    #[must_use]
    pub fn with_liters(mut self, liters: LitersDelivered) -> Self {
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

    /// Sets the delivery point position.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
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

    /// Returns the delivery date.
    #[must_use]
    pub const fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    /// Returns the truck code.
    #[must_use]
    pub const fn truck(&self) -> &TruckId {
        &self.truck
    }

    /// Returns the recipient name.
    #[must_use]
    pub const fn recipient(&self) -> &RecipientName {
        &self.recipient
    }

    /// Returns the delivery outcome.
    #[must_use]
    pub const fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Returns the delivered volume, if recorded.
    #[must_use]
    pub const fn liters(&self) -> Option<&LitersDelivered> {
        self.liters.as_ref()
    }

    /// Returns the outcome reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the contact phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the delivery point position, if recorded.
    #[must_use]
    pub const fn coordinates(&self) -> Option<&Coordinates> {
        self.coordinates.as_ref()
    }

    /// Returns the proof-of-delivery photo reference, if any.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Returns the username of the recording actor, if any.
    #[must_use]
    pub fn recorded_by(&self) -> Option<&str> {
        self.recorded_by.as_deref()
    }
}

/// Parameter object for reconstructing a persisted delivery record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDeliveryData {
    /// Engine-assigned identifier.
    pub id: DeliveryId,
    /// Persisted delivery date.
    pub delivery_date: NaiveDate,
    /// Persisted truck code.
    pub truck: TruckId,
    /// Persisted recipient name.
    pub recipient: RecipientName,
    /// Persisted delivery outcome.
    pub status: DeliveryStatus,
    /// Persisted delivered volume.
    pub liters: Option<LitersDelivered>,
    /// Persisted outcome reason.
    pub reason: Option<String>,
    /// Persisted contact phone number.
    pub phone: Option<String>,
    /// Persisted delivery point position.
    pub coordinates: Option<Coordinates>,
    /// Persisted proof-of-delivery photo reference.
    pub photo_url: Option<String>,
    /// Persisted username of the recording actor.
    pub recorded_by: Option<String>,
    /// Engine-assigned creation timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// A persisted delivery record: one row of the `entregas` table.
///
/// The identifier and creation timestamp are engine-assigned and immutable;
/// the remaining fields may be amended by later corrections (a wrong outcome
/// fixed at the depot, a photo uploaded after the route).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    id: DeliveryId,
    delivery_date: NaiveDate,
    truck: TruckId,
    recipient: RecipientName,
    status: DeliveryStatus,
    liters: Option<LitersDelivered>,
    reason: Option<String>,
    phone: Option<String>,
    coordinates: Option<Coordinates>,
    photo_url: Option<String>,
    recorded_by: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl DeliveryRecord {
    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDeliveryData) -> Self {
        Self {
            id: data.id,
            delivery_date: data.delivery_date,
            truck: data.truck,
            recipient: data.recipient,
            status: data.status,
            liters: data.liters,
            reason: data.reason,
            phone: data.phone,
            coordinates: data.coordinates,
            photo_url: data.photo_url,
            recorded_by: data.recorded_by,
            recorded_at: data.recorded_at,
        }
    }

    /// Returns the engine-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> DeliveryId {
        self.id
    }

    /// Returns the delivery date.
    #[must_use]
    pub const fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    /// Returns the truck code.
    #[must_use]
    pub const fn truck(&self) -> &TruckId {
        &self.truck
    }

    /// Returns the recipient name.
    #[must_use]
    pub const fn recipient(&self) -> &RecipientName {
        &self.recipient
    }

    /// Returns the delivery outcome.
    #[must_use]
    pub const fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Returns the delivered volume, if recorded.
    #[must_use]
    pub const fn liters(&self) -> Option<&LitersDelivered> {
        self.liters.as_ref()
    }

    /// Returns the outcome reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the contact phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the delivery point position, if recorded.
    #[must_use]
    pub const fn coordinates(&self) -> Option<&Coordinates> {
        self.coordinates.as_ref()
    }

    /// Returns the proof-of-delivery photo reference, if any.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Returns the username of the recording actor, if any.
    #[must_use]
    pub fn recorded_by(&self) -> Option<&str> {
        self.recorded_by.as_deref()
    }

    /// Returns the engine-assigned creation timestamp.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Replaces the delivery outcome and its accompanying reason.
    ///
    /// Passing `None` clears a previously recorded reason: an outcome and
    /// its explanation travel together.
    pub fn update_outcome(&mut self, status: DeliveryStatus, reason: Option<String>) {
        self.status = status;
        self.reason = reason;
    }

    /// Moves the delivery to another route day.
    ///
    /// The per-day uniqueness rule is re-checked by the repository when the
    /// change is persisted.
    pub fn reschedule_to(&mut self, new_date: NaiveDate) {
        self.delivery_date = new_date;
    }

    /// Attaches the proof-of-delivery photo reference.
    pub fn attach_photo(&mut self, url: impl Into<String>) {
        self.photo_url = Some(url.into());
    }
}
