//! In-memory repository for delivery record tests and light embedding.

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::delivery::{
    domain::{
        DeliveryDraft, DeliveryId, DeliveryQuery, DeliveryRecord, PersistedDeliveryData,
        RecipientName, TruckId,
    },
    ports::{DeliveryRepository, DeliveryRepositoryError, DeliveryRepositoryResult},
};

/// Thread-safe in-memory delivery repository.
///
/// Mirrors the table's engine-enforced behavior: identifiers are assigned
/// from a strictly increasing counter, `creado_en` is stamped at insertion,
/// and the (date, truck, recipient) uniqueness rule is checked on insert and
/// update.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeliveryRepository {
    state: Arc<RwLock<InMemoryDeliveryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDeliveryState {
    next_id: i32,
    records: HashMap<DeliveryId, DeliveryRecord>,
    unique_index: HashMap<DeliveryKey, DeliveryId>,
}

/// Uniqueness key of the `entregas` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DeliveryKey {
    date: NaiveDate,
    truck: TruckId,
    recipient: RecipientName,
}

impl DeliveryKey {
    fn of_draft(draft: &DeliveryDraft) -> Self {
        Self {
            date: draft.delivery_date(),
            truck: draft.truck().clone(),
            recipient: draft.recipient().clone(),
        }
    }

    fn of_record(record: &DeliveryRecord) -> Self {
        Self {
            date: record.delivery_date(),
            truck: record.truck().clone(),
            recipient: record.recipient().clone(),
        }
    }
}

impl InMemoryDeliveryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn duplicate_error(key: &DeliveryKey) -> DeliveryRepositoryError {
        DeliveryRepositoryError::DuplicateDelivery {
            date: key.date,
            truck: key.truck.clone(),
            recipient: key.recipient.clone(),
        }
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryDeliveryRepository {
    async fn insert(&self, draft: &DeliveryDraft) -> DeliveryRepositoryResult<DeliveryRecord> {
        let mut state = self.state.write().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let key = DeliveryKey::of_draft(draft);
        if state.unique_index.contains_key(&key) {
            return Err(Self::duplicate_error(&key));
        }

        state.next_id += 1;
        let id = DeliveryId::from_raw(state.next_id);
        let record = DeliveryRecord::from_persisted(PersistedDeliveryData {
            id,
            delivery_date: draft.delivery_date(),
            truck: draft.truck().clone(),
            recipient: draft.recipient().clone(),
            status: draft.status(),
            liters: draft.liters().cloned(),
            reason: draft.reason().map(str::to_owned),
            phone: draft.phone().map(str::to_owned),
            coordinates: draft.coordinates().cloned(),
            photo_url: draft.photo_url().map(str::to_owned),
            recorded_by: draft.recorded_by().map(str::to_owned),
            recorded_at: DefaultClock.utc(),
        });

        state.unique_index.insert(key, id);
        state.records.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: DeliveryId,
    ) -> DeliveryRepositoryResult<Option<DeliveryRecord>> {
        let state = self.state.read().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        Ok(state.records.get(&id).cloned())
    }

    async fn list_on_date(
        &self,
        date: NaiveDate,
    ) -> DeliveryRepositoryResult<Vec<DeliveryRecord>> {
        let state = self.state.read().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let mut matches: Vec<DeliveryRecord> = state
            .records
            .values()
            .filter(|record| record.delivery_date() == date)
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            a.truck()
                .as_str()
                .cmp(b.truck().as_str())
                .then_with(|| a.recipient().as_str().cmp(b.recipient().as_str()))
        });
        Ok(matches)
    }

    async fn list_for_truck(
        &self,
        truck: &TruckId,
        date: NaiveDate,
    ) -> DeliveryRepositoryResult<Vec<DeliveryRecord>> {
        let state = self.state.read().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let mut matches: Vec<DeliveryRecord> = state
            .records
            .values()
            .filter(|record| record.delivery_date() == date && record.truck() == truck)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.recipient().as_str().cmp(b.recipient().as_str()));
        Ok(matches)
    }

    async fn search(&self, query: &DeliveryQuery) -> DeliveryRepositoryResult<Vec<DeliveryRecord>> {
        let state = self.state.read().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let fragment = query
            .recipient_fragment()
            .map(str::to_lowercase);

        let mut matches: Vec<DeliveryRecord> = state
            .records
            .values()
            .filter(|record| {
                record.delivery_date() >= query.from() && record.delivery_date() <= query.to()
            })
            .filter(|record| query.truck().is_none_or(|truck| record.truck() == truck))
            .filter(|record| {
                query
                    .status()
                    .is_none_or(|status| record.status() == status)
            })
            .filter(|record| {
                fragment.as_deref().is_none_or(|needle| {
                    record.recipient().as_str().to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.delivery_date()
                .cmp(&a.delivery_date())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(matches)
    }

    async fn update(&self, record: &DeliveryRecord) -> DeliveryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_key = DeliveryKey::of_record(
            state
                .records
                .get(&record.id())
                .ok_or(DeliveryRepositoryError::NotFound(record.id()))?,
        );

        let new_key = DeliveryKey::of_record(record);
        if new_key != old_key {
            if let Some(&indexed_id) = state.unique_index.get(&new_key)
                && indexed_id != record.id()
            {
                return Err(Self::duplicate_error(&new_key));
            }
            state.unique_index.remove(&old_key);
            state.unique_index.insert(new_key, record.id());
        }

        state.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: DeliveryId) -> DeliveryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DeliveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .records
            .remove(&id)
            .ok_or(DeliveryRepositoryError::NotFound(id))?;
        state.unique_index.remove(&DeliveryKey::of_record(&removed));
        Ok(())
    }
}
