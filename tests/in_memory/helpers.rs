//! Shared test helpers for in-memory repository integration tests.

use aguaruta::delivery::{
    adapters::memory::InMemoryDeliveryRepository,
    domain::{DeliveryDraft, DeliveryStatus, LitersDelivered, RecipientName, TruckId},
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryDeliveryRepository {
    InMemoryDeliveryRepository::new()
}

/// Builds a calendar date, panicking on invalid components.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Parses a decimal literal.
pub fn decimal(value: &str) -> BigDecimal {
    value.parse().expect("valid decimal")
}

/// Builds a delivered-water draft for the given day, truck, and recipient.
pub fn draft_for(day: NaiveDate, truck: &str, recipient: &str) -> DeliveryDraft {
    DeliveryDraft::new(
        day,
        TruckId::new(truck).expect("valid truck"),
        RecipientName::new(recipient).expect("valid recipient"),
        DeliveryStatus::Delivered,
    )
    .with_liters(LitersDelivered::new(decimal("1000")).expect("valid liters"))
}

/// Builds a failed-delivery draft with the given reason.
pub fn failed_draft_for(day: NaiveDate, truck: &str, recipient: &str, why: &str) -> DeliveryDraft {
    DeliveryDraft::new(
        day,
        TruckId::new(truck).expect("valid truck"),
        RecipientName::new(recipient).expect("valid recipient"),
        DeliveryStatus::NotDelivered,
    )
    .with_reason(why)
}
