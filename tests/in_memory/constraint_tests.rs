//! Constraint tests for the in-memory delivery repository.
//!
//! Covers the (date, truck, recipient) uniqueness rule, engine-style id
//! assignment, and creation timestamps.

use crate::in_memory::helpers::{date, draft_for, repo, runtime};
use aguaruta::delivery::{
    adapters::memory::InMemoryDeliveryRepository,
    ports::{DeliveryRepository, DeliveryRepositoryError},
};
use chrono::Utc;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that a second record for the same (date, truck, recipient) is
/// rejected.
#[rstest]
fn duplicate_per_day_delivery_rejected(
    runtime: io::Result<Runtime>,
    repo: InMemoryDeliveryRepository,
) {
    let rt = runtime.expect("runtime creation");
    let day = date(2026, 3, 14);

    rt.block_on(repo.insert(&draft_for(day, "A5", "María Quilapán")))
        .expect("first insert");

    let result = rt.block_on(repo.insert(&draft_for(day, "A5", "María Quilapán")));
    assert!(
        matches!(
            result,
            Err(DeliveryRepositoryError::DuplicateDelivery { date: d, .. }) if d == day
        ),
        "expected DuplicateDelivery error, got: {result:?}"
    );
}

/// Tests that the uniqueness rule is scoped to the full triple.
#[rstest]
fn same_recipient_on_other_day_or_truck_accepted(
    runtime: io::Result<Runtime>,
    repo: InMemoryDeliveryRepository,
) {
    let rt = runtime.expect("runtime creation");
    let day = date(2026, 3, 14);

    rt.block_on(repo.insert(&draft_for(day, "A5", "María Quilapán")))
        .expect("baseline insert");

    rt.block_on(repo.insert(&draft_for(date(2026, 3, 15), "A5", "María Quilapán")))
        .expect("same truck and recipient on another day");

    rt.block_on(repo.insert(&draft_for(day, "B2", "María Quilapán")))
        .expect("another truck to the same recipient on the same day");
}

/// Tests that identifiers are assigned strictly increasing.
#[rstest]
fn ids_are_assigned_strictly_increasing(
    runtime: io::Result<Runtime>,
    repo: InMemoryDeliveryRepository,
) {
    let rt = runtime.expect("runtime creation");
    let day = date(2026, 3, 14);

    let first = rt
        .block_on(repo.insert(&draft_for(day, "A5", "María Quilapán")))
        .expect("first insert");
    let second = rt
        .block_on(repo.insert(&draft_for(day, "A5", "Juan Painefil")))
        .expect("second insert");
    let third = rt
        .block_on(repo.insert(&draft_for(day, "B2", "Rosa Curinao")))
        .expect("third insert");

    assert!(first.id() < second.id());
    assert!(second.id() < third.id());
}

/// Tests that `creado_en` is stamped at insertion time.
#[rstest]
fn creation_timestamp_is_populated(
    runtime: io::Result<Runtime>,
    repo: InMemoryDeliveryRepository,
) {
    let rt = runtime.expect("runtime creation");
    let before = Utc::now();

    let record = rt
        .block_on(repo.insert(&draft_for(date(2026, 3, 14), "A5", "María Quilapán")))
        .expect("insert");

    let after = Utc::now();
    assert!(record.recorded_at() >= before);
    assert!(record.recorded_at() <= after);
}
