//! CRUD round-trip tests for the `PostgreSQL` delivery repository.

use crate::postgres::helpers::{
    CleanupGuard, PostgresCluster, date, decimal, draft_for, postgres_cluster, setup_repository,
    test_runtime,
};
use aguaruta::delivery::{
    domain::{
        Coordinates, DeliveryDraft, DeliveryQuery, DeliveryStatus, LitersDelivered,
        RecipientName, TruckId,
    },
    ports::{DeliveryRepository, DeliveryRepositoryError},
};
use rstest::rstest;

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn full_record_round_trips_through_storage(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_round_trip_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let repo = setup_repository(cluster, &db_name).expect("repository setup");

    let draft = DeliveryDraft::new(
        date(2026, 3, 14),
        TruckId::new("A5").expect("valid truck"),
        RecipientName::new("María Quilapán").expect("valid recipient"),
        DeliveryStatus::Delivered,
    )
    .with_liters(LitersDelivered::new(decimal("1500.50")).expect("valid liters"))
    .with_phone("+56 9 1234 5678")
    .with_coordinates(
        Coordinates::new(decimal("-38.739655"), decimal("-72.598422")).expect("valid coords"),
    )
    .with_photo_url("https://photos.example/entrega.jpg")
    .with_recorded_by("conductor_a5");

    let rt = test_runtime().expect("tokio runtime");
    let created = rt.block_on(repo.insert(&draft)).expect("insert");

    let found = rt
        .block_on(repo.find_by_id(created.id()))
        .expect("lookup")
        .expect("record exists");

    assert_eq!(found, created);
    assert_eq!(
        found.liters().map(|liters| liters.as_decimal().clone()),
        Some(decimal("1500.50"))
    );
    assert_eq!(
        found
            .coordinates()
            .map(|coordinates| coordinates.latitude().clone()),
        Some(decimal("-38.739655"))
    );
    assert_eq!(found.phone(), Some("+56 9 1234 5678"));
    assert_eq!(found.recorded_by(), Some("conductor_a5"));

    drop(repo);
    guard.cleanup().expect("cleanup database");
}

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn update_amends_outcome_but_not_creation_timestamp(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_update_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let repo = setup_repository(cluster, &db_name).expect("repository setup");

    let rt = test_runtime().expect("tokio runtime");
    let mut record = rt
        .block_on(repo.insert(&draft_for(date(2026, 3, 14), "A5", "María Quilapán")))
        .expect("insert");

    record.update_outcome(DeliveryStatus::NotDelivered, Some("pozo seco".to_owned()));
    rt.block_on(repo.update(&record)).expect("update");

    let found = rt
        .block_on(repo.find_by_id(record.id()))
        .expect("lookup")
        .expect("record exists");
    assert_eq!(found.status(), DeliveryStatus::NotDelivered);
    assert_eq!(found.reason(), Some("pozo seco"));
    assert_eq!(
        found.recorded_at(),
        record.recorded_at(),
        "creado_en is never rewritten"
    );

    drop(repo);
    guard.cleanup().expect("cleanup database");
}

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn delete_removes_the_record(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_delete_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let repo = setup_repository(cluster, &db_name).expect("repository setup");

    let rt = test_runtime().expect("tokio runtime");
    let record = rt
        .block_on(repo.insert(&draft_for(date(2026, 3, 14), "A5", "María Quilapán")))
        .expect("insert");

    rt.block_on(repo.delete(record.id())).expect("delete");
    assert_eq!(
        rt.block_on(repo.find_by_id(record.id())).expect("lookup"),
        None
    );

    let result = rt.block_on(repo.delete(record.id()));
    assert!(matches!(
        result,
        Err(DeliveryRepositoryError::NotFound(_))
    ));

    drop(repo);
    guard.cleanup().expect("cleanup database");
}

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn range_search_filters_and_orders(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_search_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let repo = setup_repository(cluster, &db_name).expect("repository setup");

    let rt = test_runtime().expect("tokio runtime");
    rt.block_on(repo.insert(&draft_for(date(2026, 3, 10), "A5", "María Quilapán")))
        .expect("insert");
    rt.block_on(repo.insert(&draft_for(date(2026, 3, 12), "B2", "Juan Painefil")))
        .expect("insert");
    rt.block_on(repo.insert(&draft_for(date(2026, 3, 20), "A5", "Rosa Curinao")))
        .expect("outside range insert");

    let query = DeliveryQuery::between(date(2026, 3, 9), date(2026, 3, 15))
        .expect("valid range")
        .recipient_contains("painefil");
    let results = rt.block_on(repo.search(&query)).expect("search");

    assert_eq!(results.len(), 1);
    assert_eq!(
        results.first().map(|record| record.recipient().as_str()),
        Some("Juan Painefil")
    );

    drop(repo);
    guard.cleanup().expect("cleanup database");
}
