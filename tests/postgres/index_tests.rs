//! Index declaration and planner tests for the `entregas` schema.

use crate::postgres::helpers::{
    CleanupGuard, PostgresCluster, connect, postgres_cluster, setup_repository,
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use rstest::rstest;

#[derive(diesel::QueryableByName)]
struct NameRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
}

#[derive(diesel::QueryableByName)]
struct PlanRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    line: String,
}

/// Captures the text plan of a statement into rows, working around
/// `EXPLAIN` output not being directly selectable.
fn explain(conn: &mut PgConnection, statement: &str) -> String {
    let capture = format!(
        "CREATE TEMP TABLE plan_lines(line TEXT);\n\
         DO $$\n\
         DECLARE r record;\n\
         BEGIN\n\
             FOR r IN EXPLAIN {statement}\n\
             LOOP\n\
                 INSERT INTO plan_lines VALUES (r.\"QUERY PLAN\");\n\
             END LOOP;\n\
         END $$;"
    );
    conn.batch_execute(&capture).expect("plan capture");

    let lines = diesel::sql_query("SELECT line FROM plan_lines")
        .load::<PlanRow>(conn)
        .expect("plan rows");
    diesel::sql_query("DROP TABLE plan_lines")
        .execute(conn)
        .expect("plan cleanup");

    lines
        .into_iter()
        .map(|row| row.line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn declared_indexes_exist(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_indexes_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let _repo = setup_repository(cluster, &db_name).expect("repository setup");

    let mut conn = connect(cluster, &db_name).expect("direct connection");
    let indexes = diesel::sql_query(
        "SELECT indexname AS name FROM pg_indexes WHERE tablename = 'entregas'",
    )
    .load::<NameRow>(&mut conn)
    .expect("index listing");

    let names: Vec<&str> = indexes.iter().map(|row| row.name.as_str()).collect();
    assert!(names.contains(&"idx_entregas_fecha"), "date index declared");
    assert!(
        names.contains(&"idx_entregas_camion_fecha"),
        "truck/date index declared"
    );
    assert!(
        names.contains(&"uq_entregas_fecha_camion_nombre"),
        "uniqueness constraint backs an index"
    );

    drop(conn);
    guard.cleanup().expect("cleanup database");
}

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn date_filter_can_use_the_declared_index(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_plan_fecha_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let _repo = setup_repository(cluster, &db_name).expect("repository setup");

    let mut conn = connect(cluster, &db_name).expect("direct connection");
    diesel::sql_query("SET enable_seqscan = off")
        .execute(&mut conn)
        .expect("planner setting");

    let plan = explain(
        &mut conn,
        "SELECT * FROM entregas WHERE fecha = DATE '2026-03-14'",
    );
    assert!(
        plan.contains("idx_entregas_fecha"),
        "expected the date index in the plan:\n{plan}"
    );

    drop(conn);
    guard.cleanup().expect("cleanup database");
}

#[rstest]
#[ignore = "provisions an embedded PostgreSQL server"]
fn truck_and_date_filter_can_use_the_declared_index(postgres_cluster: PostgresCluster) {
    let cluster = postgres_cluster;
    let db_name = format!("test_plan_camion_{}", uuid::Uuid::new_v4().simple());
    let guard = CleanupGuard::new(cluster, db_name.clone());
    let _repo = setup_repository(cluster, &db_name).expect("repository setup");

    let mut conn = connect(cluster, &db_name).expect("direct connection");
    diesel::sql_query("SET enable_seqscan = off")
        .execute(&mut conn)
        .expect("planner setting");

    let plan = explain(
        &mut conn,
        "SELECT * FROM entregas WHERE camion = 'A5' AND fecha = DATE '2026-03-14'",
    );
    assert!(
        plan.contains("idx_entregas_camion_fecha"),
        "expected the truck/date index in the plan:\n{plan}"
    );

    drop(conn);
    guard.cleanup().expect("cleanup database");
}
