//! Idempotent schema setup for the `entregas` table.

use super::repository::DeliveryPgPool;
use crate::delivery::ports::{DeliveryRepositoryError, DeliveryRepositoryResult};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

/// Guarded DDL for the delivery log schema.
///
/// Every statement carries an `IF NOT EXISTS` guard, so re-running the
/// script against a database that already has the table and indexes is a
/// no-op and leaves existing rows untouched.
pub const SETUP_SQL: &str = "\
CREATE TABLE IF NOT EXISTS entregas (
    id SERIAL PRIMARY KEY,
    fecha DATE NOT NULL,
    camion VARCHAR(10) NOT NULL,
    nombre TEXT NOT NULL,
    litros NUMERIC(10,2),
    estado SMALLINT NOT NULL,
    motivo TEXT,
    telefono TEXT,
    latitud NUMERIC(9,6),
    longitud NUMERIC(9,6),
    foto_url TEXT,
    usuario TEXT,
    creado_en TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_entregas_fecha_camion_nombre UNIQUE (fecha, camion, nombre)
);

CREATE INDEX IF NOT EXISTS idx_entregas_fecha ON entregas (fecha);

CREATE INDEX IF NOT EXISTS idx_entregas_camion_fecha ON entregas (camion, fecha);
";

/// Name of the (fecha, camion, nombre) uniqueness constraint.
pub(super) const UNIQUE_DELIVERY_CONSTRAINT: &str = "uq_entregas_fecha_camion_nombre";

/// Applies the delivery log schema to the connected database.
///
/// # Errors
///
/// Returns the Diesel error when any statement fails.
pub fn apply_schema(connection: &mut PgConnection) -> diesel::QueryResult<()> {
    connection.batch_execute(SETUP_SQL)
}

/// Applies the delivery log schema through a connection pool.
///
/// # Errors
///
/// Returns [`DeliveryRepositoryError::Persistence`] when the pool or the
/// DDL statements fail.
pub async fn ensure_schema(pool: &DeliveryPgPool) -> DeliveryRepositoryResult<()> {
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = owned_pool
            .get()
            .map_err(DeliveryRepositoryError::persistence)?;
        apply_schema(&mut connection).map_err(DeliveryRepositoryError::persistence)
    })
    .await
    .map_err(DeliveryRepositoryError::persistence)?
}
