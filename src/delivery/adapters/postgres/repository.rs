//! `PostgreSQL` repository implementation for delivery records.

use super::{
    models::{DeliveryRow, NewDeliveryRow},
    schema::entregas,
    setup::UNIQUE_DELIVERY_CONSTRAINT,
};
use crate::delivery::{
    domain::{
        Coordinates, DeliveryDraft, DeliveryId, DeliveryQuery, DeliveryRecord, DeliveryStatus,
        LitersDelivered, PersistedDeliveryData, RecipientName, TruckId,
    },
    ports::{DeliveryRepository, DeliveryRepositoryError, DeliveryRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// A stored row carries only one half of the latitud/longitud pair.
#[derive(Debug, Clone, Error)]
#[error("coordinate pair is half-set: latitud {latitud:?}, longitud {longitud:?}")]
struct HalfSetCoordinates {
    latitud: Option<bigdecimal::BigDecimal>,
    longitud: Option<bigdecimal::BigDecimal>,
}

/// `PostgreSQL` connection pool type used by delivery adapters.
pub type DeliveryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed delivery repository.
#[derive(Debug, Clone)]
pub struct PostgresDeliveryRepository {
    pool: DeliveryPgPool,
}

impl PostgresDeliveryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DeliveryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DeliveryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DeliveryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DeliveryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DeliveryRepositoryError::persistence)?
    }
}

#[async_trait]
impl DeliveryRepository for PostgresDeliveryRepository {
    async fn insert(&self, draft: &DeliveryDraft) -> DeliveryRepositoryResult<DeliveryRecord> {
        let date = draft.delivery_date();
        let truck = draft.truck().clone();
        let recipient = draft.recipient().clone();
        let new_row = to_new_row(draft);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(entregas::table)
                .values(&new_row)
                .returning(DeliveryRow::as_returning())
                .get_result::<DeliveryRow>(connection)
                .map_err(|err| {
                    map_unique_violation(err, date, truck.clone(), recipient.clone())
                })?;
            row_to_record(row)
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: DeliveryId,
    ) -> DeliveryRepositoryResult<Option<DeliveryRecord>> {
        self.run_blocking(move |connection| {
            let row = entregas::table
                .find(id.into_inner())
                .select(DeliveryRow::as_select())
                .first::<DeliveryRow>(connection)
                .optional()
                .map_err(DeliveryRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn list_on_date(
        &self,
        date: NaiveDate,
    ) -> DeliveryRepositoryResult<Vec<DeliveryRecord>> {
        self.run_blocking(move |connection| {
            let rows = entregas::table
                .filter(entregas::fecha.eq(date))
                .order((entregas::camion.asc(), entregas::nombre.asc()))
                .select(DeliveryRow::as_select())
                .load::<DeliveryRow>(connection)
                .map_err(DeliveryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn list_for_truck(
        &self,
        truck: &TruckId,
        date: NaiveDate,
    ) -> DeliveryRepositoryResult<Vec<DeliveryRecord>> {
        let truck_code = truck.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = entregas::table
                .filter(entregas::camion.eq(&truck_code))
                .filter(entregas::fecha.eq(date))
                .order(entregas::nombre.asc())
                .select(DeliveryRow::as_select())
                .load::<DeliveryRow>(connection)
                .map_err(DeliveryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn search(&self, query: &DeliveryQuery) -> DeliveryRepositoryResult<Vec<DeliveryRecord>> {
        let from = query.from();
        let to = query.to();
        let truck_code = query.truck().map(|truck| truck.as_str().to_owned());
        let status_code = query.status().map(DeliveryStatus::code);
        let fragment = query.recipient_fragment().map(str::to_owned);

        self.run_blocking(move |connection| {
            let mut statement = entregas::table
                .filter(entregas::fecha.between(from, to))
                .into_boxed();

            if let Some(code) = truck_code {
                statement = statement.filter(entregas::camion.eq(code));
            }
            if let Some(code) = status_code {
                statement = statement.filter(entregas::estado.eq(code));
            }
            if let Some(needle) = fragment {
                statement = statement.filter(entregas::nombre.ilike(format!("%{needle}%")));
            }

            let rows = statement
                .order((entregas::fecha.desc(), entregas::id.desc()))
                .select(DeliveryRow::as_select())
                .load::<DeliveryRow>(connection)
                .map_err(DeliveryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn update(&self, record: &DeliveryRecord) -> DeliveryRepositoryResult<()> {
        let id = record.id();
        let date = record.delivery_date();
        let truck = record.truck().clone();
        let recipient = record.recipient().clone();
        let changed_row = to_new_row_of_record(record);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(entregas::table.find(id.into_inner()))
                .set((
                    entregas::fecha.eq(changed_row.fecha),
                    entregas::camion.eq(changed_row.camion),
                    entregas::nombre.eq(changed_row.nombre),
                    entregas::litros.eq(changed_row.litros),
                    entregas::estado.eq(changed_row.estado),
                    entregas::motivo.eq(changed_row.motivo),
                    entregas::telefono.eq(changed_row.telefono),
                    entregas::latitud.eq(changed_row.latitud),
                    entregas::longitud.eq(changed_row.longitud),
                    entregas::foto_url.eq(changed_row.foto_url),
                    entregas::usuario.eq(changed_row.usuario),
                ))
                .execute(connection)
                .map_err(|err| {
                    map_unique_violation(err, date, truck.clone(), recipient.clone())
                })?;

            if updated_count == 0 {
                return Err(DeliveryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: DeliveryId) -> DeliveryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(entregas::table.find(id.into_inner()))
                .execute(connection)
                .map_err(DeliveryRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(DeliveryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(draft: &DeliveryDraft) -> NewDeliveryRow {
    NewDeliveryRow {
        fecha: draft.delivery_date(),
        camion: draft.truck().as_str().to_owned(),
        nombre: draft.recipient().as_str().to_owned(),
        litros: draft.liters().map(|liters| liters.as_decimal().clone()),
        estado: draft.status().code(),
        motivo: draft.reason().map(str::to_owned),
        telefono: draft.phone().map(str::to_owned),
        latitud: draft
            .coordinates()
            .map(|coordinates| coordinates.latitude().clone()),
        longitud: draft
            .coordinates()
            .map(|coordinates| coordinates.longitude().clone()),
        foto_url: draft.photo_url().map(str::to_owned),
        usuario: draft.recorded_by().map(str::to_owned),
    }
}

fn to_new_row_of_record(record: &DeliveryRecord) -> NewDeliveryRow {
    NewDeliveryRow {
        fecha: record.delivery_date(),
        camion: record.truck().as_str().to_owned(),
        nombre: record.recipient().as_str().to_owned(),
        litros: record.liters().map(|liters| liters.as_decimal().clone()),
        estado: record.status().code(),
        motivo: record.reason().map(str::to_owned),
        telefono: record.phone().map(str::to_owned),
        latitud: record
            .coordinates()
            .map(|coordinates| coordinates.latitude().clone()),
        longitud: record
            .coordinates()
            .map(|coordinates| coordinates.longitude().clone()),
        foto_url: record.photo_url().map(str::to_owned),
        usuario: record.recorded_by().map(str::to_owned),
    }
}

fn row_to_record(row: DeliveryRow) -> DeliveryRepositoryResult<DeliveryRecord> {
    let DeliveryRow {
        id,
        fecha,
        camion,
        nombre,
        litros,
        estado,
        motivo,
        telefono,
        latitud,
        longitud,
        foto_url,
        usuario,
        creado_en,
    } = row;

    let truck = TruckId::new(camion).map_err(DeliveryRepositoryError::invalid_persisted_data)?;
    let recipient =
        RecipientName::new(nombre).map_err(DeliveryRepositoryError::invalid_persisted_data)?;
    let status = DeliveryStatus::try_from(estado)
        .map_err(DeliveryRepositoryError::invalid_persisted_data)?;
    let liters = litros
        .map(LitersDelivered::new)
        .transpose()
        .map_err(DeliveryRepositoryError::invalid_persisted_data)?;
    let coordinates = match (latitud, longitud) {
        (Some(latitude), Some(longitude)) => Some(
            Coordinates::new(latitude, longitude)
                .map_err(DeliveryRepositoryError::invalid_persisted_data)?,
        ),
        (None, None) => None,
        (half_latitud, half_longitud) => {
            return Err(DeliveryRepositoryError::invalid_persisted_data(
                HalfSetCoordinates {
                    latitud: half_latitud,
                    longitud: half_longitud,
                },
            ));
        }
    };

    let data = PersistedDeliveryData {
        id: DeliveryId::from_raw(id),
        delivery_date: fecha,
        truck,
        recipient,
        status,
        liters,
        reason: motivo,
        phone: telefono,
        coordinates,
        photo_url: foto_url,
        recorded_by: usuario,
        recorded_at: creado_en,
    };
    Ok(DeliveryRecord::from_persisted(data))
}

fn map_unique_violation(
    err: DieselError,
    date: NaiveDate,
    truck: TruckId,
    recipient: RecipientName,
) -> DeliveryRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if info
                .constraint_name()
                .is_some_and(|name| name == UNIQUE_DELIVERY_CONSTRAINT) =>
        {
            DeliveryRepositoryError::DuplicateDelivery {
                date,
                truck,
                recipient,
            }
        }
        _ => DeliveryRepositoryError::persistence(err),
    }
}
