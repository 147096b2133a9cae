//! Diesel row models for delivery record persistence.

use super::schema::entregas;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for delivery records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = entregas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeliveryRow {
    /// Engine-assigned record identifier.
    pub id: i32,
    /// Delivery date.
    pub fecha: NaiveDate,
    /// Truck code.
    pub camion: String,
    /// Recipient name.
    pub nombre: String,
    /// Delivered volume in liters.
    pub litros: Option<BigDecimal>,
    /// Delivery outcome code.
    pub estado: i16,
    /// Reason accompanying the outcome.
    pub motivo: Option<String>,
    /// Recipient contact phone number.
    pub telefono: Option<String>,
    /// Delivery point latitude.
    pub latitud: Option<BigDecimal>,
    /// Delivery point longitude.
    pub longitud: Option<BigDecimal>,
    /// Proof-of-delivery photo reference.
    pub foto_url: Option<String>,
    /// Username of the recording actor.
    pub usuario: Option<String>,
    /// Engine-assigned creation timestamp.
    pub creado_en: DateTime<Utc>,
}

/// Insert model for delivery records.
///
/// Omits `id` and `creado_en` so the engine's sequence and column default
/// supply them.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = entregas)]
pub struct NewDeliveryRow {
    /// Delivery date.
    pub fecha: NaiveDate,
    /// Truck code.
    pub camion: String,
    /// Recipient name.
    pub nombre: String,
    /// Delivered volume in liters.
    pub litros: Option<BigDecimal>,
    /// Delivery outcome code.
    pub estado: i16,
    /// Reason accompanying the outcome.
    pub motivo: Option<String>,
    /// Recipient contact phone number.
    pub telefono: Option<String>,
    /// Delivery point latitude.
    pub latitud: Option<BigDecimal>,
    /// Delivery point longitude.
    pub longitud: Option<BigDecimal>,
    /// Proof-of-delivery photo reference.
    pub foto_url: Option<String>,
    /// Username of the recording actor.
    pub usuario: Option<String>,
}
