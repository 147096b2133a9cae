//! `PostgreSQL` adapters for delivery record persistence.

mod models;
mod repository;
mod schema;
mod setup;

pub use repository::{DeliveryPgPool, PostgresDeliveryRepository};
pub use setup::{SETUP_SQL, apply_schema, ensure_schema};
