//! AguaRuta: delivery record store for a rural water-distribution service.
//!
//! This crate owns the `entregas` table — one row per truck delivery to a
//! named recipient on a given date — together with its uniqueness constraint
//! and secondary indexes, and provides typed access to it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure delivery-record types and validation with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`delivery`]: Delivery record model, repository port and adapters, and
//!   the delivery log service

pub mod delivery;
