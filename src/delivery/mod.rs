//! Delivery record keeping for the AguaRuta water-distribution service.
//!
//! This module owns the `entregas` table: the idempotent schema definition,
//! a validated domain model for delivery records, and repository access to
//! the table's native operations (insert, lookup, filtered listing, update,
//! delete). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
