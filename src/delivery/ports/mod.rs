//! Port contracts for delivery record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the delivery log
//! service.

pub mod repository;

pub use repository::{DeliveryRepository, DeliveryRepositoryError, DeliveryRepositoryResult};
