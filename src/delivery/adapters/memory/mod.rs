//! In-memory adapter for delivery record persistence.

mod delivery_repository;

pub use delivery_repository::InMemoryDeliveryRepository;
