//! Domain model for delivery records.
//!
//! A delivery record captures one truck's delivery event to a named
//! recipient on a calendar date. The triple (date, truck, recipient) is
//! unique across all records. All infrastructure concerns are kept outside
//! the domain boundary.

mod coords;
mod error;
mod ids;
mod query;
mod recipient;
mod record;
mod status;
mod truck;
mod volume;

pub use coords::Coordinates;
pub use error::{DeliveryDomainError, ParseDeliveryStatusError};
pub use ids::DeliveryId;
pub use query::DeliveryQuery;
pub use recipient::RecipientName;
pub use record::{DeliveryDraft, DeliveryRecord, PersistedDeliveryData};
pub use status::DeliveryStatus;
pub use truck::TruckId;
pub use volume::LitersDelivered;
