//! Application services for delivery record keeping.

mod log;

pub use log::{
    DeliveryLogService, DeliveryLogServiceError, DeliveryLogServiceResult, RecordDeliveryRequest,
};
