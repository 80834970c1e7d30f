pub use crate::error::ServiceError;

pub type Result<T> = core::result::Result<T, ServiceError>;
