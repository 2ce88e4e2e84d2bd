//! Gateway types module
//!
//! - [`response`]: error response body, error codes, `OrderError` HTTP mapping

pub mod response;

pub use response::{ErrorResponse, error_codes};
