//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::AppError) so every failure
//! is rendered as the standard [`ErrorResponse`](crate::ErrorResponse).

pub mod json_body;
pub mod uuid_path;

pub use json_body::JsonBody;
pub use uuid_path::UuidPath;
