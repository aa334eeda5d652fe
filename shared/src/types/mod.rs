//! Type definitions shared by the HTTP layer
//!
//! - `response` - API response bodies and health checks

pub mod response;

pub use response::{ErrorResponse, HealthResponse, HealthStatus, MessageResponse};
