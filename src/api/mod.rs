//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoint through which the reporting
//! layer submits raw clock events and receives the reconstructed report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReconstructionRequest;
pub use response::{ApiError, ReconstructionResponse};
pub use state::AppState;
