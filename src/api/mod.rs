//! HTTP API module for the roster engine.
//!
//! This module provides the REST API endpoints for resolving presence and
//! expanding task templates into shifts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExpandRequest, PersonRequest, ResolveRequest};
pub use response::ApiError;
pub use state::AppState;
