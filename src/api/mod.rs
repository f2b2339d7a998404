//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for calculating payroll from
//! attendance entries and for issuing and resolving share links.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EntryRequest, ShareLinkRequest, ShareLinkResponse};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
