//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, DateRange, EntryFilter, PayrollReport};
use crate::share_link::{decode_share_link, encode_share_link};

use super::request::{CalculationRequest, ShareLinkRequest, ShareLinkResponse};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/share-links", post(create_share_link_handler))
        .route("/share/:token", get(shared_view_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Accepts attendance entries and adjustments and returns the payroll report.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_calculation(request, &state) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                agents = report.agents.len(),
                entries = report.totals.entry_count,
                total_earnings = %report.totals.total_earnings,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

fn perform_calculation(request: CalculationRequest, state: &AppState) -> EngineResult<PayrollReport> {
    let config = state.config().config();

    if let Some(range) = request.filter.range {
        DateRange::new(range.start_date, range.end_date)?;
    }
    for adjustment in &request.adjustments {
        adjustment.validate()?;
    }

    let entries = request
        .entries
        .into_iter()
        .map(|entry| entry.into_entry(config))
        .collect::<EngineResult<Vec<AttendanceEntry>>>()?;

    Ok(calculate_payroll(
        &entries,
        &request.adjustments,
        &request.filter,
        config,
    ))
}

/// Handler for POST /share-links.
///
/// Issues a read-only link token for an agent and date range.
async fn create_share_link_handler(payload: Result<Json<ShareLinkRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if request.agent_name.trim().is_empty() {
        warn!(correlation_id = %correlation_id, "Share link requested without agent name");
        return json_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("agent_name must not be empty"),
        );
    }

    if let Err(err) = DateRange::new(request.start_date, request.end_date) {
        warn!(correlation_id = %correlation_id, error = %err, "Share link range rejected");
        return error_response(err.into());
    }

    let token = encode_share_link(&request.agent_name, request.start_date, request.end_date);
    info!(
        correlation_id = %correlation_id,
        agent = %request.agent_name,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Share link issued"
    );
    json_response(StatusCode::OK, ShareLinkResponse { token })
}

/// Handler for GET /share/:token.
///
/// Resolves a share link to the agent's payroll for the linked range, using
/// the records in the store. Undecodable tokens fail closed.
async fn shared_view_handler(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    match resolve_shared_view(&token, &state) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                entries = report.totals.entry_count,
                "Shared view resolved"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Shared view rejected"
            );
            error_response(err.into())
        }
    }
}

fn resolve_shared_view(token: &str, state: &AppState) -> EngineResult<PayrollReport> {
    let view = decode_share_link(token)?;
    let range = view.range().map_err(|err| EngineError::InvalidShareLink {
        message: err.to_string(),
    })?;

    let filter = EntryFilter::for_agent(view.agent_name).with_range(range);
    let store = state.store();
    let entries = store.entries_matching(&filter)?;
    let adjustments = store.list_adjustments()?;

    Ok(calculate_payroll(
        &entries,
        &adjustments,
        &filter,
        state.config().config(),
    ))
}
