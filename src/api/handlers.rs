//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::expansion::{DEFAULT_HORIZON_DAYS, expand_task};
use crate::models::{CalendarDate, Person, PresenceRow, Shift};
use crate::resolution::resolve;

use super::request::{ExpandRequest, ResolveRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/presence/resolve", post(resolve_handler))
        .route("/shifts/expand", post(expand_handler))
        .with_state(state)
}

/// Response body for the `/presence/resolve` endpoint.
#[derive(Debug, Clone, Serialize)]
struct ResolveResponse {
    rows: Vec<PresenceRow>,
}

/// Response body for the `/shifts/expand` endpoint.
#[derive(Debug, Clone, Serialize)]
struct ExpandResponse {
    shifts: Vec<Shift>,
    /// Days on which 24/7 tiling stopped at the safety cap; a non-empty list
    /// points at a misconfigured task duration.
    capped_days: Vec<CalendarDate>,
}

/// Handler for the POST /presence/resolve endpoint.
///
/// Resolves presence rows for the supplied people over a date window, using
/// the team rotations from the loaded configuration.
async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing presence resolution request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_date = match CalendarDate::parse(&request.start_date) {
        Ok(date) => date,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid start date");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };
    let days = request.days.unwrap_or(DEFAULT_HORIZON_DAYS);
    let people: Vec<Person> = request.people.into_iter().map(Into::into).collect();
    let team_rotations = state.config().team_rotations();

    let started = Instant::now();
    let mut rows = Vec::with_capacity(people.len() * days as usize);
    for person in &people {
        for offset in 0..i64::from(days) {
            let Some(date) = start_date.plus_days(offset) else {
                break;
            };
            match resolve(person, date, team_rotations) {
                Ok(result) => rows.push(PresenceRow::flatten(&person.id, date, &result)),
                Err(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        person_id = %person.id,
                        error = %err,
                        "Presence resolution failed"
                    );
                    let api_error: ApiErrorResponse = err.into();
                    return api_error.into_response();
                }
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        people_count = people.len(),
        rows_count = rows.len(),
        duration_us = started.elapsed().as_micros(),
        "Presence resolution completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ResolveResponse { rows }),
    )
        .into_response()
}

/// Handler for the POST /shifts/expand endpoint.
///
/// Expands a configured task template over a generation horizon.
async fn expand_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExpandRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift expansion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let task = match state.config().get_task(&request.task_id) {
        Ok(task) => task,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                task_id = %request.task_id,
                "Task template not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let horizon_start = match CalendarDate::parse(&request.horizon_start) {
        Ok(date) => date,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid horizon start");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };
    let horizon_days = request.horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS);

    let started = Instant::now();
    let expansion = expand_task(task, horizon_start, horizon_days);

    if expansion.hit_safety_cap() {
        warn!(
            correlation_id = %correlation_id,
            task_id = %task.id,
            capped_days = expansion.capped_days.len(),
            "Shift expansion hit the per-day safety cap"
        );
    }
    info!(
        correlation_id = %correlation_id,
        task_id = %task.id,
        shifts_count = expansion.shifts.len(),
        duration_us = started.elapsed().as_micros(),
        "Shift expansion completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ExpandResponse {
            shifts: expansion.shifts,
            capped_days: expansion.capped_days,
        }),
    )
        .into_response()
}

/// Maps a JSON extraction rejection onto the API error vocabulary.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
