//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_monthly_row, compute_payslip, days_in_month};
use crate::models::{Payslip, PayslipInput, month_key, parse_date_key};

use super::request::{CheckInRequest, CheckOutRequest, HolidayRequest, PayslipRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/check-in", post(check_in_handler))
        .route("/attendance/check-out", post(check_out_handler))
        .route(
            "/attendance/:employee_id/:year/:month",
            get(monthly_attendance_handler),
        )
        .route("/holidays", post(declare_holiday_handler))
        .route("/payslips", post(create_payslip_handler))
        .route("/payslips/:employee_id/:month", get(get_payslip_handler))
        .with_state(state)
}

/// Unwraps a JSON payload or produces a 400 response with a structured body.
fn unwrap_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
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
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

fn engine_error(err: crate::error::EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

/// Handler for `POST /attendance/check-in`.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        timestamp = %request.timestamp,
        "Recording check-in"
    );

    let mut stores = state.stores().write().await;
    stores
        .attendance
        .check_in(&request.employee_id, request.timestamp, request.location);

    let key = crate::models::date_key(request.timestamp.date());
    let record = stores
        .attendance
        .day(&request.employee_id, &key)
        .cloned()
        .unwrap_or_default();
    (StatusCode::OK, Json(record)).into_response()
}

/// Handler for `POST /attendance/check-out`.
async fn check_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        timestamp = %request.timestamp,
        "Recording check-out"
    );

    let mut stores = state.stores().write().await;
    if let Err(err) =
        stores
            .attendance
            .check_out(&request.employee_id, request.timestamp, request.location)
    {
        warn!(correlation_id = %correlation_id, error = %err, "Check-out rejected");
        return engine_error(err);
    }

    let key = crate::models::date_key(request.timestamp.date());
    let record = stores
        .attendance
        .day(&request.employee_id, &key)
        .cloned()
        .unwrap_or_default();
    (StatusCode::OK, Json(record)).into_response()
}

/// Handler for `GET /attendance/:employee_id/:year/:month`.
async fn monthly_attendance_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month)): Path<(String, i32, u32)>,
) -> Response {
    let stores = state.stores().read().await;
    let attendance = stores.attendance.days_for(&employee_id);
    let holidays = stores.holidays.date_set();
    let today = Utc::now().date_naive();

    match build_monthly_row(&employee_id, year, month, &attendance, &holidays, today) {
        Ok(row) => (StatusCode::OK, Json(row)).into_response(),
        Err(err) => engine_error(err),
    }
}

/// Handler for `POST /holidays`.
async fn declare_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let Some(date) = parse_date_key(&request.date) else {
        warn!(correlation_id = %correlation_id, date = %request.date, "Malformed holiday date");
        let error = ApiError::validation_error(format!(
            "Holiday date '{}' is not a valid DD-MM-YYYY date",
            request.date
        ));
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        festival = %request.festival,
        "Declaring holiday"
    );

    let mut stores = state.stores().write().await;
    let holiday = stores.holidays.declare(date, request.festival).clone();
    (StatusCode::CREATED, Json(holiday)).into_response()
}

/// Handler for `POST /payslips`.
///
/// Derives the month's present-day count from the attendance store, computes
/// the payslip breakdown, and stores it as a frozen snapshot. The store
/// write guard is held across the existence check and the insert, so two
/// submissions for the same employee/month cannot both succeed.
async fn create_payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let total_days = match days_in_month(request.year, request.month) {
        Ok(days) => days,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid payslip month");
            return engine_error(err);
        }
    };

    let mut stores = state.stores().write().await;
    let attendance = stores.attendance.days_for(&request.employee_id);
    let holidays = stores.holidays.date_set();
    let today = Utc::now().date_naive();

    let row = match build_monthly_row(
        &request.employee_id,
        request.year,
        request.month,
        &attendance,
        &holidays,
        today,
    ) {
        Ok(row) => row,
        Err(err) => return engine_error(err),
    };

    let input = PayslipInput {
        basic_salary: request.basic_salary,
        travelling_days: request.travelling_days,
        total_days_in_month: total_days,
        present_days: row.total_present,
    };

    let computation = match compute_payslip(&input, state.config().rates()) {
        Ok(computation) => computation,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip computation failed");
            return engine_error(err);
        }
    };

    let month = month_key(request.year, request.month);
    let payslip = Payslip::issue(
        &request.employee_id,
        &month,
        computation,
        request.document_url,
    );

    if let Err(err) = stores.payslips.create_if_absent(payslip.clone()) {
        warn!(correlation_id = %correlation_id, error = %err, "Duplicate payslip refused");
        return engine_error(err);
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %payslip.employee_id,
        month = %payslip.month,
        present_days = row.total_present,
        net_salary = %payslip.computation.net_salary,
        "Payslip issued"
    );
    (StatusCode::CREATED, Json(payslip)).into_response()
}

/// Handler for `GET /payslips/:employee_id/:month`.
async fn get_payslip_handler(
    State(state): State<AppState>,
    Path((employee_id, month)): Path<(String, String)>,
) -> Response {
    let stores = state.stores().read().await;
    match stores.payslips.get(&employee_id, &month) {
        Some(payslip) => (StatusCode::OK, Json(payslip.clone())).into_response(),
        None => {
            let error = ApiError::not_found(format!(
                "No payslip for employee '{}' in month {}",
                employee_id, month
            ));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
