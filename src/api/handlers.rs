//! HTTP request handlers for the CLT calculation engine API.
//!
//! This module contains the handler functions for all calculation
//! endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Datelike;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_fund_withdrawal, calculate_overtime, calculate_standalone_vacation,
    calculate_termination, calculate_unemployment_benefit, project_investment,
};
use crate::config::TaxTables;
use crate::models::TerminationInput;

use super::request::{
    FgtsWithdrawalRequest, InvestmentRequest, OvertimeRequest, TerminationRequest,
    UnemploymentRequest, VacationRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/termination", post(termination_handler))
        .route("/calculate/unemployment", post(unemployment_handler))
        .route("/calculate/vacation", post(vacation_handler))
        .route("/calculate/overtime", post(overtime_handler))
        .route("/calculate/fgts-withdrawal", post(fgts_withdrawal_handler))
        .route("/calculate/investment", post(investment_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error
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

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Selects the statutory table set for an optional year override.
fn select_tables(
    state: &AppState,
    table_year: Option<i32>,
    correlation_id: Uuid,
) -> Result<&TaxTables, Response> {
    let config = state.config();
    match table_year {
        Some(year) => config.for_year(year).map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                year,
                "No statutory tables for requested year"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }),
        None => Ok(config.latest()),
    }
}

/// Handler for POST /calculate/termination.
///
/// Accepts the employment facts and returns the full settlement with
/// its audit trace. The table year defaults to the contract end year.
async fn termination_handler(
    State(state): State<AppState>,
    payload: Result<Json<TerminationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing termination calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let year = request.table_year.unwrap_or_else(|| request.end_date.year());
    let tables = match state.config().for_year(year) {
        Ok(tables) => tables,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year,
                "No statutory tables for requested year"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let input: TerminationInput = request.into();
    let result = calculate_termination(&input, tables);

    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        net = %result.totals.net,
        duration_us = result.audit_trace.duration_us,
        "Termination calculation completed"
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /calculate/unemployment.
async fn unemployment_handler(
    State(state): State<AppState>,
    payload: Result<Json<UnemploymentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing unemployment benefit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let tables = match select_tables(&state, request.table_year, correlation_id) {
        Ok(tables) => tables,
        Err(response) => return response,
    };

    let result = calculate_unemployment_benefit(
        request.last_salaries,
        request.months_worked,
        request.request_number,
        tables,
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /calculate/vacation.
async fn vacation_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let tables = match select_tables(&state, request.table_year, correlation_id) {
        Ok(tables) => tables,
        Err(response) => return response,
    };

    let result = calculate_standalone_vacation(
        request.monthly_salary,
        request.vacation_days,
        request.sell_abono,
        request.dependents,
        tables,
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /calculate/overtime.
async fn overtime_handler(
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = calculate_overtime(
        request.monthly_salary,
        request.hours,
        request.surcharge_percent,
        request.include_dsr,
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /calculate/fgts-withdrawal.
async fn fgts_withdrawal_handler(
    State(state): State<AppState>,
    payload: Result<Json<FgtsWithdrawalRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing FGTS withdrawal request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let tables = match select_tables(&state, request.table_year, correlation_id) {
        Ok(tables) => tables,
        Err(response) => return response,
    };

    let result = calculate_fund_withdrawal(request.balance, &tables.fgts_withdrawal);

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /calculate/investment.
async fn investment_handler(
    payload: Result<Json<InvestmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing investment projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = project_investment(
        request.amount,
        request.monthly_rate_a,
        request.monthly_rate_b,
        request.months,
    );

    (StatusCode::OK, Json(result)).into_response()
}
