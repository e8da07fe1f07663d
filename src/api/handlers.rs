//! HTTP request handlers for the Estron engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{count_standard_workdays, get_visible_weeks, resolve_fiscal_month, today};
use crate::statistics::{monthly_statistics, production_overview};

use super::request::{DateQuery, MonthlyStatisticsRequest, RangeQuery, WeeklyProductionRequest};
use super::response::{ApiError, ApiErrorResponse, FiscalMonthResponse, WorkdaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar/month", get(fiscal_month_handler))
        .route("/calendar/weeks", get(visible_weeks_handler))
        .route("/calendar/workdays", get(workdays_handler))
        .route("/statistics/monthly", post(monthly_statistics_handler))
        .route("/production/weekly", post(weekly_production_handler))
        .with_state(state)
}

/// Handler for GET /calendar/month.
async fn fiscal_month_handler(query: Result<Query<DateQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match extract_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let date = query.date.unwrap_or_else(today);
    match resolve_fiscal_month(date) {
        Ok(period) => {
            info!(
                correlation_id = %correlation_id,
                date = %date,
                fiscal_month = period.fiscal_month,
                "Resolved fiscal month"
            );
            json_ok(FiscalMonthResponse {
                date,
                label: period.label(),
                period,
            })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Fiscal month resolution failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /calendar/weeks.
async fn visible_weeks_handler(query: Result<Query<DateQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match extract_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let date = query.date.unwrap_or_else(today);
    match get_visible_weeks(date) {
        Ok(weeks) => {
            info!(
                correlation_id = %correlation_id,
                date = %date,
                current_week = weeks.current_week.week_index,
                visible = weeks.visible_weeks.len(),
                "Selected visible weeks"
            );
            json_ok(weeks)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Week selection failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /calendar/workdays.
async fn workdays_handler(query: Result<Query<RangeQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let RangeQuery { start, end } = match extract_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match count_standard_workdays(start, end) {
        Ok(workdays) => {
            info!(
                correlation_id = %correlation_id,
                start = %start,
                end = %end,
                workdays = %workdays,
                "Counted standard workdays"
            );
            json_ok(WorkdaysResponse {
                start,
                end,
                workdays,
            })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Workday count failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /statistics/monthly.
///
/// Returns the monthly statistics rounded for display.
async fn monthly_statistics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyStatisticsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly statistics request");

    let request = match extract_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let date = request.today.unwrap_or_else(today);
    let config = &state.config().statistics;
    let start_time = Instant::now();
    match monthly_statistics(
        date,
        &request.quotas,
        &request.production_entries,
        &request.supplementary,
        config,
    ) {
        Ok(stats) => {
            info!(
                correlation_id = %correlation_id,
                fiscal_month = stats.fiscal_month.fiscal_month,
                product_work_done = %stats.product_work_done,
                target_product_work = %stats.target_product_work,
                duration_us = start_time.elapsed().as_micros(),
                "Monthly statistics completed"
            );
            json_ok(stats.rounded(config.display_decimal_places))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Monthly statistics failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /production/weekly.
///
/// Returns the production of each visible week, rounded for display.
async fn weekly_production_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyProductionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly production request");

    let request = match extract_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let date = request.today.unwrap_or_else(today);
    match production_overview(date, &request.production_entries, &request.quotas) {
        Ok(overview) => {
            info!(
                correlation_id = %correlation_id,
                fiscal_month = overview.fiscal_month.fiscal_month,
                weeks = overview.weeks.len(),
                "Weekly production completed"
            );
            json_ok(overview.rounded(state.config().statistics.display_decimal_places))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Weekly production failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn extract_query<T>(
    query: Result<Query<T>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "Invalid query string");
            Err(ApiErrorResponse::bad_request(ApiError::invalid_query(body_text)).into_response())
        }
    }
}

fn extract_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
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
    Err(ApiErrorResponse::bad_request(error).into_response())
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}
