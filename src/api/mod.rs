//! HTTP API module for the Estron engine.
//!
//! This module provides the REST API endpoints for the fiscal calendar,
//! weekly production summaries and monthly statistics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DateQuery, MonthlyStatisticsRequest, RangeQuery, WeeklyProductionRequest};
pub use response::{ApiError, ApiErrorResponse, FiscalMonthResponse, WorkdaysResponse};
pub use state::AppState;
