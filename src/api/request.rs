//! Request types for the Estron engine API.
//!
//! Query parameters for the calendar endpoints and JSON bodies for the
//! statistics endpoints. Dates use the `YYYY-MM-DD` format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DailySupplementaryData, ProductionEntry, Quota};

/// Query for endpoints that take a single reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// The reference date; today's local date when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Query for `/calendar/workdays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

/// Request body for `/statistics/monthly`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyStatisticsRequest {
    /// The reference date; today's local date when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Stage quotas.
    #[serde(default)]
    pub quotas: Vec<Quota>,
    /// Production entries; may span several months.
    #[serde(default)]
    pub production_entries: Vec<ProductionEntry>,
    /// Supplementary records; may span several months.
    #[serde(default)]
    pub supplementary: Vec<DailySupplementaryData>,
}

/// Request body for `/production/weekly`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyProductionRequest {
    /// The reference date; today's local date when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Stage quotas.
    #[serde(default)]
    pub quotas: Vec<Quota>,
    /// Production entries.
    #[serde(default)]
    pub production_entries: Vec<ProductionEntry>,
}
