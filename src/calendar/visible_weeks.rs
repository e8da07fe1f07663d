//! Selection of the weeks visible on a given day.
//!
//! Production screens only show the fiscal month's weeks up to and including
//! the current one; weeks that have not started yet are hidden.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::estron_month::{FiscalMonthPeriod, resolve_fiscal_month};
use super::estron_week::{FiscalWeekPeriod, partition_into_weeks};

/// The fiscal month around a reference date and its visible weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWeeks {
    /// The fiscal month containing the reference date.
    pub fiscal_month: FiscalMonthPeriod,
    /// The week containing the reference date.
    pub current_week: FiscalWeekPeriod,
    /// Every week of the fiscal month.
    pub all_weeks: Vec<FiscalWeekPeriod>,
    /// Weeks from the month start through the current week, ascending.
    pub visible_weeks: Vec<FiscalWeekPeriod>,
}

/// Resolves the fiscal month of `date` and selects the weeks visible on it.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the fiscal month of `date`
/// cannot be represented, and [`EngineError::InternalConsistency`] if no
/// week of the partition contains `date`.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::get_visible_weeks;
/// use chrono::NaiveDate;
///
/// let info = get_visible_weeks(NaiveDate::from_ymd_opt(2024, 4, 25).unwrap()).unwrap();
/// assert_eq!(info.current_week.week_index, 2);
/// assert_eq!(info.visible_weeks.len(), 2);
/// assert_eq!(info.all_weeks.len(), 6);
/// ```
pub fn get_visible_weeks(date: NaiveDate) -> EngineResult<VisibleWeeks> {
    let fiscal_month = resolve_fiscal_month(date)?;
    let all_weeks = partition_into_weeks(&fiscal_month);

    let current_week = all_weeks
        .iter()
        .find(|week| week.contains(date))
        .cloned()
        .ok_or_else(|| EngineError::InternalConsistency {
            date,
            message: format!(
                "no week of fiscal month {} ({} - {}) contains the date",
                fiscal_month.fiscal_month, fiscal_month.start_date, fiscal_month.end_date
            ),
        })?;

    // all_weeks is ascending by week_index with one entry per week.
    let visible_weeks: Vec<FiscalWeekPeriod> = all_weeks
        .iter()
        .filter(|week| week.start_date <= date || week.week_index == current_week.week_index)
        .cloned()
        .collect();

    Ok(VisibleWeeks {
        fiscal_month,
        current_week,
        all_weeks,
        visible_weeks,
    })
}
