//! Weekly production summaries.
//!
//! Groups production entries by day for each visible fiscal week, with
//! per-entry work amounts and daily and weekly totals. Days after the
//! reference date are left out.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    FiscalMonthPeriod, FiscalWeekPeriod, format_day_month, get_visible_weeks, weekday_label,
};
use crate::error::EngineResult;
use crate::models::{ProductionEntry, Quota};

use super::work_amount::{checked_sum, work_amount};

/// One production entry with its computed work amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryWorkAmount {
    /// Id of the production entry.
    pub id: String,
    /// The stage code.
    pub stage_code: String,
    /// Units produced.
    pub quantity: Decimal,
    /// Quantity over the stage's daily quota; absent when no quota applies.
    pub work_amount: Option<Decimal>,
}

/// Production recorded on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProduction {
    /// The day.
    pub date: NaiveDate,
    /// Weekday label, e.g. "Thứ 2".
    pub weekday_label: String,
    /// The day formatted as `dd/MM`.
    pub formatted_date: String,
    /// Entries recorded on the day.
    pub entries: Vec<EntryWorkAmount>,
    /// Sum of the entries' work amounts.
    pub total_work: Decimal,
}

/// Production recorded during one fiscal week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProduction {
    /// 1-based week index within the fiscal month.
    pub week_index: u32,
    /// Display name, e.g. "Tuần 2".
    pub label: String,
    /// First day of the week.
    pub start_date: NaiveDate,
    /// Last day of the week.
    pub end_date: NaiveDate,
    /// Days of the week up to the reference date.
    pub days: Vec<DailyProduction>,
    /// Sum of the daily totals.
    pub total_work: Decimal,
}

impl WeeklyProduction {
    /// Returns a copy with every work figure rounded to `places` decimals.
    pub fn rounded(&self, places: u32) -> Self {
        let days = self
            .days
            .iter()
            .map(|day| DailyProduction {
                entries: day
                    .entries
                    .iter()
                    .map(|e| EntryWorkAmount {
                        work_amount: e.work_amount.map(|w| w.round_dp(places)),
                        ..e.clone()
                    })
                    .collect(),
                total_work: day.total_work.round_dp(places),
                ..day.clone()
            })
            .collect();
        Self {
            days,
            total_work: self.total_work.round_dp(places),
            ..self.clone()
        }
    }
}

/// Production for every visible week of the fiscal month around a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOverview {
    /// The fiscal month containing the reference date.
    pub fiscal_month: FiscalMonthPeriod,
    /// Label of the fiscal month.
    pub fiscal_month_label: String,
    /// Index of the week containing the reference date.
    pub current_week_index: u32,
    /// Visible weeks, ascending.
    pub weeks: Vec<WeeklyProduction>,
}

/// Summarizes the production of `week` for the days on or before `today`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`](crate::error::EngineError::InvalidRecord)
/// if a work amount or a daily or weekly total does not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::get_visible_weeks;
/// use estron_engine::statistics::summarize_week;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 4, 25).unwrap();
/// let info = get_visible_weeks(today).unwrap();
/// let summary = summarize_week(&info.current_week, today, &[], &[]).unwrap();
///
/// // Monday 22/04 through Thursday 25/04
/// assert_eq!(summary.days.len(), 4);
/// assert!(summary.total_work.is_zero());
/// ```
pub fn summarize_week(
    week: &FiscalWeekPeriod,
    today: NaiveDate,
    entries: &[ProductionEntry],
    quotas: &[Quota],
) -> EngineResult<WeeklyProduction> {
    let days = week
        .days
        .iter()
        .filter(|day| **day <= today)
        .map(|day| summarize_day(*day, entries, quotas))
        .collect::<EngineResult<Vec<DailyProduction>>>()?;
    let total_work = checked_sum(days.iter().map(|d| d.total_work), "total_work")?;

    Ok(WeeklyProduction {
        week_index: week.week_index,
        label: week.label(),
        start_date: week.start_date,
        end_date: week.end_date,
        days,
        total_work,
    })
}

fn summarize_day(
    date: NaiveDate,
    entries: &[ProductionEntry],
    quotas: &[Quota],
) -> EngineResult<DailyProduction> {
    let day_entries = entries
        .iter()
        .filter(|e| e.date == date)
        .map(|e| -> EngineResult<EntryWorkAmount> {
            Ok(EntryWorkAmount {
                id: e.id.clone(),
                stage_code: e.stage_code.clone(),
                quantity: e.quantity,
                work_amount: work_amount(e, quotas)?,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;
    let total_work = checked_sum(day_entries.iter().filter_map(|e| e.work_amount), "total_work")?;

    Ok(DailyProduction {
        date,
        weekday_label: weekday_label(date).to_string(),
        formatted_date: format_day_month(date),
        entries: day_entries,
        total_work,
    })
}

/// Builds the weekly production view for `today`.
///
/// # Errors
///
/// Propagates calendar errors from the week selection and
/// [`EngineError::InvalidRecord`](crate::error::EngineError::InvalidRecord)
/// from [`summarize_week`].
pub fn production_overview(
    today: NaiveDate,
    entries: &[ProductionEntry],
    quotas: &[Quota],
) -> EngineResult<ProductionOverview> {
    let info = get_visible_weeks(today)?;
    let weeks = info
        .visible_weeks
        .iter()
        .map(|week| summarize_week(week, today, entries, quotas))
        .collect::<EngineResult<Vec<WeeklyProduction>>>()?;

    Ok(ProductionOverview {
        fiscal_month_label: info.fiscal_month.label(),
        fiscal_month: info.fiscal_month,
        current_week_index: info.current_week.week_index,
        weeks,
    })
}

impl ProductionOverview {
    /// Returns a copy with every work figure rounded to `places` decimals.
    pub fn rounded(&self, places: u32) -> Self {
        Self {
            weeks: self.weeks.iter().map(|w| w.rounded(places)).collect(),
            ..self.clone()
        }
    }
}
