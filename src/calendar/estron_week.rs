//! Estron week partitioning.
//!
//! Week 1 runs from the first day of the fiscal month to the following
//! Sunday. Every later week runs Monday to Sunday, except the last one,
//! which is cut at the fiscal month end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_utils::{days_between, end_of_week};
use super::estron_month::FiscalMonthPeriod;

/// A week within a fiscal month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalWeekPeriod {
    /// 1-based position of the week within its fiscal month.
    pub week_index: u32,
    /// First day of the week (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the week (inclusive); a Sunday or the month end.
    pub end_date: NaiveDate,
    /// Every day from `start_date` to `end_date`.
    pub days: Vec<NaiveDate>,
}

impl FiscalWeekPeriod {
    /// Checks if a given date falls within this week, inclusive of both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Display name, e.g. `"Tuần 2"`.
    pub fn label(&self) -> String {
        format!("Tuần {}", self.week_index)
    }
}

/// Splits a fiscal month into its weeks.
///
/// The loop stops as soon as a week ends on the month's last day, so the
/// result always covers `[start_date, end_date]` with no gaps or overlaps.
/// A period whose start is after its end yields no weeks. Week ends past
/// `NaiveDate::MAX` are clipped to the period end like any other.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::{partition_into_weeks, resolve_fiscal_month};
/// use chrono::NaiveDate;
///
/// // 2024-04-21 is a Sunday, so week 1 is a single day.
/// let month = resolve_fiscal_month(NaiveDate::from_ymd_opt(2024, 4, 21).unwrap()).unwrap();
/// let weeks = partition_into_weeks(&month);
///
/// assert_eq!(weeks[0].days.len(), 1);
/// assert_eq!(weeks[1].start_date, NaiveDate::from_ymd_opt(2024, 4, 22).unwrap());
/// assert_eq!(weeks.last().unwrap().end_date, month.end_date);
/// ```
pub fn partition_into_weeks(period: &FiscalMonthPeriod) -> Vec<FiscalWeekPeriod> {
    let mut weeks = Vec::new();
    if period.start_date > period.end_date {
        return weeks;
    }

    let mut week_start = period.start_date;
    let mut week_index = 1;

    loop {
        let week_end = end_of_week(week_start)
            .map_or(period.end_date, |sunday| sunday.min(period.end_date));

        weeks.push(FiscalWeekPeriod {
            week_index,
            start_date: week_start,
            end_date: week_end,
            days: days_between(week_start, week_end),
        });

        if week_end == period.end_date {
            break;
        }

        // week_end < period.end_date here, so the next day exists
        week_start = match week_end.succ_opt() {
            Some(next) => next,
            None => break,
        };
        week_index += 1;
    }

    weeks
}
