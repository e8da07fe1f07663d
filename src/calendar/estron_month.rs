//! Estron fiscal month resolution.
//!
//! An Estron month runs from the 21st of one Gregorian month through the
//! 20th of the next. Fiscal month N ends in Gregorian month N, so the period
//! 21/12/2023 - 20/01/2024 is fiscal month 1.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::date_utils::{days_between, format_date, format_day_month};

/// First calendar day of every fiscal month.
pub const FISCAL_MONTH_START_DAY: u32 = 21;

/// Last calendar day of every fiscal month.
pub const FISCAL_MONTH_END_DAY: u32 = 20;

/// A fiscal (Estron) month period.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::resolve_fiscal_month;
/// use chrono::NaiveDate;
///
/// let period = resolve_fiscal_month(NaiveDate::from_ymd_opt(2024, 4, 25).unwrap()).unwrap();
/// assert_eq!(period.fiscal_month, 5);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 4, 21).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
/// assert_eq!(period.label(), "Tháng 5 Estron (21/04 - 20/05/2024)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalMonthPeriod {
    /// Gregorian year in which the period starts.
    pub calendar_year: i32,
    /// Gregorian month (1-12) in which the period starts.
    pub calendar_month: u32,
    /// The fiscal month label, 1-12.
    pub fiscal_month: u32,
    /// First day of the period (inclusive), always the 21st.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive), always the 20th.
    pub end_date: NaiveDate,
}

impl FiscalMonthPeriod {
    /// Checks if a given date falls within this period, inclusive of both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns every calendar day of the period in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        days_between(self.start_date, self.end_date)
    }

    /// Display name, e.g. `"Tháng 5 Estron (21/04 - 20/05/2024)"`.
    pub fn label(&self) -> String {
        format!(
            "Tháng {} Estron ({} - {})",
            self.fiscal_month,
            format_day_month(self.start_date),
            format_date(self.end_date)
        )
    }
}

/// Resolves the fiscal month containing `date`.
///
/// Dates on or after the 21st belong to the month that starts that day;
/// earlier dates belong to the month that ends on the 20th of their own
/// Gregorian month.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the period's first or last day
/// falls outside chrono's representable range. This only happens for dates
/// on or after 21/12 of the last representable year, or before 21/01 of the
/// first one.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::resolve_fiscal_month;
/// use chrono::NaiveDate;
///
/// let period = resolve_fiscal_month(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()).unwrap();
/// assert_eq!(period.fiscal_month, 1);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2023, 12, 21).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
///
/// assert!(resolve_fiscal_month(NaiveDate::MAX).is_err());
/// ```
pub fn resolve_fiscal_month(date: NaiveDate) -> EngineResult<FiscalMonthPeriod> {
    let year = date.year();
    let month = date.month();

    let (start_year, start_month) = if date.day() >= FISCAL_MONTH_START_DAY {
        (year, month)
    } else if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let (end_year, end_month) = if start_month == 12 {
        (start_year + 1, 1)
    } else {
        (start_year, start_month + 1)
    };

    let out_of_range = || EngineError::DateOutOfRange { date };
    let start_date = NaiveDate::from_ymd_opt(start_year, start_month, FISCAL_MONTH_START_DAY)
        .ok_or_else(out_of_range)?;
    let end_date = NaiveDate::from_ymd_opt(end_year, end_month, FISCAL_MONTH_END_DAY)
        .ok_or_else(out_of_range)?;

    Ok(FiscalMonthPeriod {
        calendar_year: start_year,
        calendar_month: start_month,
        fiscal_month: end_month,
        start_date,
        end_date,
    })
}
