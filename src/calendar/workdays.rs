//! Standard workday counting.
//!
//! A standard workday is the expected attendance unit used as the
//! denominator of quota attainment: Monday to Friday count 1, Saturday
//! counts 0.5 and Sunday counts 0.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;

use super::date_utils::{each_day_of_interval, get_day_type};

/// Number of decimal places shown for workday and work-amount figures.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Counts the weighted standard workdays in `[start, end]`.
///
/// The sum is exact; round with [`round_for_display`] only when presenting
/// the final value.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`](crate::error::EngineError::InvalidRange)
/// if `start` is after `end`.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::count_standard_workdays;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Monday 2024-04-01 through Sunday 2024-04-07
/// let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
/// assert_eq!(count_standard_workdays(start, end).unwrap(), Decimal::new(55, 1));
/// ```
pub fn count_standard_workdays(start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal> {
    let days = each_day_of_interval(start, end)?;
    Ok(days.into_iter().map(|day| get_day_type(day).weight()).sum())
}

/// Lenient variant of [`count_standard_workdays`] for display code.
///
/// An inverted range counts as zero workdays instead of failing, matching
/// what a statistics card shows before a period has begun.
pub fn count_standard_workdays_or_zero(start: NaiveDate, end: NaiveDate) -> Decimal {
    count_standard_workdays(start, end).unwrap_or(Decimal::ZERO)
}

/// Rounds a final figure to [`DISPLAY_DECIMAL_PLACES`] for presentation.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PLACES)
}
