//! The Estron fiscal calendar.
//!
//! This module derives fiscal (Estron) months from calendar dates, splits
//! them into Monday-start weeks, selects the weeks visible on a given day,
//! and counts weighted standard workdays over a date range. Every function
//! is pure: the current date is always passed in by the caller.

mod date_utils;
mod estron_month;
mod estron_week;
mod visible_weeks;
mod workdays;

pub use date_utils::{
    DayType, SATURDAY_WEIGHT, SUNDAY_WEIGHT, WEEKDAY_WEIGHT, add_days, compare_dates,
    each_day_of_interval, end_of_week, format_date, format_day_month, format_iso,
    format_weekday_and_date, get_day_type, is_after, is_before, is_same_day, normalize_to_day,
    today, weekday_label,
};
pub use estron_month::{
    FISCAL_MONTH_END_DAY, FISCAL_MONTH_START_DAY, FiscalMonthPeriod, resolve_fiscal_month,
};
pub use estron_week::{FiscalWeekPeriod, partition_into_weeks};
pub use visible_weeks::{VisibleWeeks, get_visible_weeks};
pub use workdays::{
    DISPLAY_DECIMAL_PLACES, count_standard_workdays, count_standard_workdays_or_zero,
    round_for_display,
};
