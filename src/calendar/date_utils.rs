//! Date primitives used by the Estron calendar.
//!
//! This module provides day-granularity comparison, day classification
//! (weekday, Saturday, Sunday), inclusive interval enumeration, day
//! arithmetic and the display helpers used by the statistics and API layers.
//!
//! Everything here is pure except [`today`], which reads the local wall clock
//! and must only be called at the calling boundary.

use std::cmp::Ordering;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Weight of a Monday to Friday: one full standard workday.
pub const WEEKDAY_WEIGHT: Decimal = Decimal::ONE;

/// Weight of a Saturday: half a standard workday.
pub const SATURDAY_WEIGHT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Weight of a Sunday: no standard work expected.
pub const SUNDAY_WEIGHT: Decimal = Decimal::ZERO;

/// Weekday labels indexed by days from Sunday (0 = Sunday, 6 = Saturday).
const WEEKDAY_LABELS: [&str; 7] = [
    "Chủ Nhật", "Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6", "Thứ 7",
];

/// Represents the type of day for standard workday weighting.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - counts as a full workday.
    Weekday,
    /// Saturday - counts as half a workday.
    Saturday,
    /// Sunday - not a workday.
    Sunday,
}

impl DayType {
    /// Returns the standard workday weight of this day type.
    ///
    /// # Example
    ///
    /// ```
    /// use estron_engine::calendar::DayType;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DayType::Weekday.weight(), Decimal::ONE);
    /// assert_eq!(DayType::Saturday.weight(), Decimal::new(5, 1));
    /// assert_eq!(DayType::Sunday.weight(), Decimal::ZERO);
    /// ```
    pub fn weight(self) -> Decimal {
        match self {
            DayType::Weekday => WEEKDAY_WEIGHT,
            DayType::Saturday => SATURDAY_WEIGHT,
            DayType::Sunday => SUNDAY_WEIGHT,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-04-06 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 4, 6).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2024-04-07 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
/// assert_eq!(get_day_type(sunday), DayType::Sunday);
///
/// // 2024-04-01 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Drops the time of day, leaving the calendar day.
///
/// Callers holding a timestamp must normalize before comparing against
/// period bounds, otherwise a partial day can land on the wrong side.
pub fn normalize_to_day(datetime: NaiveDateTime) -> NaiveDate {
    datetime.date()
}

/// Compares two dates at calendar-day granularity.
pub fn compare_dates(a: NaiveDate, b: NaiveDate) -> Ordering {
    a.cmp(&b)
}

/// Returns true if `a` is strictly before `b`.
pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    compare_dates(a, b) == Ordering::Less
}

/// Returns true if `a` is strictly after `b`.
pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
    compare_dates(a, b) == Ordering::Greater
}

/// Returns true if both dates are the same calendar day.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    compare_dates(a, b) == Ordering::Equal
}

/// Adds `days` calendar days to `date` (negative values go backwards).
///
/// Returns `None` when the result is outside chrono's representable range.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::add_days;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// assert_eq!(add_days(date, 1), NaiveDate::from_ymd_opt(2025, 1, 1));
/// assert_eq!(add_days(date, -31), NaiveDate::from_ymd_opt(2024, 11, 30));
/// assert_eq!(add_days(NaiveDate::MAX, 1), None);
/// ```
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Returns the Sunday that closes the Monday-start week containing `date`.
///
/// A Sunday is its own week end. Returns `None` if that Sunday is past
/// `NaiveDate::MAX`.
pub fn end_of_week(date: NaiveDate) -> Option<NaiveDate> {
    let days_to_sunday = 6 - i64::from(date.weekday().num_days_from_monday());
    add_days(date, days_to_sunday)
}

/// Enumerates every calendar day from `start` to `end`, inclusive.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
///
/// # Example
///
/// ```
/// use estron_engine::calendar::each_day_of_interval;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let days = each_day_of_interval(start, end).unwrap();
/// assert_eq!(days.len(), 3); // leap day included
///
/// assert!(each_day_of_interval(end, start).is_err());
/// ```
pub fn each_day_of_interval(start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    if is_after(start, end) {
        return Err(EngineError::InvalidRange { start, end });
    }
    Ok(days_between(start, end))
}

/// Infallible enumeration for callers that already hold `start <= end`.
///
/// Walks with `succ_opt` so `NaiveDate::MAX` itself is included.
pub(crate) fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    std::iter::successors(Some(start), |day| day.succ_opt())
        .take_while(|day| *day <= end)
        .collect()
}

/// Returns the fixed weekday label for a date ("Chủ Nhật", "Thứ 2" .. "Thứ 7").
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Formats a date as `dd/MM/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a date as `dd/MM`.
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Formats a date as `yyyy-MM-dd`, the storage key format.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a date as weekday label plus `dd/MM`, e.g. `"Thứ 2, 22/04"`.
pub fn format_weekday_and_date(date: NaiveDate) -> String {
    format!("{}, {}", weekday_label(date), format_day_month(date))
}

/// Returns the current local calendar day.
///
/// Only call this at the boundary (request handlers, binaries) and pass the
/// result down; the calendar functions never read the clock themselves.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // DU-001: Day classification
    // ==========================================================================
    #[test]
    fn test_du_001_weekdays_are_weekday() {
        // 2024-04-01 is a Monday
        for offset in 0..5 {
            let date = add_days(make_date("2024-04-01"), offset).unwrap();
            assert_eq!(get_day_type(date), DayType::Weekday, "{date}");
        }
    }

    #[test]
    fn test_du_002_saturday_and_sunday() {
        assert_eq!(get_day_type(make_date("2024-04-06")), DayType::Saturday);
        assert_eq!(get_day_type(make_date("2024-04-07")), DayType::Sunday);
    }

    #[test]
    fn test_day_type_weights() {
        assert_eq!(DayType::Weekday.weight(), Decimal::ONE);
        assert_eq!(DayType::Saturday.weight(), Decimal::new(5, 1));
        assert_eq!(DayType::Sunday.weight(), Decimal::ZERO);
    }

    // ==========================================================================
    // DU-003: Comparison helpers
    // ==========================================================================
    #[test]
    fn test_du_003_comparisons() {
        let a = make_date("2024-04-20");
        let b = make_date("2024-04-21");
        assert!(is_before(a, b));
        assert!(!is_before(b, a));
        assert!(is_after(b, a));
        assert!(!is_after(a, a));
        assert!(is_same_day(a, a));
        assert_eq!(compare_dates(a, b), Ordering::Less);
    }

    #[test]
    fn test_normalize_to_day_drops_time() {
        let late = NaiveDateTime::parse_from_str("2024-04-20 23:59:59", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(normalize_to_day(late), make_date("2024-04-20"));
    }

    // ==========================================================================
    // DU-004: Interval enumeration
    // ==========================================================================
    #[test]
    fn test_du_004_each_day_single_day() {
        let day = make_date("2024-04-21");
        assert_eq!(each_day_of_interval(day, day).unwrap(), vec![day]);
    }

    #[test]
    fn test_each_day_crosses_year() {
        let days =
            each_day_of_interval(make_date("2023-12-30"), make_date("2024-01-02")).unwrap();
        assert_eq!(
            days,
            vec![
                make_date("2023-12-30"),
                make_date("2023-12-31"),
                make_date("2024-01-01"),
                make_date("2024-01-02"),
            ]
        );
    }

    #[test]
    fn test_each_day_inverted_range_fails() {
        let result = each_day_of_interval(make_date("2024-04-07"), make_date("2024-04-01"));
        match result {
            Err(EngineError::InvalidRange { start, end }) => {
                assert_eq!(start, make_date("2024-04-07"));
                assert_eq!(end, make_date("2024-04-01"));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    // ==========================================================================
    // DU-005: Week ends
    // ==========================================================================
    #[test]
    fn test_du_005_end_of_week_monday_start() {
        // Monday 2024-04-22 -> Sunday 2024-04-28
        assert_eq!(end_of_week(make_date("2024-04-22")), Some(make_date("2024-04-28")));
        // Sunday is its own week end
        assert_eq!(end_of_week(make_date("2024-04-21")), Some(make_date("2024-04-21")));
        // Saturday 2024-04-27 -> next day
        assert_eq!(end_of_week(make_date("2024-04-27")), Some(make_date("2024-04-28")));
    }

    #[test]
    fn test_add_days_across_leap_february() {
        assert_eq!(add_days(make_date("2024-02-28"), 1), Some(make_date("2024-02-29")));
        assert_eq!(add_days(make_date("2023-02-28"), 1), Some(make_date("2023-03-01")));
    }

    #[test]
    fn test_add_days_past_representable_range() {
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_days(NaiveDate::MIN, -1), None);
        assert_eq!(add_days(make_date("2024-01-01"), i64::MAX), None);
        assert_eq!(add_days(NaiveDate::MAX, 0), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_interval_ending_at_max_date_includes_it() {
        let start = add_days(NaiveDate::MAX, -2).unwrap();
        let days = each_day_of_interval(start, NaiveDate::MAX).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days.last(), Some(&NaiveDate::MAX));
    }

    #[test]
    fn test_end_of_week_near_max_date() {
        let sunday = end_of_week(NaiveDate::MAX);
        if NaiveDate::MAX.weekday() == Weekday::Sun {
            assert_eq!(sunday, Some(NaiveDate::MAX));
        } else {
            assert_eq!(sunday, None);
        }
    }

    // ==========================================================================
    // Labels and formatting
    // ==========================================================================
    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_label(make_date("2024-04-21")), "Chủ Nhật");
        assert_eq!(weekday_label(make_date("2024-04-22")), "Thứ 2");
        assert_eq!(weekday_label(make_date("2024-04-27")), "Thứ 7");
    }

    #[test]
    fn test_formatting() {
        let date = make_date("2024-04-05");
        assert_eq!(format_date(date), "05/04/2024");
        assert_eq!(format_day_month(date), "05/04");
        assert_eq!(format_iso(date), "2024-04-05");
        assert_eq!(format_weekday_and_date(date), "Thứ 6, 05/04");
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(format!("{}", DayType::Weekday), "Weekday");
        assert_eq!(format!("{}", DayType::Saturday), "Saturday");
        assert_eq!(format!("{}", DayType::Sunday), "Sunday");
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::Saturday).unwrap();
        assert_eq!(json, "\"saturday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Saturday);
    }
}
