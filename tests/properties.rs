//! Property-based tests for the Estron fiscal calendar.
//!
//! Dates are drawn from 1990 to 2100 so every boundary case (year rollover,
//! leap February, months starting on any weekday) is exercised.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use estron_engine::calendar::{
    count_standard_workdays, end_of_week, get_visible_weeks, partition_into_weeks,
    resolve_fiscal_month,
};

/// Strategy to generate any valid date in the supported range.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    (0i64..40_543).prop_map(move |offset| first + Duration::days(offset))
}

/// Strategy to generate an ordered range of up to a year.
fn range_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..=366).prop_map(|(start, len)| (start, start + Duration::days(len)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // =========================================================================
    // Month resolution
    // =========================================================================

    /// Every date lies inside its fiscal month, which runs 21st to 20th.
    #[test]
    fn prop_month_contains_date(date in date_strategy()) {
        let period = resolve_fiscal_month(date).unwrap();

        prop_assert!(period.start_date <= date && date <= period.end_date);
        prop_assert_eq!(period.start_date.day(), 21);
        prop_assert_eq!(period.end_date.day(), 20);
        prop_assert_eq!(period.fiscal_month, period.end_date.month());
        prop_assert_eq!(period.calendar_month, period.start_date.month());
        prop_assert_eq!(period.calendar_year, period.start_date.year());
    }

    /// Day 21 onwards starts this month; days 1 to 20 end this month.
    #[test]
    fn prop_boundary_side_follows_day_of_month(date in date_strategy()) {
        let period = resolve_fiscal_month(date).unwrap();

        if date.day() >= 21 {
            prop_assert_eq!(period.start_date.month(), date.month());
            prop_assert_eq!(period.start_date.year(), date.year());
        } else {
            prop_assert_eq!(period.end_date.month(), date.month());
            prop_assert_eq!(period.end_date.year(), date.year());
        }
    }

    /// Consecutive fiscal months abut with no gap.
    #[test]
    fn prop_months_are_contiguous(date in date_strategy()) {
        let period = resolve_fiscal_month(date).unwrap();
        let next = resolve_fiscal_month(period.end_date + Duration::days(1)).unwrap();

        prop_assert_eq!(next.start_date, period.end_date + Duration::days(1));
    }

    // =========================================================================
    // Week partitioning
    // =========================================================================

    /// Weeks cover the month exactly, in order, with indices from 1.
    #[test]
    fn prop_weeks_partition_month(date in date_strategy()) {
        let period = resolve_fiscal_month(date).unwrap();
        let weeks = partition_into_weeks(&period);

        prop_assert!(!weeks.is_empty());
        prop_assert_eq!(weeks[0].start_date, period.start_date);
        prop_assert_eq!(weeks[weeks.len() - 1].end_date, period.end_date);

        let mut expected_start = period.start_date;
        for (i, week) in weeks.iter().enumerate() {
            prop_assert_eq!(week.week_index as usize, i + 1);
            prop_assert_eq!(week.start_date, expected_start);
            prop_assert!(week.end_date == period.end_date || week.end_date.weekday() == Weekday::Sun);
            prop_assert_eq!(Some(week.end_date), end_of_week(week.start_date).map(|d| d.min(period.end_date)));
            prop_assert_eq!(week.days.len() as i64, (week.end_date - week.start_date).num_days() + 1);
            expected_start = week.end_date + Duration::days(1);
        }

        let total_days: usize = weeks.iter().map(|w| w.days.len()).sum();
        prop_assert_eq!(total_days, period.days().len());
    }

    // =========================================================================
    // Visible weeks
    // =========================================================================

    /// The current week holds the date and no visible week starts after it.
    #[test]
    fn prop_visible_weeks_are_a_prefix(date in date_strategy()) {
        let info = get_visible_weeks(date).unwrap();

        prop_assert!(info.current_week.contains(date));
        prop_assert!(info.visible_weeks.iter().all(|w| w.start_date <= date));
        prop_assert_eq!(
            info.visible_weeks.last().map(|w| w.week_index),
            Some(info.current_week.week_index)
        );
        prop_assert_eq!(&info.visible_weeks[..], &info.all_weeks[..info.visible_weeks.len()]);
    }

    /// Repeated calls give identical results.
    #[test]
    fn prop_visible_weeks_idempotent(date in date_strategy()) {
        prop_assert_eq!(get_visible_weeks(date).unwrap(), get_visible_weeks(date).unwrap());
    }

    // =========================================================================
    // Workday counting
    // =========================================================================

    /// Extending a range never lowers the workday count.
    #[test]
    fn prop_workdays_monotonic_in_end((start, end) in range_strategy()) {
        let shorter = count_standard_workdays(start, end).unwrap();
        let longer = count_standard_workdays(start, end + Duration::days(1)).unwrap();

        prop_assert!(longer >= shorter);
    }

    /// A full week always weighs 5.5 days and counts are multiples of 0.5.
    #[test]
    fn prop_full_week_is_five_and_a_half(start in date_strategy()) {
        let week = count_standard_workdays(start, start + Duration::days(6)).unwrap();
        prop_assert_eq!(week, Decimal::new(55, 1));

        let any = count_standard_workdays(start, start + Duration::days(10)).unwrap();
        prop_assert!((any * Decimal::TWO).fract().is_zero());
    }

    /// An inverted range is rejected.
    #[test]
    fn prop_inverted_range_rejected((start, end) in range_strategy()) {
        if start < end {
            prop_assert!(count_standard_workdays(end, start).is_err());
        }
    }
}
