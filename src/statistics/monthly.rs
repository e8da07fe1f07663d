//! Monthly statistics for the fiscal month containing a reference date.
//!
//! Combines standard workday counts with the month's production entries and
//! supplementary records into a product-work target and the work done so far.
//! Figures are kept at full precision; [`MonthlyStatistics::rounded`] makes
//! the display copy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{FiscalMonthPeriod, count_standard_workdays, resolve_fiscal_month};
use crate::config::StatisticsConfig;
use crate::error::EngineResult;
use crate::models::{DailySupplementaryData, ProductionEntry, Quota};

use super::work_amount::{checked_sum, out_of_range, total_work_amount};

/// Statistics for one fiscal month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    /// The fiscal month the statistics cover.
    pub fiscal_month: FiscalMonthPeriod,
    /// Label of the fiscal month.
    pub fiscal_month_label: String,
    /// Standard workdays in the whole fiscal month.
    pub standard_workdays_for_month: Decimal,
    /// Standard workdays from the month start through the reference date.
    pub standard_workdays_to_date: Decimal,
    /// Total work amount of the month's production entries.
    pub product_work_done: Decimal,
    /// Total positive overtime hours.
    pub overtime_hours: Decimal,
    /// Total positive leave, in workdays.
    pub leave_days: Decimal,
    /// Total positive meeting time, in hours.
    pub meeting_hours: Decimal,
    /// Work expected by the reference date; never negative.
    pub target_product_work: Decimal,
    /// `product_work_done / target_product_work`; absent when the target is zero.
    pub attainment_ratio: Option<Decimal>,
}

impl MonthlyStatistics {
    /// Returns true if the work done reaches the target.
    pub fn target_met(&self) -> bool {
        self.product_work_done >= self.target_product_work
    }

    /// Returns a copy with every figure rounded to `places` decimals.
    pub fn rounded(&self, places: u32) -> Self {
        Self {
            fiscal_month: self.fiscal_month.clone(),
            fiscal_month_label: self.fiscal_month_label.clone(),
            standard_workdays_for_month: self.standard_workdays_for_month.round_dp(places),
            standard_workdays_to_date: self.standard_workdays_to_date.round_dp(places),
            product_work_done: self.product_work_done.round_dp(places),
            overtime_hours: self.overtime_hours.round_dp(places),
            leave_days: self.leave_days.round_dp(places),
            meeting_hours: self.meeting_hours.round_dp(places),
            target_product_work: self.target_product_work.round_dp(places),
            attainment_ratio: self.attainment_ratio.map(|r| r.round_dp(places)),
        }
    }
}

/// Computes the statistics of the fiscal month containing `today`.
///
/// Production entries and supplementary records outside the fiscal month are
/// ignored; only positive overtime, leave and meeting values are summed.
///
/// # Arguments
///
/// * `today` - The reference date
/// * `quotas` - Stage quotas used to convert quantities into work amounts
/// * `entries` - Production entries; may span several months
/// * `supplementary` - Supplementary records; may span several months
/// * `config` - Unit conversion settings
///
/// # Errors
///
/// - [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
///   if a conversion factor in `config` is not positive
/// - [`EngineError::InvalidRecord`](crate::error::EngineError::InvalidRecord)
///   if a sum or the target does not fit in a `Decimal`
/// - calendar errors from month resolution and the workday count
///
/// # Example
///
/// ```
/// use estron_engine::config::StatisticsConfig;
/// use estron_engine::statistics::monthly_statistics;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2024, 4, 25).unwrap();
/// let stats = monthly_statistics(today, &[], &[], &[], &StatisticsConfig::default()).unwrap();
///
/// assert_eq!(stats.standard_workdays_for_month, Decimal::new(23, 0));
/// // Mon 22 to Thu 25 April
/// assert_eq!(stats.standard_workdays_to_date, Decimal::new(4, 0));
/// assert_eq!(stats.target_product_work, Decimal::new(4, 0));
/// assert_eq!(stats.attainment_ratio, Some(Decimal::ZERO));
/// ```
pub fn monthly_statistics(
    today: NaiveDate,
    quotas: &[Quota],
    entries: &[ProductionEntry],
    supplementary: &[DailySupplementaryData],
    config: &StatisticsConfig,
) -> EngineResult<MonthlyStatistics> {
    config.validate()?;
    let month = resolve_fiscal_month(today)?;
    let capped_today = today.min(month.end_date);

    let standard_workdays_for_month = count_standard_workdays(month.start_date, month.end_date)?;
    let standard_workdays_to_date = count_standard_workdays(month.start_date, capped_today)?;

    let product_work_done =
        total_work_amount(entries.iter().filter(|e| month.contains(e.date)), quotas)?;

    let in_month: Vec<&DailySupplementaryData> = supplementary
        .iter()
        .filter(|r| month.contains(r.date))
        .collect();
    let overtime_hours =
        positive_sum(in_month.iter().map(|r| r.overtime_hours), "overtime_hours")?;
    let leave_hours = positive_sum(in_month.iter().map(|r| r.leave_hours), "leave_hours")?;
    let meeting_minutes =
        positive_sum(in_month.iter().map(|r| r.meeting_minutes), "meeting_minutes")?;

    let hours = config.hours_per_workday;
    let leave_days = divide(leave_hours, hours, "leave_hours")?;
    let meeting_hours = divide(meeting_minutes, config.minutes_per_hour, "meeting_minutes")?;

    let overtime_days = divide(overtime_hours, hours, "overtime_hours")?;
    let meeting_days = divide(meeting_hours, hours, "meeting_minutes")?;

    // Floored at zero
    let target_product_work = standard_workdays_to_date
        .checked_add(overtime_days)
        .and_then(|t| t.checked_sub(leave_days))
        .and_then(|t| t.checked_sub(meeting_days))
        .ok_or_else(|| out_of_range("target_product_work"))?
        .max(Decimal::ZERO);
    let attainment_ratio = if target_product_work.is_zero() {
        None
    } else {
        product_work_done.checked_div(target_product_work)
    };

    debug!(
        fiscal_month = month.fiscal_month,
        entries = entries.len(),
        supplementary = in_month.len(),
        %product_work_done,
        %target_product_work,
        "Computed monthly statistics"
    );

    Ok(MonthlyStatistics {
        fiscal_month_label: month.label(),
        fiscal_month: month,
        standard_workdays_for_month,
        standard_workdays_to_date,
        product_work_done,
        overtime_hours,
        leave_days,
        meeting_hours,
        target_product_work,
        attainment_ratio,
    })
}

/// Progress of `value` towards `target` as a percentage clamped to `[0, 100]`.
///
/// A zero target reads as 100% once anything has been done, as does a ratio
/// too large to represent.
pub fn progress_percent(value: Decimal, target: Decimal) -> Decimal {
    let hundred = Decimal::ONE_HUNDRED;
    if target > Decimal::ZERO {
        value
            .checked_div(target)
            .and_then(|ratio| ratio.checked_mul(hundred))
            .map_or_else(
                || if value > Decimal::ZERO { hundred } else { Decimal::ZERO },
                |percent| percent.clamp(Decimal::ZERO, hundred),
            )
    } else if value > Decimal::ZERO {
        hundred
    } else {
        Decimal::ZERO
    }
}

fn positive_sum<I>(values: I, field: &str) -> EngineResult<Decimal>
where
    I: Iterator<Item = Option<Decimal>>,
{
    checked_sum(values.flatten().filter(|v| *v > Decimal::ZERO), field)
}

fn divide(value: Decimal, divisor: Decimal, field: &str) -> EngineResult<Decimal> {
    value.checked_div(divisor).ok_or_else(|| out_of_range(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn quotas() -> Vec<Quota> {
        vec![Quota {
            id: "q-1".to_string(),
            stage_code: "CD01".to_string(),
            daily_quota: dec("400"),
            order: 0,
        }]
    }

    fn entry(date: &str, quantity: &str) -> ProductionEntry {
        ProductionEntry {
            id: format!("p-{date}"),
            date: make_date(date),
            stage_code: "CD01".to_string(),
            quantity: dec(quantity),
        }
    }

    fn supplementary(
        date: &str,
        leave: Option<&str>,
        overtime: Option<&str>,
        meeting: Option<&str>,
    ) -> DailySupplementaryData {
        DailySupplementaryData {
            date: make_date(date),
            leave_hours: leave.map(dec),
            overtime_hours: overtime.map(dec),
            meeting_minutes: meeting.map(dec),
        }
    }

    // ==========================================================================
    // MS-001: Workday counts
    // ==========================================================================
    #[test]
    fn test_ms_001_workdays_for_month_and_to_date() {
        let stats = monthly_statistics(
            make_date("2024-04-25"),
            &[],
            &[],
            &[],
            &StatisticsConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.fiscal_month.fiscal_month, 5);
        assert_eq!(stats.standard_workdays_for_month, dec("23"));
        assert_eq!(stats.standard_workdays_to_date, dec("4"));
    }

    #[test]
    fn test_ms_001_today_on_month_end() {
        let stats = monthly_statistics(
            make_date("2024-05-20"),
            &[],
            &[],
            &[],
            &StatisticsConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.standard_workdays_to_date, stats.standard_workdays_for_month);
    }

    // ==========================================================================
    // MS-002: Target and work done
    // ==========================================================================
    #[test]
    fn test_ms_002_target_adjusted_by_supplementary() {
        let entries = vec![
            entry("2024-04-22", "400"),
            entry("2024-04-23", "200"),
            // Previous fiscal month
            entry("2024-04-20", "4000"),
        ];
        let records = vec![
            supplementary("2024-04-22", None, Some("4"), None),
            supplementary("2024-04-23", Some("8"), None, Some("120")),
            // Negative and out-of-month values are ignored
            supplementary("2024-04-24", Some("-8"), Some("-2"), None),
            supplementary("2024-04-19", Some("8"), None, None),
        ];

        let stats = monthly_statistics(
            make_date("2024-04-25"),
            &quotas(),
            &entries,
            &records,
            &StatisticsConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.product_work_done, dec("1.5"));
        assert_eq!(stats.overtime_hours, dec("4"));
        assert_eq!(stats.leave_days, dec("1"));
        assert_eq!(stats.meeting_hours, dec("2"));
        // 4 + 4/8 - 1 - 2/8
        assert_eq!(stats.target_product_work, dec("3.25"));
        assert!(!stats.target_met());
    }

    #[test]
    fn test_ms_002_target_never_negative() {
        let records = vec![supplementary("2024-04-22", Some("80"), None, None)];
        let stats = monthly_statistics(
            make_date("2024-04-22"),
            &quotas(),
            &[],
            &records,
            &StatisticsConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.target_product_work, Decimal::ZERO);
        assert_eq!(stats.attainment_ratio, None);
        assert!(stats.target_met());
    }

    #[test]
    fn test_ms_002_entries_after_today_in_month_count() {
        let entries = vec![entry("2024-05-10", "400")];
        let stats = monthly_statistics(
            make_date("2024-04-25"),
            &quotas(),
            &entries,
            &[],
            &StatisticsConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.product_work_done, dec("1"));
        assert_eq!(stats.attainment_ratio, Some(dec("0.25")));
    }

    // ==========================================================================
    // MS-003: Configuration and rounding
    // ==========================================================================
    #[test]
    fn test_ms_003_custom_hours_per_workday() {
        let config = StatisticsConfig {
            hours_per_workday: dec("10"),
            ..StatisticsConfig::default()
        };
        let records = vec![supplementary("2024-04-22", Some("5"), Some("10"), None)];
        let stats =
            monthly_statistics(make_date("2024-04-25"), &[], &[], &records, &config).unwrap();

        assert_eq!(stats.leave_days, dec("0.5"));
        // 4 + 10/10 - 0.5
        assert_eq!(stats.target_product_work, dec("4.5"));
    }

    #[test]
    fn test_ms_003_rounded_copy() {
        let quotas = vec![Quota {
            id: "q-1".to_string(),
            stage_code: "CD01".to_string(),
            daily_quota: dec("3"),
            order: 0,
        }];
        let entries = vec![ProductionEntry {
            id: "p-1".to_string(),
            date: make_date("2024-04-22"),
            stage_code: "CD01".to_string(),
            quantity: dec("2"),
        }];
        let records = vec![supplementary("2024-04-22", None, None, Some("50"))];
        let stats = monthly_statistics(
            make_date("2024-04-25"),
            &quotas,
            &entries,
            &records,
            &StatisticsConfig::default(),
        )
        .unwrap();
        let rounded = stats.rounded(2);

        assert_eq!(rounded.product_work_done, dec("0.67"));
        assert_eq!(rounded.meeting_hours, dec("0.83"));
        assert_ne!(stats.product_work_done, rounded.product_work_done);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(dec("1"), dec("4")), dec("25"));
        assert_eq!(progress_percent(dec("8"), dec("4")), dec("100"));
        assert_eq!(progress_percent(dec("-1"), dec("4")), dec("0"));
        assert_eq!(progress_percent(dec("1"), dec("0")), dec("100"));
        assert_eq!(progress_percent(dec("0"), dec("0")), dec("0"));
    }

    // ==========================================================================
    // MS-004: Out-of-range inputs are rejected instead of overflowing
    // ==========================================================================
    #[test]
    fn test_ms_004_overtime_sum_overflow_is_invalid_record() {
        let max = "79228162514264337593543950335";
        let records = vec![
            supplementary("2024-04-22", None, Some(max), None),
            supplementary("2024-04-23", None, Some(max), None),
        ];
        let result = monthly_statistics(
            make_date("2024-04-25"),
            &[],
            &[],
            &records,
            &StatisticsConfig::default(),
        );

        match result {
            Err(EngineError::InvalidRecord { field, message }) => {
                assert_eq!(field, "overtime_hours");
                assert_eq!(message, "value out of range");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_ms_004_target_overflow_is_invalid_record() {
        // Each figure fits on its own; workdays plus overtime days do not
        let config = StatisticsConfig {
            hours_per_workday: dec("1"),
            ..StatisticsConfig::default()
        };
        let records = vec![supplementary(
            "2024-04-22",
            None,
            Some("79228162514264337593543950335"),
            None,
        )];
        let result = monthly_statistics(make_date("2024-04-25"), &[], &[], &records, &config);

        assert!(matches!(
            result,
            Err(EngineError::InvalidRecord { ref field, .. }) if field == "target_product_work"
        ));
    }

    #[test]
    fn test_ms_004_production_overflow_is_invalid_record() {
        let max = Decimal::MAX.to_string();
        let entries = vec![entry("2024-04-22", &max), entry("2024-04-23", &max)];
        let quotas = vec![Quota {
            daily_quota: dec("1"),
            ..quotas().remove(0)
        }];
        let result = monthly_statistics(
            make_date("2024-04-25"),
            &quotas,
            &entries,
            &[],
            &StatisticsConfig::default(),
        );

        assert!(matches!(result, Err(EngineError::InvalidRecord { .. })));
    }

    #[test]
    fn test_ms_004_zero_divisors_are_rejected() {
        let records = vec![supplementary("2024-04-22", Some("8"), None, Some("30"))];
        for config in [
            StatisticsConfig {
                hours_per_workday: Decimal::ZERO,
                ..StatisticsConfig::default()
            },
            StatisticsConfig {
                minutes_per_hour: Decimal::ZERO,
                ..StatisticsConfig::default()
            },
        ] {
            let result = monthly_statistics(make_date("2024-04-25"), &[], &[], &records, &config);
            assert!(
                matches!(result, Err(EngineError::InvalidConfig { .. })),
                "{result:?}"
            );
        }
    }

    #[test]
    fn test_ms_004_month_past_last_representable_year_is_rejected() {
        let result = monthly_statistics(NaiveDate::MAX, &[], &[], &[], &StatisticsConfig::default());
        assert!(matches!(result, Err(EngineError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_progress_percent_extreme_ratio() {
        assert_eq!(progress_percent(Decimal::MAX, dec("0.0000001")), dec("100"));
        assert_eq!(progress_percent(Decimal::MIN, dec("0.0000001")), dec("0"));
    }
}
