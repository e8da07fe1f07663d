//! Work amount of a production entry.
//!
//! One unit of work is one stage quota's worth of output, so an entry's
//! work amount is its quantity divided by the stage's daily quota.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ProductionEntry, Quota};

/// Returns the work amount of `entry`, or `None` if no quota with a positive
/// daily value exists for its stage.
///
/// The stage code must match the quota's exactly.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] for `quantity` if the quotient does
/// not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use estron_engine::models::{ProductionEntry, Quota};
/// use estron_engine::statistics::work_amount;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let quotas = vec![Quota {
///     id: "q-001".to_string(),
///     stage_code: "CD01".to_string(),
///     daily_quota: Decimal::new(400, 0),
///     order: 0,
/// }];
/// let entry = ProductionEntry {
///     id: "p-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 4, 22).unwrap(),
///     stage_code: "CD01".to_string(),
///     quantity: Decimal::new(500, 0),
/// };
/// assert_eq!(work_amount(&entry, &quotas).unwrap(), Some(Decimal::new(125, 2)));
/// ```
pub fn work_amount(entry: &ProductionEntry, quotas: &[Quota]) -> EngineResult<Option<Decimal>> {
    let Some(quota) = quotas.iter().find(|q| q.stage_code == entry.stage_code) else {
        return Ok(None);
    };
    if quota.daily_quota <= Decimal::ZERO {
        return Ok(None);
    }
    entry
        .quantity
        .checked_div(quota.daily_quota)
        .map(Some)
        .ok_or_else(|| out_of_range("quantity"))
}

/// Sums the work amounts of `entries`; entries without a usable quota count zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] if an amount or the total does not
/// fit in a `Decimal`.
pub fn total_work_amount<'a, I>(entries: I, quotas: &[Quota]) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = &'a ProductionEntry>,
{
    entries
        .into_iter()
        .try_fold(Decimal::ZERO, |total, entry| match work_amount(entry, quotas)? {
            Some(amount) => total
                .checked_add(amount)
                .ok_or_else(|| out_of_range("work_amount")),
            None => Ok(total),
        })
}

/// Adds up `values`, failing instead of overflowing.
pub(crate) fn checked_sum<I>(values: I, field: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |total, value| {
        total.checked_add(value).ok_or_else(|| out_of_range(field))
    })
}

/// The error reported when a figure derived from `field` leaves `Decimal`'s range.
pub(crate) fn out_of_range(field: &str) -> EngineError {
    EngineError::InvalidRecord {
        field: field.to_string(),
        message: "value out of range".to_string(),
    }
}
