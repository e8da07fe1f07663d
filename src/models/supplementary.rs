//! Supplementary daily data: leave, overtime and meeting time.
//!
//! Each field is optional. Updates are expressed with [`FieldUpdate`] so that
//! "leave unchanged" and "clear the value" are distinct, and an absent value
//! is never confused with zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Leave, overtime and meeting time recorded for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySupplementaryData {
    /// The day; at most one record exists per date.
    pub date: NaiveDate,
    /// Hours of leave taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_hours: Option<Decimal>,
    /// Hours of overtime worked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<Decimal>,
    /// Minutes spent in meetings or training.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_minutes: Option<Decimal>,
}

impl DailySupplementaryData {
    /// Creates an empty record for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            leave_hours: None,
            overtime_hours: None,
            meeting_minutes: None,
        }
    }

    /// Returns true if no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.leave_hours.is_none() && self.overtime_hours.is_none() && self.meeting_minutes.is_none()
    }

    /// Returns a copy with `update` merged in.
    ///
    /// # Example
    ///
    /// ```
    /// use estron_engine::models::{DailySupplementaryData, FieldUpdate, SupplementaryUpdate};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 4, 22).unwrap();
    /// let mut record = DailySupplementaryData::empty(date);
    /// record.leave_hours = Some(Decimal::new(4, 0));
    ///
    /// let mut update = SupplementaryUpdate::new(date);
    /// update.overtime_hours = FieldUpdate::Set(Decimal::new(2, 0));
    ///
    /// let merged = record.merged(&update);
    /// assert_eq!(merged.leave_hours, Some(Decimal::new(4, 0)));
    /// assert_eq!(merged.overtime_hours, Some(Decimal::new(2, 0)));
    /// ```
    pub fn merged(&self, update: &SupplementaryUpdate) -> Self {
        Self {
            date: self.date,
            leave_hours: update.leave_hours.apply(self.leave_hours),
            overtime_hours: update.overtime_hours.apply(self.overtime_hours),
            meeting_minutes: update.meeting_minutes.apply(self.meeting_minutes),
        }
    }
}

/// How a single optional field should change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "value")]
pub enum FieldUpdate<T> {
    /// Keep the stored value (or absence).
    #[default]
    Keep,
    /// Remove the stored value.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T: Copy> FieldUpdate<T> {
    /// Applies the update to a current value.
    pub fn apply(&self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Keep => current,
            FieldUpdate::Clear => None,
            FieldUpdate::Set(value) => Some(*value),
        }
    }
}

/// A patch against the supplementary record of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryUpdate {
    /// The day to update.
    pub date: NaiveDate,
    /// Change to the leave hours.
    #[serde(default)]
    pub leave_hours: FieldUpdate<Decimal>,
    /// Change to the overtime hours.
    #[serde(default)]
    pub overtime_hours: FieldUpdate<Decimal>,
    /// Change to the meeting minutes.
    #[serde(default)]
    pub meeting_minutes: FieldUpdate<Decimal>,
}

impl SupplementaryUpdate {
    /// Creates an update for `date` that keeps every field.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            leave_hours: FieldUpdate::Keep,
            overtime_hours: FieldUpdate::Keep,
            meeting_minutes: FieldUpdate::Keep,
        }
    }
}
