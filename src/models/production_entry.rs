//! Production entry model.
//!
//! A production entry records the quantity produced for one stage on one
//! day. There is at most one entry per `(date, stage_code)`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Quantity produced for a stage on a day.
///
/// # Example
///
/// ```
/// use estron_engine::models::ProductionEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = ProductionEntry {
///     id: "p-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 4, 22).unwrap(),
///     stage_code: "CD01".to_string(),
///     quantity: Decimal::new(380, 0),
/// };
/// assert!(entry.is_for(NaiveDate::from_ymd_opt(2024, 4, 22).unwrap(), "CD01"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The production day.
    pub date: NaiveDate,
    /// The stage code, referencing [`Quota::stage_code`](super::Quota::stage_code).
    pub stage_code: String,
    /// Units produced.
    pub quantity: Decimal,
}

impl ProductionEntry {
    /// Returns true if this entry is keyed by `(date, stage_code)`.
    pub fn is_for(&self, date: NaiveDate, stage_code: &str) -> bool {
        self.date == date && self.stage_code == stage_code
    }
}

/// Input for recording production; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductionEntry {
    /// The production day.
    pub date: NaiveDate,
    /// The stage code.
    pub stage_code: String,
    /// Units produced.
    pub quantity: Decimal,
}

impl NewProductionEntry {
    /// Validates the entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] for a blank stage code or a
    /// negative quantity.
    pub fn validate(&self) -> EngineResult<()> {
        if self.stage_code.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "stage_code".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.quantity < Decimal::ZERO {
            return Err(EngineError::InvalidRecord {
                field: "quantity".to_string(),
                message: format!("must not be negative, got {}", self.quantity),
            });
        }
        Ok(())
    }
}
