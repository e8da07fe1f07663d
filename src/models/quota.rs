//! Quota model.
//!
//! A quota is the expected daily output for one production stage. Dividing
//! a day's quantity by the quota gives the work amount for that stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A daily production quota for a stage.
///
/// # Example
///
/// ```
/// use estron_engine::models::Quota;
/// use rust_decimal::Decimal;
///
/// let quota = Quota {
///     id: "q-001".to_string(),
///     stage_code: "CD01".to_string(),
///     daily_quota: Decimal::new(400, 0),
///     order: 0,
/// };
/// assert!(quota.matches_stage(" cd01 "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    /// Unique identifier for the quota.
    pub id: String,
    /// The stage code entered by the user; unique ignoring case and padding.
    pub stage_code: String,
    /// Units expected per standard workday.
    pub daily_quota: Decimal,
    /// Display position, 0-based.
    #[serde(default)]
    pub order: u32,
}

impl Quota {
    /// Returns true if `code` names this quota's stage, ignoring case and
    /// surrounding whitespace.
    pub fn matches_stage(&self, code: &str) -> bool {
        normalize_stage_code(&self.stage_code) == normalize_stage_code(code)
    }
}

/// Input for creating a quota; the id and order are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuota {
    /// The stage code.
    pub stage_code: String,
    /// Units expected per standard workday.
    pub daily_quota: Decimal,
}

impl NewQuota {
    /// Validates the stage code and quota value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] if the stage code is blank or
    /// the daily quota is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        validate_quota_fields(&self.stage_code, self.daily_quota)
    }
}

pub(crate) fn validate_quota_fields(stage_code: &str, daily_quota: Decimal) -> EngineResult<()> {
    if stage_code.trim().is_empty() {
        return Err(EngineError::InvalidRecord {
            field: "stage_code".to_string(),
            message: "must not be blank".to_string(),
        });
    }
    if daily_quota <= Decimal::ZERO {
        return Err(EngineError::InvalidRecord {
            field: "daily_quota".to_string(),
            message: format!("must be positive, got {}", daily_quota),
        });
    }
    Ok(())
}

/// Canonical form used to compare stage codes.
pub(crate) fn normalize_stage_code(code: &str) -> String {
    code.trim().to_lowercase()
}
