//! Core data models for the Estron engine.
//!
//! This module contains the stored records: stage quotas, daily production
//! entries and supplementary leave/overtime/meeting data.

mod production_entry;
mod quota;
mod supplementary;

pub use production_entry::{NewProductionEntry, ProductionEntry};
pub use quota::{NewQuota, Quota};
pub(crate) use quota::{normalize_stage_code, validate_quota_fields};
pub use supplementary::{DailySupplementaryData, FieldUpdate, SupplementaryUpdate};
