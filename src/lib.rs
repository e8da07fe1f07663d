//! Estron fiscal calendar and production statistics engine.
//!
//! This crate derives Estron fiscal months (21st to 20th) and their
//! Monday-start weeks from calendar dates, counts weighted standard workdays,
//! and turns stored quotas, production entries and supplementary records into
//! weekly production summaries and monthly statistics.
//!
//! # Example
//!
//! ```
//! use estron_engine::calendar::{count_standard_workdays, get_visible_weeks};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 4, 25).unwrap();
//! let weeks = get_visible_weeks(date).unwrap();
//! assert_eq!(weeks.fiscal_month.fiscal_month, 5);
//! assert_eq!(weeks.current_week.week_index, 2);
//!
//! let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
//! assert_eq!(count_standard_workdays(start, end).unwrap(), Decimal::new(55, 1));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod statistics;
pub mod storage;
