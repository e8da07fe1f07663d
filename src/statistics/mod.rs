//! Production statistics.
//!
//! Turns stored records into work amounts, weekly production summaries and
//! monthly statistics, using the fiscal calendar for the periods.

mod monthly;
mod weekly;
mod work_amount;

pub use monthly::{MonthlyStatistics, monthly_statistics, progress_percent};
pub use weekly::{
    DailyProduction, EntryWorkAmount, ProductionOverview, WeeklyProduction, production_overview,
    summarize_week,
};
pub use work_amount::{total_work_amount, work_amount};
