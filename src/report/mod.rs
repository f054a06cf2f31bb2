//! Summaries and tabular output built from projection points

mod format;
pub mod output;
mod summary;

pub use format::{doubling_time_years, format_currency};
pub use output::{write_points_csv, write_results_csv};
pub use summary::{summarize, ProjectionSummary};
