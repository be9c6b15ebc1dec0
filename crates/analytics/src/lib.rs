//! # Courtside Analytics
//!
//! The relational heart of the dashboard: a stable left outer join over
//! [`core_types::TabularResult`]s, the top-N ranking selector, and the two
//! chart data builders. Everything here is pure and synchronous; errors are
//! limited to schema mismatches (a join key missing from a non-empty input).

pub mod charts;
pub mod error;
pub mod join;
pub mod ranking;

// Re-export the key components to create a clean, public-facing API.
pub use charts::{country_histogram, points_bar, Bar, BarChartSpec, HistogramBucket, HistogramSpec};
pub use error::AnalyticsError;
pub use join::join_left;
pub use ranking::top_n;
