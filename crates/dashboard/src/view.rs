use analytics::{BarChartSpec, HistogramSpec};
use core_types::TabularResult;
use serde::{Deserialize, Serialize};

/// The six raw tables as fetched (or not) this render cycle.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub competitors: TabularResult,
    pub rankings: TabularResult,
    pub complexes: TabularResult,
    pub venues: TabularResult,
    pub categories: TabularResult,
    pub competitions: TabularResult,
}

/// Everything the presentation layer needs for one render cycle: four tabular
/// panels, two chart specifications, the active-filter labels for the status
/// banner, and any diagnostics to surface as warnings.
///
/// `rankings` and `competitions` honor the session filter; `top_players`,
/// `venues` and both charts are always computed from the unfiltered data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// Ranked competitors, restricted to the active country filter.
    pub rankings: TabularResult,
    /// The overall top 10 by rank, independent of any filter.
    pub top_players: TabularResult,
    /// Venues joined with their complexes; never filtered.
    pub venues: TabularResult,
    /// Competitions joined with categories, restricted to the active category.
    pub competitions: TabularResult,
    /// Players-per-country distribution over the unfiltered data.
    pub country_histogram: HistogramSpec,
    /// Top-10 points totals, in rank order.
    pub points_bar: BarChartSpec,
    /// "All" when no country filter is active.
    pub active_country: String,
    /// "All" when no category filter is active.
    pub active_category: String,
    /// User-visible warnings (e.g. a table that failed to load).
    pub diagnostics: Vec<String>,
}
