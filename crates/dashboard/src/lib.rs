//! # Courtside Dashboard
//!
//! The render pipeline. One user interaction triggers one full synchronous
//! re-evaluation: fetch the six source tables, build the three derived views,
//! apply the session filter state, and hand the presentation layer a complete
//! [`DashboardView`]. The pipeline itself never fails: upstream errors arrive
//! pre-collapsed as empty tables, and every stage treats empty input as a
//! first-class value.

pub mod pipeline;
pub mod view;

// Re-export the key components to create a clean, public-facing API.
pub use pipeline::{TOP_N, assemble, load_source_tables, render};
pub use view::{DashboardView, SourceTables};
