//! # Courtside Filters
//!
//! Session-scoped filter state plus the engine that applies it to derived
//! views. The state is an explicit value object threaded through the render
//! pipeline on every interaction cycle; only the two user actions
//! ([`FilterState::apply`] and [`FilterState::clear`]) mutate it.

pub mod engine;
pub mod state;

// Re-export the core types to provide a clean public API.
pub use engine::{filter_by_category, filter_by_country};
pub use state::FilterState;
