//! # Courtside Core Types
//!
//! Foundational data structures shared by every other crate in the workspace.
//! The central type is [`TabularResult`], a dynamically-typed, column-ordered
//! table. Result sets come back from `SELECT *` queries, so column names and
//! types are only known at runtime; every component downstream of the data
//! access layer (joins, filters, top-N selection, chart builders) operates on
//! this one representation.

pub mod cell;
pub mod error;
pub mod table;

// Re-export the core types to provide a clean public API.
pub use cell::Cell;
pub use error::CoreError;
pub use table::TabularResult;
