//! # Courtside Database Crate
//!
//! The data access layer: a pooled, read-only MySQL client for the six tennis
//! tables. This crate owns the one hard boundary of the system: database
//! failures stop here. `DbRepository::fetch_table` is internally fallible but
//! collapses every `DbError` into an empty `TabularResult` plus a recorded
//! diagnostic, so downstream components never branch on errors at all.
//!
//! ## Public API
//!
//! - `connect`: builds the shared `MySqlPool` from settings (or `DATABASE_URL`).
//! - `DbRepository`: session-scoped repository with a per-query result cache
//!   and typed helpers for the six fixed tables.
//! - `DbError`: the specific error types that can arise inside this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::{DbRepository, queries};
