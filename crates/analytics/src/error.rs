use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Join key column '{key}' is missing from the {side} input.")]
    MissingJoinKey { key: String, side: &'static str },

    #[error("Failed to assemble the joined table: {0}")]
    Table(#[from] CoreError),
}
