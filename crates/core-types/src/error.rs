use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Row has {got} cells but the table has {expected} columns.")]
    RowArityMismatch { expected: usize, got: usize },

    #[error("Duplicate column name in table definition: {0}")]
    DuplicateColumn(String),
}
