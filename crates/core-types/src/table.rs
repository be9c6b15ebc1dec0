use crate::cell::Cell;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// An ordered, dynamically-typed result set: a column list plus zero or more
/// rows of [`Cell`]s.
///
/// The empty table (zero rows, zero columns) is the universal fallback value
/// of the data access layer; every consumer must treat it as valid input, not
/// as an error condition. Row order is significant and preserved by every
/// operation in the workspace (joins are stable, filters keep survivor order,
/// the top-N sort is stable).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularResult {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TabularResult {
    /// The empty result: zero rows, zero columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table with the given column names and no rows yet.
    pub fn with_columns<I, S>(columns: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(CoreError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Appends a row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), CoreError> {
        if row.len() != self.columns.len() {
            return Err(CoreError::RowArityMismatch {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// A table is empty when it holds no rows. The zero-column fallback value
    /// is therefore empty, but so is a well-formed table whose query matched
    /// nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `(row, column-name)`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Builds a new table with the same columns, keeping only the rows the
    /// predicate accepts. Row order is preserved; `self` is untouched.
    pub fn filtered<F>(&self, mut keep: F) -> TabularResult
    where
        F: FnMut(&[Cell]) -> bool,
    {
        TabularResult {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row.as_slice()))
                .cloned()
                .collect(),
        }
    }

    /// Builds a new table with the same columns and rows reordered/truncated
    /// by the given owned row set. Used by the top-N selector.
    pub fn with_rows(&self, rows: Vec<Vec<Cell>>) -> TabularResult {
        TabularResult {
            columns: self.columns.clone(),
            rows,
        }
    }
}
