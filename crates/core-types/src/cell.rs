use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dynamically-typed value inside a [`crate::TabularResult`].
///
/// The source tables are fetched with `SELECT *`, so cell types are decoded at
/// runtime. `Null` is a first-class value: nullable columns (e.g. a
/// competitor's `country`) and unmatched sides of a left join both produce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Number(Decimal),
    Text(String),
    Null,
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Returns the text content, or `None` for every non-text variant.
    /// Filtering compares text cells verbatim, so no coercion happens here.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, widening is not attempted for `Number`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a `Decimal` where a lossless view exists.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(d) => Some(*d),
            Cell::Int(v) => Some(Decimal::from(*v)),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Number(d) => write!(f, "{d}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Null => Ok(()),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<Decimal> for Cell {
    fn from(d: Decimal) -> Self {
        Cell::Number(d)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accessors_reject_other_variants() {
        assert_eq!(Cell::Int(7).as_str(), None);
        assert_eq!(Cell::Text("FRA".into()).as_int(), None);
        assert_eq!(Cell::Null.as_number(), None);
    }

    #[test]
    fn int_widens_to_number() {
        assert_eq!(Cell::Int(100).as_number(), Some(dec!(100)));
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        let absent: Option<String> = None;
        assert_eq!(Cell::from(absent), Cell::Null);
        assert_eq!(Cell::from(Some("Spain")), Cell::Text("Spain".into()));
    }
}
