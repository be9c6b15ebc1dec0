use crate::error::AnalyticsError;
use core_types::{Cell, TabularResult};
use std::collections::HashMap;

/// Standard left outer join of two tabular results on a shared key column.
///
/// Every row of `left` appears exactly once in the output, in its original
/// order (stable join). Right-side columns other than the key are appended;
/// they are populated from the first right row whose key matches, and
/// null-filled when nothing matches. Unmatched right rows are dropped. A right
/// column whose name collides with a left column is suffixed with `_right`.
///
/// Edge cases: an empty `left` yields the empty result; an empty `right`
/// yields `left` unchanged, since an empty result carries no columns to
/// null-fill. Null key cells never match anything.
///
/// The only error is a schema mismatch: `key` absent from a non-empty input.
pub fn join_left(
    left: &TabularResult,
    right: &TabularResult,
    key: &str,
) -> Result<TabularResult, AnalyticsError> {
    if left.is_empty() {
        return Ok(TabularResult::empty());
    }
    if right.is_empty() {
        return Ok(left.clone());
    }

    let left_key = left
        .column_index(key)
        .ok_or_else(|| AnalyticsError::MissingJoinKey {
            key: key.to_string(),
            side: "left",
        })?;
    let right_key = right
        .column_index(key)
        .ok_or_else(|| AnalyticsError::MissingJoinKey {
            key: key.to_string(),
            side: "right",
        })?;

    // Right columns that survive into the output: everything but the key,
    // renamed on collision with a left column.
    let carried: Vec<(usize, String)> = right
        .columns()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != right_key)
        .map(|(i, name)| {
            let mut name = name.clone();
            while left.column_index(&name).is_some() {
                name.push_str("_right");
            }
            (i, name)
        })
        .collect();

    // First match wins, so duplicate right keys cannot multiply left rows.
    let mut lookup: HashMap<&Cell, &[Cell]> = HashMap::with_capacity(right.row_count());
    for row in right.rows() {
        let k = &row[right_key];
        if !k.is_null() {
            lookup.entry(k).or_insert(row.as_slice());
        }
    }

    let mut columns: Vec<String> = left.columns().to_vec();
    columns.extend(carried.iter().map(|(_, name)| name.clone()));
    let mut joined = TabularResult::with_columns(columns)?;

    for row in left.rows() {
        let mut out = row.clone();
        match lookup.get(&row[left_key]) {
            Some(matched) => out.extend(carried.iter().map(|(i, _)| matched[*i].clone())),
            None => out.extend(std::iter::repeat_n(Cell::Null, carried.len())),
        }
        joined.push_row(out)?;
    }

    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rankings() -> TabularResult {
        let mut t = TabularResult::with_columns(["rank", "points", "competitor_id"]).unwrap();
        t.push_row(vec![Cell::Int(1), Cell::Int(9830), Cell::Int(101)])
            .unwrap();
        t.push_row(vec![Cell::Int(2), Cell::Int(8420), Cell::Int(102)])
            .unwrap();
        t.push_row(vec![Cell::Int(3), Cell::Int(7100), Cell::Int(999)])
            .unwrap();
        t
    }

    fn competitors() -> TabularResult {
        let mut t = TabularResult::with_columns(["competitor_id", "name", "country"]).unwrap();
        t.push_row(vec![Cell::Int(102), Cell::from("Sinner"), Cell::from("Italy")])
            .unwrap();
        t.push_row(vec![Cell::Int(101), Cell::from("Alcaraz"), Cell::from("Spain")])
            .unwrap();
        t
    }

    #[test]
    fn every_left_row_appears_exactly_once_in_left_order() {
        let joined = join_left(&rankings(), &competitors(), "competitor_id").unwrap();
        assert_eq!(joined.row_count(), 3);
        // Left-derived fields are untouched and stay in left order.
        assert_eq!(joined.cell(0, "rank"), Some(&Cell::Int(1)));
        assert_eq!(joined.cell(0, "name"), Some(&Cell::from("Alcaraz")));
        assert_eq!(joined.cell(1, "name"), Some(&Cell::from("Sinner")));
    }

    #[test]
    fn unmatched_left_rows_are_null_filled() {
        let joined = join_left(&rankings(), &competitors(), "competitor_id").unwrap();
        assert_eq!(joined.cell(2, "name"), Some(&Cell::Null));
        assert_eq!(joined.cell(2, "country"), Some(&Cell::Null));
        assert_eq!(joined.cell(2, "rank"), Some(&Cell::Int(3)));
    }

    #[test]
    fn key_column_appears_once_in_the_output() {
        let joined = join_left(&rankings(), &competitors(), "competitor_id").unwrap();
        let key_columns = joined
            .columns()
            .iter()
            .filter(|c| c.as_str() == "competitor_id")
            .count();
        assert_eq!(key_columns, 1);
    }

    #[test]
    fn empty_left_yields_empty() {
        let joined = join_left(&TabularResult::empty(), &competitors(), "competitor_id").unwrap();
        assert_eq!(joined, TabularResult::empty());
    }

    #[test]
    fn empty_right_yields_left_unchanged() {
        let left = rankings();
        let joined = join_left(&left, &TabularResult::empty(), "competitor_id").unwrap();
        assert_eq!(joined, left);
    }

    #[test]
    fn missing_key_in_either_side_is_reported() {
        let err = join_left(&rankings(), &competitors(), "venue_id").unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::MissingJoinKey { key, side: "left" } if key == "venue_id"
        ));
    }

    #[test]
    fn duplicate_right_keys_do_not_multiply_left_rows() {
        let mut right = TabularResult::with_columns(["competitor_id", "name"]).unwrap();
        right
            .push_row(vec![Cell::Int(101), Cell::from("first")])
            .unwrap();
        right
            .push_row(vec![Cell::Int(101), Cell::from("second")])
            .unwrap();
        let joined = join_left(&rankings(), &right, "competitor_id").unwrap();
        assert_eq!(joined.row_count(), 3);
        assert_eq!(joined.cell(0, "name"), Some(&Cell::from("first")));
    }

    #[test]
    fn colliding_right_columns_get_suffixed() {
        let mut left = TabularResult::with_columns(["venue_id", "name", "complex_id"]).unwrap();
        left.push_row(vec![Cell::Int(1), Cell::from("Centre Court"), Cell::Int(7)])
            .unwrap();
        let mut right = TabularResult::with_columns(["complex_id", "name"]).unwrap();
        right
            .push_row(vec![Cell::Int(7), Cell::from("All England Club")])
            .unwrap();
        let joined = join_left(&left, &right, "complex_id").unwrap();
        assert_eq!(
            joined.columns(),
            &["venue_id", "name", "complex_id", "name_right"]
        );
        assert_eq!(
            joined.cell(0, "name_right"),
            Some(&Cell::from("All England Club"))
        );
    }

    #[test]
    fn null_keys_never_match() {
        let mut left = TabularResult::with_columns(["rank", "competitor_id"]).unwrap();
        left.push_row(vec![Cell::Int(1), Cell::Null]).unwrap();
        let mut right = TabularResult::with_columns(["competitor_id", "name"]).unwrap();
        right.push_row(vec![Cell::Null, Cell::from("nobody")]).unwrap();
        let joined = join_left(&left, &right, "competitor_id").unwrap();
        assert_eq!(joined.cell(0, "name"), Some(&Cell::Null));
    }
}
