use core_types::TabularResult;
use rust_decimal::Decimal;

/// Selects the top `n` rows of a ranked-competitor view, ordered by the
/// numeric `rank` column ascending (rank 1 is best). Null or non-numeric ranks
/// sort last; ties keep their original relative order (stable sort).
///
/// This runs over the unfiltered view on purpose: the "Top 10" panel shows the
/// overall leaders regardless of any active country filter. Inputs without a
/// `rank` column pass through truncated, which only happens when the rankings
/// table itself failed to load and the view is empty anyway.
pub fn top_n(rows: &TabularResult, n: usize) -> TabularResult {
    let Some(rank_idx) = rows.column_index("rank") else {
        return rows.clone();
    };

    // `as_number` covers both INT and DECIMAL rank columns.
    let mut ordered: Vec<Vec<core_types::Cell>> = rows.rows().to_vec();
    ordered.sort_by_key(|row| match row[rank_idx].as_number() {
        Some(rank) => (false, rank),
        None => (true, Decimal::ZERO),
    });
    ordered.truncate(n);
    rows.with_rows(ordered)
}
