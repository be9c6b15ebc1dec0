use crate::state::FilterState;
use core_types::TabularResult;

/// Restricts a ranked-competitor view to the country stored in `state`.
///
/// Identity pass-through when filters are not applied, when no country was
/// submitted, or when the input is empty. Otherwise only rows whose `country`
/// cell equals the stored value survive: an exact, case-sensitive match with
/// no normalization. The input is never mutated and survivor order is preserved.
pub fn filter_by_country(rows: &TabularResult, state: &FilterState) -> TabularResult {
    filter_by_column(rows, "country", state.country())
}

/// Restricts a competition view to the category stored in `state`.
/// Same pass-through and matching rules as [`filter_by_country`].
pub fn filter_by_category(rows: &TabularResult, state: &FilterState) -> TabularResult {
    filter_by_column(rows, "category_name", state.category())
}

fn filter_by_column(rows: &TabularResult, column: &str, wanted: Option<&str>) -> TabularResult {
    let Some(wanted) = wanted else {
        return rows.clone();
    };
    if rows.is_empty() {
        return rows.clone();
    }
    let Some(idx) = rows.column_index(column) else {
        // A view without the filter column cannot match; showing it unfiltered
        // beats silently hiding everything.
        tracing::warn!(column, "filter column missing from view, passing through");
        return rows.clone();
    };
    rows.filtered(|row| row[idx].as_str() == Some(wanted))
}
