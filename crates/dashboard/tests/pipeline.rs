//! End-to-end pipeline tests over in-memory source tables, plus the
//! degraded-database path through a disconnected repository.

use core_types::{Cell, TabularResult};
use dashboard::{SourceTables, assemble, render};
use database::DbRepository;
use filters::FilterState;

fn table(columns: &[&str], rows: &[&[Cell]]) -> TabularResult {
    let mut t = TabularResult::with_columns(columns.iter().copied()).unwrap();
    for row in rows {
        t.push_row(row.to_vec()).unwrap();
    }
    t
}

/// Competitors in France and Spain, ranked 1 and 2.
fn sources() -> SourceTables {
    SourceTables {
        competitors: table(
            &["competitor_id", "name", "country"],
            &[
                &[Cell::Int(1), Cell::from("Fils"), Cell::from("France")],
                &[Cell::Int(2), Cell::from("Alcaraz"), Cell::from("Spain")],
            ],
        ),
        rankings: table(
            &["rank", "points", "competitor_id"],
            &[
                &[Cell::Int(1), Cell::Int(100), Cell::Int(1)],
                &[Cell::Int(2), Cell::Int(90), Cell::Int(2)],
            ],
        ),
        complexes: table(
            &["complex_id", "complex_name"],
            &[&[Cell::Int(7), Cell::from("Roland Garros")]],
        ),
        venues: table(
            &["venue_id", "venue_name", "complex_id"],
            &[&[Cell::Int(70), Cell::from("Court Philippe-Chatrier"), Cell::Int(7)]],
        ),
        categories: table(
            &["category_id", "category_name"],
            &[&[Cell::Int(3), Cell::from("ATP")]],
        ),
        competitions: table(
            &["competition_id", "competition_name", "category_id"],
            &[&[Cell::Int(30), Cell::from("French Open"), Cell::Int(3)]],
        ),
    }
}

#[test]
fn unfiltered_view_shows_everything() {
    let view = assemble(&sources(), &FilterState::default());
    assert_eq!(view.rankings.row_count(), 2);
    assert_eq!(view.top_players.row_count(), 2);
    assert_eq!(view.venues.row_count(), 1);
    assert_eq!(view.competitions.row_count(), 1);
    assert_eq!(view.active_country, "All");
    assert_eq!(view.active_category, "All");
    assert!(view.diagnostics.is_empty());
}

#[test]
fn country_filter_restricts_rankings_but_not_the_top_ten() {
    let mut state = FilterState::default();
    state.apply(Some("France".into()), None);
    let view = assemble(&sources(), &state);

    // Exactly the one French row survives the filter.
    assert_eq!(view.rankings.row_count(), 1);
    assert_eq!(view.rankings.cell(0, "competitor_id"), Some(&Cell::Int(1)));
    assert_eq!(view.active_country, "France");

    // The top-10 snapshot still holds both rows, ordered by rank ascending.
    assert_eq!(view.top_players.row_count(), 2);
    assert_eq!(view.top_players.cell(0, "rank"), Some(&Cell::Int(1)));
    assert_eq!(view.top_players.cell(1, "rank"), Some(&Cell::Int(2)));
}

#[test]
fn top_ten_and_charts_are_independent_of_the_filter_state() {
    let unfiltered = assemble(&sources(), &FilterState::default());
    let mut state = FilterState::default();
    state.apply(Some("Spain".into()), Some("ATP".into()));
    let filtered = assemble(&sources(), &state);

    assert_eq!(filtered.top_players, unfiltered.top_players);
    assert_eq!(filtered.country_histogram, unfiltered.country_histogram);
    assert_eq!(filtered.points_bar, unfiltered.points_bar);
}

#[test]
fn venue_view_ignores_both_filters() {
    let mut state = FilterState::default();
    state.apply(Some("France".into()), Some("WTA".into()));
    let view = assemble(&sources(), &state);
    assert_eq!(view.venues.row_count(), 1);
    assert_eq!(
        view.venues.cell(0, "complex_name"),
        Some(&Cell::from("Roland Garros"))
    );
}

#[test]
fn category_filter_restricts_competitions() {
    let mut state = FilterState::default();
    state.apply(None, Some("WTA".into()));
    let view = assemble(&sources(), &state);
    // Stale/absent category: zero rows, not an error.
    assert!(view.competitions.is_empty());

    state.apply(None, Some("ATP".into()));
    let view = assemble(&sources(), &state);
    assert_eq!(view.competitions.row_count(), 1);
    assert_eq!(view.active_category, "ATP");
}

#[test]
fn clearing_filters_restores_the_full_view() {
    let mut state = FilterState::default();
    state.apply(Some("France".into()), Some("ATP".into()));
    assert_eq!(assemble(&sources(), &state).rankings.row_count(), 1);

    state.clear();
    let view = assemble(&sources(), &state);
    assert_eq!(view.rankings.row_count(), 2);
    assert_eq!(view.active_country, "All");
}

#[test]
fn charts_are_built_from_the_unfiltered_data() {
    let view = assemble(&sources(), &FilterState::default());
    let labels: Vec<_> = view
        .country_histogram
        .buckets
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(labels, vec!["France", "Spain"]);
    assert_eq!(view.points_bar.bars.len(), 2);
    assert_eq!(view.points_bar.bars[0].label, "Fils");
}

#[test]
fn missing_source_table_empties_only_its_derived_view() {
    let mut tables = sources();
    tables.competitors = TabularResult::empty();
    let view = assemble(&tables, &FilterState::default());
    assert!(view.rankings.is_empty());
    assert!(view.top_players.is_empty());
    assert_eq!(view.venues.row_count(), 1);
    assert_eq!(view.competitions.row_count(), 1);
}

#[tokio::test]
async fn disconnected_database_renders_an_empty_dashboard_with_warnings() {
    let repo = DbRepository::disconnected();
    let view = render(&repo, &FilterState::default()).await;

    assert!(view.rankings.is_empty());
    assert!(view.top_players.is_empty());
    assert!(view.venues.is_empty());
    assert!(view.competitions.is_empty());
    assert!(view.country_histogram.buckets.is_empty());
    assert!(view.points_bar.bars.is_empty());
    // One warning per failed source table, surfaced for the user.
    assert_eq!(view.diagnostics.len(), 6);
}
