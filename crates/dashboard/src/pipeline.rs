use crate::view::{DashboardView, SourceTables};
use analytics::{country_histogram, join_left, points_bar, top_n};
use core_types::TabularResult;
use database::DbRepository;
use filters::{FilterState, filter_by_category, filter_by_country};

/// Size of the "top players" snapshot.
pub const TOP_N: usize = 10;

/// Fetches the six source tables for this render cycle. Repeated cycles hit
/// the repository's session cache rather than the database.
pub async fn load_source_tables(repo: &DbRepository) -> SourceTables {
    SourceTables {
        competitors: repo.fetch_competitors().await,
        rankings: repo.fetch_rankings().await,
        complexes: repo.fetch_complexes().await,
        venues: repo.fetch_venues().await,
        categories: repo.fetch_categories().await,
        competitions: repo.fetch_competitions().await,
    }
}

/// Builds the complete dashboard view from raw tables and the session filter
/// state. Pure and synchronous; this is the whole per-cycle computation.
///
/// The top-10 snapshot and both charts are deliberately computed over the
/// unfiltered ranked view, matching the dashboard's documented behavior of
/// showing overall leaders and the overall country distribution even while a
/// filter is active.
pub fn assemble(tables: &SourceTables, state: &FilterState) -> DashboardView {
    let mut diagnostics = Vec::new();

    let ranked = derived_view(
        &tables.rankings,
        &tables.competitors,
        "competitor_id",
        &mut diagnostics,
    );
    let venues = derived_view(
        &tables.venues,
        &tables.complexes,
        "complex_id",
        &mut diagnostics,
    );
    let competitions = derived_view(
        &tables.competitions,
        &tables.categories,
        "category_id",
        &mut diagnostics,
    );

    let top_players = top_n(&ranked, TOP_N);

    DashboardView {
        country_histogram: country_histogram(&ranked),
        points_bar: points_bar(&top_players),
        rankings: filter_by_country(&ranked, state),
        competitions: filter_by_category(&competitions, state),
        top_players,
        venues,
        active_country: state.country().unwrap_or("All").to_string(),
        active_category: state.category().unwrap_or("All").to_string(),
        diagnostics,
    }
}

/// One full render cycle: fetch, assemble, and attach the diagnostics the
/// data access layer collected while collapsing errors.
pub async fn render(repo: &DbRepository, state: &FilterState) -> DashboardView {
    let tables = load_source_tables(repo).await;
    let mut view = assemble(&tables, state);
    let mut fetch_diagnostics = repo.take_diagnostics();
    fetch_diagnostics.append(&mut view.diagnostics);
    view.diagnostics = fetch_diagnostics;
    view
}

/// A derived view is only built when both sides hold data; otherwise it is
/// empty. A join that fails on a schema mismatch also degrades to empty, with
/// a diagnostic, rather than failing the render.
fn derived_view(
    left: &TabularResult,
    right: &TabularResult,
    key: &str,
    diagnostics: &mut Vec<String>,
) -> TabularResult {
    if left.is_empty() || right.is_empty() {
        return TabularResult::empty();
    }
    match join_left(left, right, key) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!(key, error = %e, "derived view degraded to empty");
            diagnostics.push(format!("Error building view: {e}"));
            TabularResult::empty()
        }
    }
}
