use crate::error::DbError;
use core_types::{Cell, TabularResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::{Column, Row, TypeInfo};
use std::collections::HashMap;
use std::sync::Mutex;

/// The six fixed, read-only queries this dashboard issues. Everything is a
/// plain `SELECT *`; column names and types are discovered at runtime.
pub mod queries {
    pub const COMPETITORS: &str = "SELECT * FROM competitors";
    pub const RANKINGS: &str = "SELECT * FROM competitor_rankings";
    pub const COMPLEXES: &str = "SELECT * FROM complexes";
    pub const VENUES: &str = "SELECT * FROM venues";
    pub const CATEGORIES: &str = "SELECT * FROM categories";
    pub const COMPETITIONS: &str = "SELECT * FROM competitions";
}

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It holds the shared pool (or no pool at all, when the
/// initial connection failed), a session-lifetime cache of query results, and
/// the diagnostics accumulated while collapsing errors at this boundary.
#[derive(Debug)]
pub struct DbRepository {
    pool: Option<MySqlPool>,
    // Keyed by query string; never invalidated within a session. Errors are
    // not cached, so a recovered database starts serving data on the next
    // render cycle.
    cache: Mutex<HashMap<String, TabularResult>>,
    diagnostics: Mutex<Vec<String>>,
}

impl DbRepository {
    /// Creates a new `DbRepository` around a shared database connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool: Some(pool),
            cache: Mutex::new(HashMap::new()),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// A repository with no database behind it. Every fetch yields the empty
    /// result plus a diagnostic, letting the dashboard render "nothing"
    /// instead of crashing when the connection could not be established.
    pub fn disconnected() -> Self {
        Self {
            pool: None,
            cache: Mutex::new(HashMap::new()),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Executes a read-only query and returns its rows.
    ///
    /// This is the error boundary of the whole system: connection and query
    /// failures are logged, recorded as user-visible diagnostics, and
    /// converted into the empty result. Callers can always treat the return
    /// value as a valid (possibly empty) table.
    pub async fn fetch_table(&self, query: &str) -> TabularResult {
        if let Ok(cache) = self.cache.lock()
            && let Some(hit) = cache.get(query)
        {
            return hit.clone();
        }

        match self.try_fetch(query).await {
            Ok(table) => {
                if let Ok(mut cache) = self.cache.lock() {
                    cache.insert(query.to_string(), table.clone());
                }
                table
            }
            Err(e) => {
                tracing::error!(query, error = %e, "query failed, returning empty result");
                self.push_diagnostic(format!("Error fetching data: {e}"));
                TabularResult::empty()
            }
        }
    }

    pub async fn fetch_competitors(&self) -> TabularResult {
        self.fetch_table(queries::COMPETITORS).await
    }

    pub async fn fetch_rankings(&self) -> TabularResult {
        self.fetch_table(queries::RANKINGS).await
    }

    pub async fn fetch_complexes(&self) -> TabularResult {
        self.fetch_table(queries::COMPLEXES).await
    }

    pub async fn fetch_venues(&self) -> TabularResult {
        self.fetch_table(queries::VENUES).await
    }

    pub async fn fetch_categories(&self) -> TabularResult {
        self.fetch_table(queries::CATEGORIES).await
    }

    pub async fn fetch_competitions(&self) -> TabularResult {
        self.fetch_table(queries::COMPETITIONS).await
    }

    /// Drains the user-visible diagnostic messages accumulated since the last
    /// call. The presentation layer surfaces these as warnings.
    pub fn take_diagnostics(&self) -> Vec<String> {
        self.diagnostics
            .lock()
            .map(|mut d| std::mem::take(&mut *d))
            .unwrap_or_default()
    }

    fn push_diagnostic(&self, message: String) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.push(message);
        }
    }

    async fn try_fetch(&self, query: &str) -> Result<TabularResult, DbError> {
        let pool = self.pool.as_ref().ok_or(DbError::NotConnected)?;
        let rows = sqlx::query(query)
            .fetch_all(pool)
            .await
            .map_err(|e| DbError::Query {
                query: query.to_string(),
                source: e,
            })?;
        table_from_rows(&rows)
    }
}

fn table_from_rows(rows: &[MySqlRow]) -> Result<TabularResult, DbError> {
    let Some(first) = rows.first() else {
        // A query that matched nothing yields the canonical empty result.
        return Ok(TabularResult::empty());
    };

    let columns: Vec<String> = first
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    let mut table = TabularResult::with_columns(columns)
        .map_err(|e| DbError::ConnectionConfig(e.to_string()))?;

    for row in rows {
        let cells: Vec<Cell> = (0..row.columns().len())
            .map(|idx| decode_cell(row, idx))
            .collect();
        table.push_row(cells).map_err(|e| DbError::ConnectionConfig(e.to_string()))?;
    }
    Ok(table)
}

/// Decodes one cell by the column's reported MySQL type. Integer families map
/// to `Cell::Int`, exact and floating numerics to `Cell::Number`, everything
/// else (strings, enums, dates) is carried as text. Undecodable values become
/// `Cell::Null` rather than failing the whole result set.
fn decode_cell(row: &MySqlRow, idx: usize) -> Cell {
    let type_name = row.column(idx).type_info().name();

    if type_name.contains("DECIMAL") {
        if let Ok(v) = row.try_get::<Option<Decimal>, _>(idx) {
            return Cell::from(v);
        }
    } else if type_name.contains("FLOAT") || type_name.contains("DOUBLE") {
        if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
            return v.and_then(Decimal::from_f64).map_or(Cell::Null, Cell::Number);
        }
    } else if type_name.contains("INT") || type_name == "YEAR" || type_name == "BOOLEAN" {
        if type_name.contains("UNSIGNED") {
            if let Ok(v) = row.try_get::<Option<u64>, _>(idx) {
                return v
                    .and_then(|v| i64::try_from(v).ok())
                    .map_or(Cell::Null, Cell::Int);
            }
        } else if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
            return Cell::from(v);
        }
    }

    match row.try_get::<Option<String>, _>(idx) {
        Ok(v) => Cell::from(v),
        Err(_) => Cell::Null,
    }
}
