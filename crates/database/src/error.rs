use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection configuration: {0}")]
    ConnectionConfig(String),

    #[error("Failed to connect to the database: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Query `{query}` failed: {source}")]
    Query {
        query: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("No database connection is available.")]
    NotConnected,
}
