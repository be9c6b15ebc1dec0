use crate::error::DbError;
use configuration::DatabaseSettings;
use dotenvy::dotenv;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

/// Establishes the shared connection pool to the tennis results database.
///
/// The pool is created once per process and reused across render cycles.
/// A `DATABASE_URL` environment variable (optionally loaded from a `.env`
/// file) takes precedence; otherwise the options are assembled from the
/// typed settings.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlPool, DbError> {
    // Load environment variables from the .env file, if one exists.
    dotenv().ok();

    let options = match env::var("DATABASE_URL") {
        Ok(url) => url
            .parse::<MySqlConnectOptions>()
            .map_err(|e| DbError::ConnectionConfig(e.to_string()))?,
        Err(_) => MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.database),
    };

    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}
