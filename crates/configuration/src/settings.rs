use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Connection parameters for the tennis results database.
///
/// A `DATABASE_URL` environment variable, when present, takes precedence over
/// everything in this struct (see the `database` crate). The defaults mirror a
/// local development MySQL instance.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Hostname of the database server.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login user.
    #[serde(default = "default_user")]
    pub user: String,
    /// Login password. Empty means "no password" (local development only).
    #[serde(default)]
    pub password: String,
    /// Name of the schema holding the six tennis tables.
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_database() -> String {
    "tennis_game".to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_development_database() {
        let db = DatabaseSettings::default();
        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 3306);
        assert_eq!(db.user, "root");
        assert!(db.password.is_empty());
        assert_eq!(db.database, "tennis_game");
    }
}
