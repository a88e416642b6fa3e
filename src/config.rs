//! Connection configuration
//!
//! Fixed defaults for the business_supply database, overridable through the
//! usual DB_* environment variables (loaded from `.env` by the binary).

/// Configuration for the single database this UI talks to
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1433),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
            password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| String::new()),
            database: std::env::var("DB_DATABASE")
                .unwrap_or_else(|_| "business_supply".to_string()),
        }
    }
}
