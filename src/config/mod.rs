//! Configuration module for the Animo backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin operator email (required for login to work)
    pub admin_email: Option<String>,
    /// Admin operator password (required for login to work)
    pub admin_password: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Site name used in generated page titles
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_email = env::var("ANIMO_ADMIN_EMAIL").ok();
        let admin_password = env::var("ANIMO_ADMIN_PASSWORD").ok();

        let db_path = env::var("ANIMO_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("ANIMO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid ANIMO_BIND_ADDR format");

        let log_level = env::var("ANIMO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let site_name = env::var("ANIMO_SITE_NAME").unwrap_or_else(|_| "Animo".to_string());

        Self {
            admin_email,
            admin_password,
            db_path,
            bind_addr,
            log_level,
            site_name,
        }
    }
}
