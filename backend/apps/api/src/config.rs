//! Server configuration
//!
//! Everything the binary needs besides the per-context configs
//! (`AuthConfig`, `BooksConfig`), loaded once at startup.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use platform::config::{ConfigError, env_or, env_parse, required_env};

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Where users and listings are kept
#[derive(Debug, Clone)]
pub enum Storage {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local maps; data is lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub storage: Storage,
    pub port: u16,
    pub frontend_origins: Vec<HeaderValue>,
}

impl ApiConfig {
    /// Load from environment
    ///
    /// `DATABASE_URL` is required unless `STORAGE=memory`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = env_or("STORAGE", "postgres").to_ascii_lowercase();
        let storage = match backend.as_str() {
            "memory" => Storage::Memory,
            "postgres" => Storage::Postgres {
                database_url: required_env("DATABASE_URL")?,
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 5)?,
            },
            _ => {
                return Err(ConfigError::Invalid {
                    key: "STORAGE".to_string(),
                    value: backend.clone(),
                    reason: "expected postgres or memory".to_string(),
                });
            }
        };

        Ok(Self {
            storage,
            port: env_parse("PORT", 5000)?,
            frontend_origins: parse_origins(&env_or("FRONTEND_ORIGINS", DEFAULT_ORIGINS)),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Comma-separated list; entries that are not valid header values are skipped
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins(" http://a.test , ,http://b.test:8080,bad\norigin");
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test:8080"),
            ]
        );
    }
}
