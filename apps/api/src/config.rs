use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::store::DEFAULT_NAMESPACE;

/// Which key-value backend holds the persisted collections.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Memory,
    File { data_dir: PathBuf },
    Redis { url: String },
    Postgres { url: String },
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the selected backend is missing its connection setting.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub store_backend: StoreBackend,
    /// Prefix of every storage key, e.g. `resumepivot_versions`.
    pub store_namespace: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let backend_name = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "memory".to_string());

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            store_backend: parse_backend(&backend_name)?,
            store_namespace: std::env::var("STORE_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string()),
        })
    }

    /// In-memory configuration used by tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            store_backend: StoreBackend::Memory,
            store_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

fn parse_backend(name: &str) -> Result<StoreBackend> {
    match name.trim().to_ascii_lowercase().as_str() {
        "memory" => Ok(StoreBackend::Memory),
        "file" => Ok(StoreBackend::File {
            data_dir: PathBuf::from(require_env("DATA_DIR")?),
        }),
        "redis" => Ok(StoreBackend::Redis {
            url: require_env("REDIS_URL")?,
        }),
        "postgres" => Ok(StoreBackend::Postgres {
            url: require_env("DATABASE_URL")?,
        }),
        other => bail!("Unknown STORE_BACKEND '{other}'. Expected memory, file, redis or postgres"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
