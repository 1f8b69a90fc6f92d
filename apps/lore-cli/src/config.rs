//! Application configuration loaded from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LORE_ORIGIN` | `http://localhost:8080/` | Server origin the form posts to |
//! | `LORE_REQUEST_TIMEOUT_SECS` | `10` | Upper bound on one submission, at most one day |
//! | `LORE_STORAGE_PATH` | `.lore/storage.json` | Durable store file; empty for in-memory |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_ORIGIN: &str = "http://localhost:8080/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;
const DEFAULT_STORAGE_PATH: &str = ".lore/storage.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub origin: Url,
    pub request_timeout: Duration,
    /// `None` keeps preferences in memory for this run only.
    pub storage_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = env::var("LORE_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

        let request_timeout = match env::var("LORE_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LORE_REQUEST_TIMEOUT_SECS", raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let storage_path = match env::var("LORE_STORAGE_PATH") {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(PathBuf::from(raw)),
            Err(_) => Some(PathBuf::from(DEFAULT_STORAGE_PATH)),
        };

        Ok(Self {
            origin: parse_origin(&origin)?,
            request_timeout: parse_timeout(request_timeout)?,
            storage_path,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        origin: Option<&str>,
        timeout_secs: Option<u64>,
        storage_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(origin) = origin {
            self.origin = parse_origin(origin)?;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout = parse_timeout(secs)?;
        }
        if let Some(path) = storage_path {
            self.storage_path = Some(path);
        }
        Ok(self)
    }
}

fn parse_timeout(secs: u64) -> Result<Duration, ConfigError> {
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidValue(
            "LORE_REQUEST_TIMEOUT_SECS",
            format!("{}: more than {} seconds", secs, MAX_TIMEOUT_SECS),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// Parse an origin so endpoint paths join under it.
///
/// A trailing slash is added to the path: `http://host/lore` joined with
/// `login` must give `http://host/lore/login`, not `http://host/login`.
fn parse_origin(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidValue("LORE_ORIGIN", format!("{}: {}", raw, e)))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue(
            "LORE_ORIGIN",
            format!("{}: not an http(s) origin", raw),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
