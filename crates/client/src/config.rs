//! Client configuration (backend URL, local data directory).

use std::path::PathBuf;

use crate::error::ClientError;

pub const API_URL_VAR: &str = "BALCAO_API_URL";
pub const DATA_DIR_VAR: &str = "BALCAO_DATA_DIR";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to (no trailing slash).
    pub api_url: String,
    /// Directory holding `local.db`.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let api_url = normalize_api_url(&api_url.into())?;
        Ok(Self {
            api_url,
            data_dir: data_dir.into(),
        })
    }

    /// Load from the process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ClientError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let data_dir = match lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        Self::new(api_url, data_dir)
    }

    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ClientError> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// `{data_dir}/local.db`.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("local.db")
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("invalid API URL '{trimmed}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "API URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(trimmed.to_string())
}

/// `{os data dir}/balcao`, falling back to `~/.local/share/balcao`.
fn default_data_dir() -> Result<PathBuf, ClientError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            ClientError::Config(format!(
                "cannot resolve an app data directory; set {DATA_DIR_VAR}"
            ))
        })?;

    Ok(base.join("balcao"))
}
