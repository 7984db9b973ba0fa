//! Backend location
//!
//! The backend base URL is resolved from (in order of priority):
//! 1. Compile-time `LETTERBOX_BASE_URL` (for packaged builds)
//! 2. `backend.json` in the Letterbox config directory
//! 3. Runtime `LETTERBOX_BASE_URL` environment variable
//! 4. The local development server

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config filename in the Letterbox config directory
const CONFIG_FILE: &str = "backend.json";

/// Environment variable naming the backend base URL
const BASE_URL_VAR: &str = "LETTERBOX_BASE_URL";

/// Where the development server listens
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Location of the webmail backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// Resolve the backend location, falling back to the default
    pub fn load() -> Result<Self> {
        if let Some(config) = Self::from_compile_time() {
            return Ok(config);
        }

        if config::config_exists(CONFIG_FILE) {
            let config: BackendConfig = config::load_json(CONFIG_FILE)?;
            return config.validated();
        }

        if let Ok(config) = Self::from_env() {
            return Ok(config);
        }

        Ok(Self::default())
    }

    /// Base URL embedded at build time.
    /// Build with: LETTERBOX_BASE_URL=https://mail.example.com cargo build --release
    pub fn from_compile_time() -> Option<Self> {
        let base_url = option_env!("LETTERBOX_BASE_URL")?;
        if base_url.is_empty() {
            return None;
        }
        Some(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Load from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: BackendConfig = config::load_json_file(path)?;
        config.validated()
    }

    /// Parse from a JSON string such as `{"base_url": "http://localhost:8000"}`
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BackendConfig =
            serde_json::from_str(json).context("Failed to parse backend config JSON")?;
        config.validated()
    }

    /// Load from the `LETTERBOX_BASE_URL` environment variable
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_VAR)
            .with_context(|| format!("{} environment variable not set", BASE_URL_VAR))?;
        Self { base_url }.validated()
    }

    /// Default config file path (~/.config/letterbox/backend.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(CONFIG_FILE)
    }

    /// Write this config to the default config file
    pub fn save(&self) -> Result<()> {
        config::save_json(CONFIG_FILE, self)
    }

    fn validated(self) -> Result<Self> {
        if self.base_url.trim().is_empty() {
            bail!("Backend base_url must not be empty");
        }
        Ok(self)
    }
}
