// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `<config_dir>/tasklist/config.toml` and includes:
//! - `[remote]`: service URL, bearer token, request timeout
//! - `[log]`: optional log file (stderr when unset)
//!
//! A missing file yields defaults. `TASKLIST_URL` and `TASKLIST_TOKEN`
//! override the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};
use crate::sync::GatewayConfig;

const APP_DIR_NAME: &str = "tasklist";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub remote: RemoteConfig,
    pub log: LogConfig,
}

/// Remote service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Base URL of the list service (default: `http://localhost:3000/api`).
    pub url: String,
    /// Bearer token sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds (default: 10).
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let gateway = GatewayConfig::default();
        RemoteConfig {
            url: gateway.url,
            token: None,
            timeout_secs: gateway.timeout.as_secs(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Append logs to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Default config location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Loads the config for this invocation.
    ///
    /// The path is `explicit`, else `TASKLIST_CONFIG`, else the default
    /// location. Environment overrides are applied last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(env::config_path)
            .or_else(default_config_path);
        let config = match path {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        config
            .with_overrides(env::remote_url(), env::token())
            .validated()
    }

    /// Loads configuration from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(Error::Config(format!(
                    "failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse config {}: {}", path.display(), e))
        })
    }

    /// Replaces the URL and token where an override is given.
    pub fn with_overrides(mut self, url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = url {
            self.remote.url = url;
        }
        if let Some(token) = token {
            self.remote.token = Some(token);
        }
        self
    }

    /// Rejects values the gateway cannot use.
    pub fn validated(self) -> Result<Self> {
        if self.remote.url.trim().is_empty() {
            return Err(Error::Config("remote.url cannot be empty".to_string()));
        }
        if self.remote.timeout_secs == 0 {
            return Err(Error::Config(
                "remote.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// Settings for the HTTP gateway.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            url: self.remote.url.clone(),
            token: self
                .remote
                .token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            timeout: Duration::from_secs(self.remote.timeout_secs),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
