//! Configuration handling for the TUI

use crate::api::DEFAULT_SERVER_URL;
use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the server address
pub const SERVER_URL_ENV: &str = "MEMORIAL_SERVER_URL";
/// Environment variable overriding the download directory
pub const DOWNLOAD_DIR_ENV: &str = "MEMORIAL_DOWNLOAD_DIR";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemorialConfig {
    /// Base URL of the memorial server
    pub server_url: Option<String>,
    /// Where generated documents are saved
    pub download_dir: Option<PathBuf>,
}

impl MemorialConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("br", "memorial", "memorial-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file written while the UI owns the terminal
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("memorial-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: MemorialConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Server address: environment, then file, then the default
    pub fn server_url(&self) -> String {
        self.server_url_with(std::env::var(SERVER_URL_ENV).ok())
    }

    fn server_url_with(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.server_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Download directory: environment, then file, then the user's Downloads
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir_with(std::env::var_os(DOWNLOAD_DIR_ENV).map(PathBuf::from))
    }

    fn download_dir_with(&self, env_value: Option<PathBuf>) -> PathBuf {
        env_value
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| self.download_dir.clone())
            .or_else(|| UserDirs::new().and_then(|u| u.download_dir().map(PathBuf::from)))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
