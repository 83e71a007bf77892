//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default assistant endpoint (a local Ollama instance)
pub const DEFAULT_ASSISTANT_URL: &str = "http://127.0.0.1:11434";

/// Default model asked for answers
pub const DEFAULT_MODEL: &str = "deepseek-r1:latest";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the assistant endpoint
    pub assistant_url: Option<String>,
    /// Model name sent with every request
    pub model: Option<String>,
    /// Optional system prompt sent with every request
    pub system_prompt: Option<String>,
    /// Directory the export is written to (defaults to the working directory)
    pub export_dir: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "healthuniverse", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolved assistant base URL: env override, then config, then default
    pub fn assistant_url(&self) -> String {
        std::env::var("INTAKE_ASSISTANT_URL")
            .ok()
            .or_else(|| self.assistant_url.clone())
            .unwrap_or_else(|| DEFAULT_ASSISTANT_URL.to_string())
    }

    /// Resolved model name
    pub fn model(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}
