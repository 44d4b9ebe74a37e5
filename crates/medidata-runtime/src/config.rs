use crate::{Error, Result};
use medidata_types::NotionOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_WEBHOOK_URL: &str = "https://lovable.app/webhooks/lab-exams";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MEDIDATA_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.medidata
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MEDIDATA_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("medidata"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".medidata"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Pacing of the simulated Notion connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub connect_delay_ms: u64,
    pub tick_interval_ms: u64,
    pub progress_step: u8,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            connect_delay_ms: 2000,
            tick_interval_ms: 500,
            progress_step: 20,
        }
    }
}

impl SyncSettings {
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.connect_delay_ms == 0 {
            return Err(Error::Config("sync.connect_delay_ms must be positive".to_string()));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("sync.tick_interval_ms must be positive".to_string()));
        }
        if !(1..=100).contains(&self.progress_step) {
            return Err(Error::Config(format!(
                "sync.progress_step must be between 1 and 100, got {}",
                self.progress_step
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSettings {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_ms: 5000,
        }
    }
}

impl WebhookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncSettings,
    #[serde(default)]
    pub webhook: WebhookSettings,
    #[serde(default)]
    pub notion: NotionOptions,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.sync.validate()?;
        if self.webhook.url.trim().is_empty() {
            return Err(Error::Config("webhook.url must not be empty".to_string()));
        }
        Ok(())
    }
}
