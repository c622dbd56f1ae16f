pub mod general;
pub mod theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use general::{GeneralConfig, PanelConfig};
pub use theme::ThemeConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub panels: PanelConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

pub const MIN_TICK_RATE_MS: u64 = 1;

pub const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded defaults must parse")
    }
}

impl AppConfig {
    /// Defaults merged with the user file, if one exists. A broken user file
    /// is reported and ignored.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                        Ok(user) => config.merge(user),
                        Err(e) => eprintln!("Warning: invalid config at {}: {e}", path.display()),
                    },
                    Err(e) => eprintln!("Warning: could not read {}: {e}", path.display()),
                }
            }
        }

        config
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let contents = std::fs::read_to_string(path)?;
        let user: AppConfig = toml::from_str(&contents)?;
        config.merge(user);
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("parqview").join("config.toml")
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        Self::init_at(&Self::default_path())
    }

    pub fn init_at(path: &Path) -> anyhow::Result<PathBuf> {
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        Ok(path.to_path_buf())
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("parqview").join("config.toml"))
    }

    // Sections are replaced wholesale; missing keys inside a section already
    // fell back to their defaults during deserialization.
    fn merge(&mut self, user: AppConfig) {
        self.general = user.general;
        self.panels = user.panels;
        self.theme = user.theme;
    }

    /// Never zero; a zero period would stall the tick timer.
    pub fn tick_rate_ms(&self) -> u64 {
        self.general.tick_rate_ms.max(MIN_TICK_RATE_MS)
    }

    /// Directory the file picker opens in. `override_dir` wins over the
    /// configured `start_dir`; both empty means the working directory.
    pub fn start_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir.to_path_buf();
        }
        if self.general.start_dir.trim().is_empty() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        } else {
            PathBuf::from(&self.general.start_dir)
        }
    }
}

#[cfg(test)]
mod tests;
