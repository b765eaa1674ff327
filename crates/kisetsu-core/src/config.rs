use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::KisetsuError;
use crate::filter::CatalogPolicy;
use crate::models::{Season, SeasonPin};

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub service: ServiceConfig,
    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub year: u32,
    #[serde(deserialize_with = "deserialize_season")]
    pub season: Season,
    pub sensitive_tag: String,
    /// Snapshot file; empty means the bundled snapshot.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    pub page_size: usize,
}

impl AppConfig {
    /// Load config: user file (if exists) merged over built-in defaults.
    pub fn load() -> Result<Self, KisetsuError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load a specific file, merged over built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, KisetsuError> {
        let user_str =
            std::fs::read_to_string(path).map_err(|e| KisetsuError::Config(e.to_string()))?;
        Self::from_toml(&user_str)
    }

    /// Parse a (possibly partial) TOML document over the defaults.
    pub fn from_toml(user_str: &str) -> Result<Self, KisetsuError> {
        let mut merged: toml::Value =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| KisetsuError::Config(e.to_string()))?;
        let user: toml::Value =
            toml::from_str(user_str).map_err(|e| KisetsuError::Config(e.to_string()))?;
        merge(&mut merged, user);

        let config: AppConfig = merged
            .try_into()
            .map_err(|e: toml::de::Error| KisetsuError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Content policy derived from the `[catalog]` table.
    pub fn policy(&self) -> CatalogPolicy {
        CatalogPolicy::new(
            SeasonPin::new(self.catalog.year, self.catalog.season),
            self.catalog.sensitive_tag.clone(),
        )
    }

    /// Snapshot file to load, or `None` for the bundled one.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.service.latency_ms)
    }

    fn validate(&self) -> Result<(), KisetsuError> {
        if self.catalog.season == Season::Undefined {
            return Err(KisetsuError::Config(
                "catalog.season must be one of WINTER, SPRING, SUMMER, FALL".into(),
            ));
        }
        if self.browse.page_size == 0 {
            return Err(KisetsuError::Config("browse.page_size must be at least 1".into()));
        }
        Ok(())
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "kisetsu")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

/// Snapshot data tolerates unknown seasons; a config file must name a real one.
fn deserialize_season<'de, D>(deserializer: D) -> Result<Season, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Recursively overlay `overlay` onto `base`; tables merge, everything else replaces.
fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
