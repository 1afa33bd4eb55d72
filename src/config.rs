//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/occi-model/config.toml` (XDG) or platform config dir
//! 2. Project config: `.occi-model.toml`
//! 3. Environment variables: `OCCI_MODEL_*` (nested keys split on `__`)
//!
//! # Intended Usage
//!
//! ```toml
//! [catalog]
//! standard = true
//! sources = ["catalogs/provider.toml", "catalogs/extra.json"]
//!
//! [log]
//! level = "debug"
//! ```
//!
//! Every section is optional. With no files present the standard OCCI
//! categories are seeded and nothing else is loaded.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = ".occi-model.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "OCCI_MODEL_";

/// Default log level when neither `--verbose` nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

/// Which category definitions populate the model at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Seed the built-in OCCI core and infrastructure categories.
    pub standard: bool,
    /// Catalog documents (`.toml` or `.json`) applied in order.
    pub sources: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            standard: true,
            sources: Vec::new(),
        }
    }
}

impl CatalogConfig {
    fn resolve_sources(&mut self, base: &Path) {
        for source in &mut self.sources {
            if source.is_relative() {
                *source = base.join(&*source);
            }
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` env-filter directive, e.g. `info` or `occi_model=trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::user_config_path(), Path::new(PROJECT_CONFIG_FILE))
    }

    /// Load config from explicit user and project file locations.
    ///
    /// Missing files are skipped, so either path may point nowhere.
    /// Relative catalog sources are resolved against the directory of the
    /// file that declared them; sources from the environment stay relative
    /// to the working directory.
    pub fn load_from(user: &Path, project: &Path) -> Result<Self, ConfigError> {
        let figment = Self::figment(user, project);
        let mut config: Config = figment.extract()?;

        let declared_in = figment
            .find_metadata("catalog.sources")
            .and_then(|metadata| metadata.source.as_ref())
            .and_then(|source| source.file_path())
            .and_then(Path::parent);
        if let Some(base) = declared_in {
            config.catalog.resolve_sources(base);
        }

        Ok(config)
    }

    fn figment(user: &Path, project: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user))
            // Layer 2: Project config
            .merge(Toml::file(project))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// User config path: ~/.config/occi-model/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("occi-model").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("occi-model").join("config.toml"))
            .unwrap_or_default()
    }
}
