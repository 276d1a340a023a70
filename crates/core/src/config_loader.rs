use crate::config::TrackerConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub const DEFAULT_CONFIG_TOML: &str = "config/Coach.toml";
pub const DEFAULT_CONFIG_JSON: &str = "config/Coach.json";
pub const ENV_PREFIX: &str = "COACH_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads tracker configuration by merging defaults, TOML, JSON, and
    /// environment variables, later sources overriding earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<TrackerConfig> {
        Self::load_from(DEFAULT_CONFIG_TOML)
    }

    /// Loads tracker configuration with a specific TOML file in place of the
    /// default one. A missing file is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_from(toml_path: impl AsRef<Path>) -> Result<TrackerConfig> {
        Self::extract(Self::figment(toml_path.as_ref()))
    }

    /// Provider chain used by [`Self::load_from`].
    #[must_use]
    pub fn figment(toml_path: &Path) -> Figment {
        Figment::from(Serialized::defaults(TrackerConfig::default()))
            .merge(Toml::file(toml_path))
            .merge(Json::file(DEFAULT_CONFIG_JSON))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts a configuration from any provider chain.
    ///
    /// # Errors
    ///
    /// Returns an error if a provider fails or a value has the wrong shape.
    pub fn extract(figment: Figment) -> Result<TrackerConfig> {
        let config: TrackerConfig = figment.extract()?;
        tracing::debug!("Loaded tracker config: {:?}", config);
        Ok(config)
    }
}
