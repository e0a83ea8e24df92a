use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration by merging TOML and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration fails to parse or is
    /// missing required sections.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(Some("config/Config.toml"))
    }

    /// Loads configuration from a specific TOML file path, with
    /// `REVBATCH_`-prefixed environment variables taking precedence.
    /// Nested keys use `__` in the variable name, e.g.
    /// `REVBATCH_DATABASE__URL`. A missing file is skipped, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration fails to parse or is
    /// missing required sections.
    pub fn load_from(path: Option<&str>) -> Result<AppConfig> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: AppConfig = figment.merge(Env::prefixed("REVBATCH_").split("__")).extract()?;

        Ok(config)
    }
}
