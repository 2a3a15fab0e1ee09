use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::Path;

use super::ParfactConfig;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

impl ParfactConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let figment = Self::figment(custom_config)?;
        let config: ParfactConfig = figment
            .extract()
            .context("Failed to parse parfact configuration")?;

        tracing::debug!(
            "Loaded config: strategy={}, workers={}, max_workers={}, long_running_threshold={}",
            config.default_strategy,
            config.parallel.workers,
            config.parallel.max_workers,
            config.parallel.long_running_threshold
        );
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&str>) -> Result<Figment> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(ParfactConfig::default()))
            .merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).is_file() {
                bail!("Config file not found: {}", custom_path);
            }
            tracing::trace!("CONFIG LOAD: Using custom config {}", custom_path);
            figment = figment.merge(Toml::file(custom_path));
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file("parfact.toml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("PARFACT_").split("__"));

        Ok(figment)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/parfact/config.toml", home),
            Err(_) => "~/.config/parfact/config.toml".to_string(),
        }
    }
}
