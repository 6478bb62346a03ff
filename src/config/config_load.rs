// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::config_types::*;
use super::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    pub osc: Option<OscConfig>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_config_path() {
            return Self::load_from_path(&exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new("config.toml"))
    }

    /// Like `load`, but never fails: a missing or broken config file
    /// falls back to the built-in constants.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not load config.toml ({}); using built-in defaults", e);
                Self::default()
            }
        }
    }

    fn exe_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");
        config_path.exists().then_some(config_path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette.resolve()?;

        match self.animation.base_parts.checked_add(self.animation.lines) {
            None | Some(0) => return Err(ConfigError::InvalidParts),
            Some(_) => (),
        }

        let step_unit = self.animation.step_unit;
        if !step_unit.is_finite() || step_unit <= 0.0 || step_unit > 1.0 {
            return Err(ConfigError::InvalidStepUnit(step_unit));
        }

        let factors = [
            ("stroke_factor", self.geometry.stroke_factor),
            ("r_factor", self.geometry.r_factor),
            ("box_factor", self.geometry.box_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }

        Ok(())
    }
}
