pub mod config_load;
pub mod config_types;

pub use config_load::Config;
pub use config_types::{
    parse_hex_color, AnimationConfig, GeometryConfig, OscConfig, Palette, PaletteConfig,
    WindowConfig,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("base_parts + lines must be greater than zero and fit in u32")]
    InvalidParts,
    #[error("step_unit must be in (0, 1], got {0}")]
    InvalidStepUnit(f32),
    #[error("geometry factor {name} must be positive, got {value}")]
    InvalidFactor { name: &'static str, value: f32 },
}
