// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

use super::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

/************************* Palette ********************/

/// One color per chain node, plus the background the scene clears to.
/// Colors are `#RRGGBB` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
    pub background: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: ["#f44336", "#01579B", "#00C853", "#FFC107", "#2962FF"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            background: "#BDBDBD".to_string(),
        }
    }
}

/// Resolved palette ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub colors: Vec<Rgb<f32>>,
    pub background: Rgb<f32>,
}

impl Palette {
    /// Color for a chain node. Wraps around if the chain outgrows the palette.
    pub fn color_for(&self, index: usize) -> Rgb<f32> {
        self.colors[index % self.colors.len()]
    }
}

impl PaletteConfig {
    pub fn resolve(&self) -> Result<Palette, ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let colors = self
            .colors
            .iter()
            .map(|c| parse_hex_color(c))
            .collect::<Result<Vec<_>, _>>()?;
        let background = parse_hex_color(&self.background)?;
        Ok(Palette { colors, background })
    }
}

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex color pattern is a valid regex")
    })
}

/// Parses `#RRGGBB` into a linear 0..1 rgb triple
pub fn parse_hex_color(input: &str) -> Result<Rgb<f32>, ConfigError> {
    let invalid = || ConfigError::InvalidColor(input.to_string());
    let captures = hex_color_pattern().captures(input.trim()).ok_or_else(invalid)?;

    let mut channels = [0.0f32; 3];
    for (channel, slot) in channels.iter_mut().enumerate() {
        let hex = &captures[channel + 1];
        let value = u8::from_str_radix(hex, 16).map_err(|_| invalid())?;
        *slot = value as f32 / 255.0;
    }
    Ok(rgb(channels[0], channels[1], channels[2]))
}

/************************* Animation Configs ********************/

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    pub lines: u32,      // quarter-turn phases per cycle
    pub base_parts: u32, // square, circle, ball travel, ball fill
    pub step_unit: f32,  // progress covered per frame, before dividing by parts
    pub frame_delay_ms: u64,
    pub rotation_deg: f32, // rotation added by each line phase
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            lines: 4,
            base_parts: 4,
            step_unit: 0.02,
            frame_delay_ms: 20,
            rotation_deg: 90.0,
        }
    }
}

impl AnimationConfig {
    /// Phases per cycle. Validated configs never saturate.
    pub fn parts(&self) -> u32 {
        self.base_parts.saturating_add(self.lines)
    }

    /// Progress added to a node on each animated frame
    pub fn step_size(&self) -> f32 {
        self.step_unit / self.parts() as f32
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryConfig {
    pub stroke_factor: f32,
    pub r_factor: f32,
    pub box_factor: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            stroke_factor: 90.0,
            r_factor: 11.2,
            box_factor: 3.4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}
