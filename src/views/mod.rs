// src/views/mod.rs

pub mod transform;

pub use transform::Transform2D;

use nannou::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}
