// src/render/motif.rs
//
// Ball-in-square motif geometry.
// A progress value in [0, 1] is split into `parts` equal phases:
//   0              square outline grows
//   1              ball outline grows at the center
//   2              ball travels to the square's inner corner
//   3 .. 3+lines   one quarter turn per phase, carrying the ball around the square
//   3+lines        ball fills in
// Any phases past these hold the finished motif.

use nannou::prelude::*;

use super::Surface;
use crate::config::{AnimationConfig, GeometryConfig};
use crate::views::{DrawStyle, Transform2D};

const SQUARE_PHASE: u32 = 0;
const CIRCLE_PHASE: u32 = 1;
const TRAVEL_PHASE: u32 = 2;
const FIRST_LINE_PHASE: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct MotifGeometry {
    pub parts: u32,
    pub lines: u32,
    pub rotation_deg: f32,
    pub stroke_factor: f32,
    pub r_factor: f32,
    pub box_factor: f32,
}

impl MotifGeometry {
    pub fn from_config(animation: &AnimationConfig, geometry: &GeometryConfig) -> Self {
        Self {
            parts: animation.parts(),
            lines: animation.lines,
            rotation_deg: animation.rotation_deg,
            stroke_factor: geometry.stroke_factor,
            r_factor: geometry.r_factor,
            box_factor: geometry.box_factor,
        }
    }
}

/// Local progress of phase `i` out of `n`, in [0, 1]
pub fn divide_scale(scale: f32, i: u32, n: u32) -> f32 {
    let n = n as f32;
    (scale - i as f32 / n).max(0.0).min(1.0 / n) * n
}

/// Everything needed to draw one motif at one progress value
#[derive(Debug, Clone, PartialEq)]
pub struct MotifFrame {
    pub side: f32,
    pub ball_radius: f32,
    pub ball_offset: Vec2,
    pub fill_radius: f32,
    pub rotation: f32, // degrees
    pub stroke_weight: f32,
}

impl MotifFrame {
    pub fn compute(value: f32, size: Vec2, geometry: &MotifGeometry) -> Self {
        let parts = geometry.parts;
        let min_dim = size.x.min(size.y);
        let full_side = min_dim / geometry.box_factor;
        let full_radius = min_dim / geometry.r_factor;

        let phase = |i: u32| divide_scale(value, i, parts);

        let corner = (full_side / 2.0 - full_radius).max(0.0);
        let turns: f32 = (0..geometry.lines)
            .map(|line| phase(FIRST_LINE_PHASE + line))
            .sum();

        Self {
            side: full_side * phase(SQUARE_PHASE),
            ball_radius: full_radius * phase(CIRCLE_PHASE),
            ball_offset: vec2(corner, corner) * phase(TRAVEL_PHASE),
            fill_radius: full_radius * phase(FIRST_LINE_PHASE + geometry.lines),
            rotation: geometry.rotation_deg * turns,
            stroke_weight: min_dim / geometry.stroke_factor,
        }
    }
}

pub fn draw_motif<S: Surface + ?Sized>(surface: &mut S, frame: &MotifFrame, color: Rgb<f32>) {
    let transform = Transform2D::new(Vec2::ZERO, frame.rotation);
    let style = DrawStyle {
        color,
        stroke_weight: frame.stroke_weight,
    };

    surface.stroke_square(&transform, frame.side, &style);
    surface.stroke_circle(&transform, frame.ball_offset, frame.ball_radius, &style);
    surface.fill_circle(&transform, frame.ball_offset, frame.fill_radius, color);
}
