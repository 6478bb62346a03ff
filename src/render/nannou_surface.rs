// src/render/nannou_surface.rs
//
// Surface backed by a nannou Draw

use nannou::prelude::*;

use super::Surface;
use crate::views::{DrawStyle, Transform2D};

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    size: Vec2,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, bounds: Rect) -> Self {
        Self {
            draw,
            size: bounds.wh(),
        }
    }

    fn local(&self, transform: &Transform2D) -> Draw {
        self.draw
            .xy(transform.translation)
            .rotate(transform.rotation_radians())
            .scale(transform.scale)
    }
}

impl Surface for NannouSurface<'_> {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Rgb<f32>) {
        self.draw.background().color(color);
    }

    fn stroke_square(&mut self, transform: &Transform2D, side: f32, style: &DrawStyle) {
        // lyon rejects degenerate outlines
        if side <= 0.0 {
            return;
        }
        self.local(transform)
            .rect()
            .w_h(side, side)
            .no_fill()
            .stroke(style.color)
            .stroke_weight(style.stroke_weight);
    }

    fn stroke_circle(
        &mut self,
        transform: &Transform2D,
        center: Point2,
        radius: f32,
        style: &DrawStyle,
    ) {
        if radius <= 0.0 {
            return;
        }
        self.local(transform)
            .ellipse()
            .xy(center)
            .radius(radius)
            .no_fill()
            .stroke(style.color)
            .stroke_weight(style.stroke_weight);
    }

    fn fill_circle(&mut self, transform: &Transform2D, center: Point2, radius: f32, color: Rgb<f32>) {
        if radius <= 0.0 {
            return;
        }
        self.local(transform)
            .ellipse()
            .xy(center)
            .radius(radius)
            .color(color);
    }
}
