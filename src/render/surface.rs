// src/render/surface.rs
//
// The drawing primitives the scene needs from its host.
// Coordinates are center-origin with y pointing up.

use nannou::prelude::*;

use crate::views::{DrawStyle, Transform2D};

pub trait Surface {
    /// Width and height of the drawable area
    fn size(&self) -> Vec2;

    fn clear(&mut self, color: Rgb<f32>);

    /// Square outline centered on the transform's origin
    fn stroke_square(&mut self, transform: &Transform2D, side: f32, style: &DrawStyle);

    fn stroke_circle(
        &mut self,
        transform: &Transform2D,
        center: Point2,
        radius: f32,
        style: &DrawStyle,
    );

    fn fill_circle(&mut self, transform: &Transform2D, center: Point2, radius: f32, color: Rgb<f32>);
}
