use nannou::prelude::*;
use std::f32::consts::PI;

/// Placement of a motif on the surface: scale, then rotate about the
/// local origin, then translate.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: f32,
    pub rotation: f32, // degrees
}

impl Transform2D {
    pub fn new(translation: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            scale: 1.0,
            rotation,
        }
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation * PI / 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unscaled() {
        let transform = Transform2D::new(vec2(3.0, -2.0), 45.0);
        assert_eq!(transform.translation, vec2(3.0, -2.0));
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.rotation, 45.0);
    }

    #[test]
    fn test_rotation_radians() {
        assert_eq!(Transform2D::new(Vec2::ZERO, 0.0).rotation_radians(), 0.0);
        assert!((Transform2D::new(Vec2::ZERO, 90.0).rotation_radians() - PI / 2.0).abs() < 1e-6);
        assert!((Transform2D::new(Vec2::ZERO, 360.0).rotation_radians() - 2.0 * PI).abs() < 1e-6);
    }
}
