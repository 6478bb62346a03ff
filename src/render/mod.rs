// src/render/mod.rs
// Motif geometry and the surfaces it is drawn onto

pub mod motif;
pub mod nannou_surface;
pub mod surface;

pub use motif::{divide_scale, draw_motif, MotifFrame, MotifGeometry};
pub use nannou_surface::NannouSurface;
pub use surface::Surface;
