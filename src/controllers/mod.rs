pub mod osc;
pub mod scene;

pub use osc::{OscCommand, OscController};
pub use scene::Scene;
