pub mod driver;
pub mod progress;

pub use driver::{AnimationDriver, FrameScheduler, ScheduleError};
pub use progress::Progress;
