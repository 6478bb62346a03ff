// src/animation/driver.rs
//
// The frame clock contract between the scene and its host.
// The driver never sleeps: it asks the host to come back after a delay
// and does its work when the host renders the next frame.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("frame delay of {0:?} cannot be scheduled")]
    DelayOverflow(Duration),
    #[error("frame scheduler is unavailable: {0}")]
    Unavailable(String),
}

/// Implemented by the host event loop.
pub trait FrameScheduler {
    /// Render another frame once `delay` has elapsed.
    fn schedule_frame(&mut self, delay: Duration) -> Result<(), ScheduleError>;
    /// Render another frame as soon as possible.
    fn request_redraw(&mut self);
}

pub struct AnimationDriver<S: FrameScheduler> {
    active: bool,
    frame_delay: Duration,
    scheduler: S,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    pub fn new(scheduler: S, frame_delay: Duration) -> Self {
        Self {
            active: false,
            frame_delay,
            scheduler,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn start(&mut self) {
        if self.active {
            return;
        }
        debug!("animation driver started");
        self.active = true;
        self.scheduler.request_redraw();
    }

    pub fn stop(&mut self) {
        if self.active {
            debug!("animation driver stopped");
        }
        self.active = false;
    }

    /// Runs one animation frame while running, then books the next one.
    /// `on_frame` may stop the driver; the next frame is still booked and
    /// turns into a no-op.
    pub fn tick<F>(&mut self, on_frame: F)
    where
        F: FnOnce(&mut Self),
    {
        if !self.active {
            return;
        }
        trace!("animation tick");
        on_frame(self);

        // a missed delay only shortens this frame
        if let Err(e) = self.scheduler.schedule_frame(self.frame_delay) {
            debug!("frame scheduling failed ({}); redrawing immediately", e);
            self.scheduler.request_redraw();
        }
    }
}
