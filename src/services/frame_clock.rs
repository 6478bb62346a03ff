// src/services/frame_clock.rs
//
// Frame pacing between the animation driver and the nannou event loop.
// The driver books frames on one handle; the host polls another handle
// each update and renders a scene frame only when one is due.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::animation::{FrameScheduler, ScheduleError};

#[derive(Debug, Clone)]
pub struct FrameClock {
    due: Rc<Cell<Option<Instant>>>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// A new clock has one frame due so the first paint happens
    pub fn new() -> Self {
        Self {
            due: Rc::new(Cell::new(Some(Instant::now()))),
        }
    }

    /// Book a frame for right now, e.g. after a window resize
    pub fn invalidate(&self) {
        self.book(Instant::now());
    }

    /// True (once) if a booked frame is due at `now`
    pub fn take_due(&self, now: Instant) -> bool {
        match self.due.get() {
            Some(at) if at <= now => {
                self.due.set(None);
                true
            }
            _ => false,
        }
    }

    // keeps the earliest booking
    fn book(&self, at: Instant) {
        let next = match self.due.get() {
            Some(existing) if existing <= at => existing,
            _ => at,
        };
        self.due.set(Some(next));
    }
}

impl FrameScheduler for FrameClock {
    fn schedule_frame(&mut self, delay: Duration) -> Result<(), ScheduleError> {
        let at = Instant::now()
            .checked_add(delay)
            .ok_or(ScheduleError::DelayOverflow(delay))?;
        self.book(at);
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.book(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_has_first_frame_due() {
        let clock = FrameClock::new();
        assert!(clock.take_due(Instant::now()));
        assert!(!clock.take_due(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn test_scheduled_frame_waits_for_delay() {
        let clock = FrameClock::new();
        clock.take_due(Instant::now());

        let mut driver_side = clock.clone();
        driver_side
            .schedule_frame(Duration::from_secs(60))
            .unwrap();

        assert!(!clock.take_due(Instant::now()));
        assert!(clock.take_due(Instant::now() + Duration::from_secs(61)));
    }

    #[test]
    fn test_redraw_request_wins_over_later_booking() {
        let clock = FrameClock::new();
        clock.take_due(Instant::now());

        let mut driver_side = clock.clone();
        driver_side
            .schedule_frame(Duration::from_secs(60))
            .unwrap();
        driver_side.request_redraw();
        assert!(clock.take_due(Instant::now()));
    }

    #[test]
    fn test_overflowing_delay_is_an_error() {
        let mut clock = FrameClock::new();
        assert_eq!(
            clock.schedule_frame(Duration::MAX),
            Err(ScheduleError::DelayOverflow(Duration::MAX))
        );
    }
}
