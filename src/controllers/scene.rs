// src/controllers/scene.rs
//
// Ties the path cursor to the animation driver.
// Every animated frame advances the current motif by one step, and the
// driver stops as soon as a motif finishes its cycle, so each activation
// plays exactly one motif.

use std::num::NonZeroUsize;
use tracing::debug;

use crate::animation::{AnimationDriver, FrameScheduler};
use crate::config::{Config, ConfigError, Palette};
use crate::models::PathCursor;
use crate::render::{MotifGeometry, Surface};

pub struct Scene<S: FrameScheduler> {
    cursor: PathCursor,
    driver: AnimationDriver<S>,
    palette: Palette,
    geometry: MotifGeometry,
}

impl<S: FrameScheduler> Scene<S> {
    pub fn new(
        cursor: PathCursor,
        driver: AnimationDriver<S>,
        palette: Palette,
        geometry: MotifGeometry,
    ) -> Self {
        Self {
            cursor,
            driver,
            palette,
            geometry,
        }
    }

    /// One motif per palette color
    pub fn from_config(config: &Config, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.palette.resolve()?;
        let length = NonZeroUsize::new(palette.colors.len()).ok_or(ConfigError::EmptyPalette)?;
        let cursor = PathCursor::new(length, config.animation.step_size());
        let driver = AnimationDriver::new(scheduler, config.animation.frame_delay());
        let geometry = MotifGeometry::from_config(&config.animation, &config.geometry);
        Ok(Self::new(cursor, driver, palette, geometry))
    }

    pub fn cursor(&self) -> &PathCursor {
        &self.cursor
    }

    pub fn driver(&self) -> &AnimationDriver<S> {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver<S> {
        &mut self.driver
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    pub fn render_frame<D: Surface + ?Sized>(&mut self, surface: &mut D) {
        surface.clear(self.palette.background);
        self.cursor.draw(surface, &self.palette, &self.geometry);

        let cursor = &mut self.cursor;
        self.driver
            .tick(|driver| cursor.update(|_committed| driver.stop()));
    }

    pub fn on_activate(&mut self) {
        let driver = &mut self.driver;
        let accepted = self.cursor.start_updating(|| driver.start());
        if accepted {
            debug!("activation started node {}", self.cursor.current_index());
        }
    }
}
