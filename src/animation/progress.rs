// src/animation/progress.rs
//
// Scalar progress of a single motif.
// A cycle runs value from 0 to 1 (or 1 back to 0) in fixed steps and
// only commits once the full unit has been covered.

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    value: f32,
    direction: f32, // -1, 0 (idle) or 1
    committed: f32,
    step_size: f32,
}

impl Progress {
    pub fn new(step_size: f32) -> Self {
        Self {
            value: 0.0,
            direction: 0.0,
            committed: 0.0,
            step_size,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn committed(&self) -> f32 {
        self.committed
    }

    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advances one step. When the value overshoots a full unit it snaps to
    /// the next whole value, goes idle and reports the committed value.
    pub fn step<F>(&mut self, on_complete: F)
    where
        F: FnOnce(f32),
    {
        if self.is_idle() {
            return;
        }

        self.value += self.step_size * self.direction;
        if (self.value - self.committed).abs() > 1.0 {
            self.value = self.committed + self.direction;
            self.direction = 0.0;
            self.committed = self.value;
            on_complete(self.committed);
        }
    }

    /// Starts a cycle toward the opposite end. Ignored while a cycle is
    /// already running; returns whether the cycle was started.
    pub fn trigger<F>(&mut self, on_start: F) -> bool
    where
        F: FnOnce(),
    {
        if !self.is_idle() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.committed;
        on_start();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.02 / 8.0;

    // Steps until the cycle completes, returning the committed value and step count
    fn run_cycle(progress: &mut Progress) -> (f32, usize) {
        let mut steps = 0;
        let mut done = None;
        while done.is_none() {
            progress.step(|committed| done = Some(committed));
            steps += 1;
            assert!(steps < 10_000, "cycle never completed");
        }
        (done.unwrap_or_default(), steps)
    }

    #[test]
    fn test_new_progress_is_idle_at_zero() {
        let progress = Progress::new(STEP);
        assert!(progress.is_idle());
        assert_eq!(progress.value(), 0.0);
        assert_eq!(progress.committed(), 0.0);
    }

    #[test]
    fn test_idle_step_is_noop() {
        let mut progress = Progress::new(STEP);
        for _ in 0..100 {
            progress.step(|_| panic!("idle progress must not complete"));
        }
        assert_eq!(progress.value(), 0.0);
    }

    #[test]
    fn test_trigger_sets_direction_from_committed() {
        let mut progress = Progress::new(STEP);
        let mut started = false;
        assert!(progress.trigger(|| started = true));
        assert!(started);
        assert_eq!(progress.direction(), 1.0);

        run_cycle(&mut progress);
        assert_eq!(progress.committed(), 1.0);

        assert!(progress.trigger(|| ()));
        assert_eq!(progress.direction(), -1.0);
    }

    #[test]
    fn test_trigger_is_idempotent_while_running() {
        let mut progress = Progress::new(STEP);
        progress.trigger(|| ());
        progress.step(|_| ());
        let before = progress.clone();

        let mut started_again = false;
        assert!(!progress.trigger(|| started_again = true));
        assert!(!started_again);
        assert_eq!(progress, before);
    }

    #[test]
    fn test_cycle_commits_whole_units() {
        let mut progress = Progress::new(STEP);

        progress.trigger(|| ());
        let (committed, steps) = run_cycle(&mut progress);
        assert_eq!(committed, 1.0);
        assert_eq!(progress.value(), 1.0);
        assert!(progress.is_idle());
        // overshoot happens on the first step past one full unit
        assert!(steps as f32 * STEP >= 1.0 - 1e-4);
        assert!((steps - 1) as f32 * STEP <= 1.0 + 1e-4);

        progress.trigger(|| ());
        let (committed, _) = run_cycle(&mut progress);
        assert_eq!(committed, 0.0);
        assert_eq!(progress.value(), 0.0);
        assert!(progress.is_idle());
    }

    #[test]
    fn test_value_stays_within_cycle_bounds() {
        let mut progress = Progress::new(STEP);
        progress.trigger(|| ());
        while !progress.is_idle() {
            progress.step(|_| ());
            assert!(progress.value() >= 0.0);
            assert!(progress.value() <= 1.0 + STEP);
        }
    }

    #[test]
    fn test_committed_never_fractional() {
        let mut progress = Progress::new(0.3);
        for _ in 0..5 {
            let start = progress.committed();
            progress.trigger(|| ());
            while !progress.is_idle() {
                progress.step(|_| ());
                assert_eq!(progress.committed(), start);
            }
            assert_eq!((progress.committed() - start).abs(), 1.0);
        }
    }
}
