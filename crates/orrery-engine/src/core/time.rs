use crate::api::config::StepMode;

/// Fixed timestep accumulator.
/// Ensures integration runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any partially accumulated step.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Converts host frames into integration steps according to the configured `StepMode`.
pub enum FrameClock {
    /// Exactly one step per host frame.
    PerFrame,
    Fixed(FixedTimestep),
}

impl FrameClock {
    pub fn new(mode: StepMode) -> Self {
        match mode {
            StepMode::PerFrame => FrameClock::PerFrame,
            StepMode::FixedTimestep { hz } => FrameClock::Fixed(FixedTimestep::new(1.0 / hz.max(1.0))),
        }
    }

    /// Steps to run for a frame that took `frame_dt` seconds.
    pub fn steps(&mut self, frame_dt: f32) -> u32 {
        match self {
            FrameClock::PerFrame => 1,
            FrameClock::Fixed(ts) => ts.accumulate(frame_dt),
        }
    }

    /// Called when the simulation pauses so no stale time is replayed on resume.
    pub fn reset(&mut self) {
        if let FrameClock::Fixed(ts) = self {
            ts.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0);
        assert_eq!(steps, 10);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn per_frame_ignores_frame_time() {
        let mut clock = FrameClock::new(StepMode::PerFrame);
        assert_eq!(clock.steps(0.0), 1);
        assert_eq!(clock.steps(0.5), 1);
    }

    #[test]
    fn fixed_clock_drops_partial_time_on_reset() {
        let mut clock = FrameClock::new(StepMode::FixedTimestep { hz: 60.0 });
        assert_eq!(clock.steps(0.01), 0);
        clock.reset();
        assert_eq!(clock.steps(0.01), 0);
        assert_eq!(clock.steps(0.01), 1);
    }
}
