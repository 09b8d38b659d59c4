/// Fixed-timestep accumulator for hosts that drive the world from a
/// variable-rate frame loop.
///
/// The world itself accepts any `dt`; this helper is for hosts that want
/// reproducible runs, converting wall-clock frame deltas into a whole number
/// of equal simulation steps.
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_catch_up: u32,
}

impl FixedTimestep {
    /// `step` is the fixed delta passed to each world update, in seconds.
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            // Long stalls (debugger, tab switch) collapse into a bounded
            // burst instead of a runaway catch-up loop.
            max_catch_up: 8,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up;
        self
    }

    /// Feed one frame's elapsed time; returns how many fixed steps to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let cap = self.step * self.max_catch_up as f32;
        if self.accumulator > cap {
            self.accumulator = cap;
        }
        let steps = (self.accumulator / self.step) as u32;
        self.accumulator -= steps as f32 * self.step;
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Drop any banked time, e.g. after a pause or level transition.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_frame_yields_one_step() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_bank_until_a_step_fits() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.advance(0.006), 0);
        assert_eq!(ts.advance(0.006), 0);
        assert_eq!(ts.advance(0.006), 1);
    }

    #[test]
    fn stall_is_capped_at_max_catch_up() {
        let mut ts = FixedTimestep::new(1.0 / 60.0).with_max_catch_up(5);
        assert_eq!(ts.advance(10.0), 5);
        assert_eq!(ts.advance(0.0), 0);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.advance(-1.0), 0);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn reset_drops_banked_time() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.advance(0.01);
        assert!(ts.alpha() > 0.0);
        ts.reset();
        assert_eq!(ts.advance(0.006), 0);
    }
}
