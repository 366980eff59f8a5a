/// Outcome of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStep {
    /// Number of fixed sub-steps run
    pub substeps: u32,

    /// Whether a sub-step reported that the ball stopped
    pub stopped: bool,
}

/// Turns variable frame times into whole fixed sub-steps.
///
/// Leftover time carries over to the next frame. At most `max_substeps` run per
/// frame, and when the backlog still exceeds `max_substeps` sub-steps afterwards it
/// is dropped so a long stall cannot snowball.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubStepAccumulator {
    accumulator: f32,
}

impl SubStepAccumulator {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Time banked for the next frame
    pub fn get_accumulated(&self) -> f32 {
        self.accumulator
    }

    /// Drops any banked time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Runs `step` once per whole `fixed_dt` available.
    ///
    /// `step` returns whether the ball is still moving. When it returns false the
    /// accumulator is emptied and the frame ends. Non-finite or negative frame
    /// times are ignored.
    pub fn step_frame<F>(
        &mut self,
        frame_dt: f32,
        fixed_dt: f32,
        max_substeps: u32,
        mut step: F,
    ) -> FrameStep
    where
        F: FnMut(f32) -> bool,
    {
        if !(frame_dt.is_finite() && frame_dt > 0.0 && fixed_dt > 0.0) {
            return FrameStep::default();
        }

        self.accumulator += frame_dt;

        let mut substeps = 0u32;
        while self.accumulator >= fixed_dt && substeps < max_substeps {
            self.accumulator -= fixed_dt;
            substeps += 1;

            if !step(fixed_dt) {
                self.accumulator = 0.0;
                return FrameStep { substeps, stopped: true };
            }
        }

        // Clamp accumulator to avoid spiral of death
        if self.accumulator > fixed_dt * max_substeps as f32 {
            log::debug!("dropping {:.4}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        FrameStep { substeps, stopped: false }
    }
}
