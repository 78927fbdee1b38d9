//! Session Fuzzer - Random angle walks against stage machine invariants
//!
//! Checks, frame by frame:
//! - The counter never decreases and grows by at most one
//! - `rep_completed` is set exactly when the counter grows
//! - Dropout frames leave the state untouched
//! - Reported angles stay within [0, 180]
//! - No rep is counted while the stage is still unknown

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use repcount_core::{FrameSize, PoseFrame, RepCountResult, Side};
use repcount_exercise::synth::frame_for;
use repcount_exercise::{ExerciseKind, Tracker};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of frames per run
    pub frames: usize,
    /// Probability of a detection dropout (0.0 - 1.0)
    pub dropout_prob: f64,
    /// Largest angle change between consecutive frames, in degrees
    pub max_step: f32,
    /// Probability of a jump to a random angle (detector glitch)
    pub jump_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            frames: 2000,
            dropout_prob: 0.05,
            max_step: 12.0,
            jump_prob: 0.01,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            frames: 300,
            ..Self::default()
        }
    }

    /// Heavy fuzzing with a flaky detector
    pub fn heavy() -> Self {
        FuzzerConfig {
            frames: 20_000,
            dropout_prob: 0.2,
            max_step: 25.0,
            jump_prob: 0.05,
            seed: 42,
        }
    }
}

/// Result of a fuzzing run
#[derive(Clone, Debug, Default)]
pub struct FuzzReport {
    pub frames: usize,
    pub dropouts: usize,
    pub reps: u32,
    pub violations: Vec<String>,
}

impl FuzzReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Random-walk driver for one tracker
pub struct SessionFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl SessionFuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    fn next_angle(&mut self, current: f32) -> f32 {
        if self.rng.gen_bool(self.config.jump_prob) {
            return self.rng.gen_range(0.0..=180.0);
        }
        let step = self.rng.gen_range(-self.config.max_step..=self.config.max_step);
        (current + step).clamp(0.0, 180.0)
    }

    /// Drive a fresh tracker and record every invariant violation
    pub fn run(&mut self, kind: ExerciseKind, side: Side) -> RepCountResult<FuzzReport> {
        let mut tracker = Tracker::new(kind, side);
        let mut report = FuzzReport::default();
        let mut primary: f32 = 90.0;
        let mut secondary: f32 = 170.0;

        for frame in 0..self.config.frames {
            report.frames += 1;
            let before = tracker.state().clone();

            if self.rng.gen_bool(self.config.dropout_prob) {
                report.dropouts += 1;
                let result = tracker.process(&PoseFrame::empty(), FrameSize::default())?;
                if result.is_some() {
                    report.violations.push(format!("frame {}: dropout produced a result", frame));
                }
                if tracker.state() != &before {
                    report.violations.push(format!("frame {}: dropout changed state", frame));
                }
                continue;
            }

            primary = self.next_angle(primary);
            secondary = self.next_angle(secondary).max(90.0);
            let pose = frame_for(kind, side, primary, Some(secondary));

            let Some(result) = tracker.process(&pose, FrameSize::default())? else {
                report.violations.push(format!("frame {}: detection produced no result", frame));
                continue;
            };

            let grew = result.counter == before.counter() + 1;
            if result.counter != before.counter() && !grew {
                report.violations.push(format!(
                    "frame {}: counter jumped {} -> {}",
                    frame,
                    before.counter(),
                    result.counter
                ));
            }
            if result.rep_completed != grew {
                report.violations.push(format!(
                    "frame {}: rep_completed={} but counter {} -> {}",
                    frame,
                    result.rep_completed,
                    before.counter(),
                    result.counter
                ));
            }
            if !(0.0..=180.0).contains(&result.angle) {
                report
                    .violations
                    .push(format!("frame {}: angle {} out of range", frame, result.angle));
            }
            if !result.stage.is_known() && result.counter > 0 {
                report
                    .violations
                    .push(format!("frame {}: counted with unknown stage", frame));
            }
            if result.secondary_angle.is_some() != kind.has_secondary_angle() {
                report
                    .violations
                    .push(format!("frame {}: unexpected secondary angle", frame));
            }
        }

        report.reps = tracker.counter();
        Ok(report)
    }
}
