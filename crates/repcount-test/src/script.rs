//! Angle scripts - scripted joint-angle streams
//!
//! A script is a list of steps, each either a measured angle (plus an elbow
//! angle for lateral raises) or a detection dropout. Scripts turn into
//! landmark frames via pose synthesis, so they exercise the same code path
//! as detector output.

use repcount_core::{FrameSize, PoseFrame, RepCountResult, Side};
use repcount_exercise::synth::frame_for;
use repcount_exercise::{ExerciseKind, FrameResult, Stage, Tracker};
use repcount_runtime::{SourceFrame, VecSource};

/// One scripted frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptStep {
    /// Detection with the given primary angle and optional secondary angle
    Pose { primary: f32, secondary: Option<f32> },
    /// No detection
    Dropout,
}

/// Scripted stream for one exercise and side
#[derive(Clone, Debug)]
pub struct AngleScript {
    kind: ExerciseKind,
    side: Side,
    size: FrameSize,
    steps: Vec<ScriptStep>,
}

impl AngleScript {
    pub fn new(kind: ExerciseKind, side: Side) -> Self {
        Self {
            kind,
            side,
            size: FrameSize::default(),
            steps: Vec::new(),
        }
    }

    pub fn with_frame_size(mut self, size: FrameSize) -> Self {
        self.size = size;
        self
    }

    /// Append one frame per angle
    pub fn angles(mut self, angles: &[f32]) -> Self {
        self.steps.extend(angles.iter().map(|&primary| ScriptStep::Pose {
            primary,
            secondary: None,
        }));
        self
    }

    /// Append `frames` frames at the same angle
    pub fn hold(mut self, angle: f32, frames: usize) -> Self {
        self.steps.extend(std::iter::repeat(ScriptStep::Pose {
            primary: angle,
            secondary: None,
        })
        .take(frames));
        self
    }

    /// Append one frame with both angles (lateral raise height and elbow)
    pub fn pair(mut self, primary: f32, secondary: f32) -> Self {
        self.steps.push(ScriptStep::Pose {
            primary,
            secondary: Some(secondary),
        });
        self
    }

    /// Append `frames` frames with no detection
    pub fn dropout(mut self, frames: usize) -> Self {
        self.steps
            .extend(std::iter::repeat(ScriptStep::Dropout).take(frames));
        self
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn pose(&self, step: ScriptStep) -> PoseFrame {
        match step {
            ScriptStep::Pose { primary, secondary } => {
                frame_for(self.kind, self.side, primary, secondary)
            }
            ScriptStep::Dropout => PoseFrame::empty(),
        }
    }

    /// Landmark frames for every step
    pub fn frames(&self) -> Vec<SourceFrame> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                SourceFrame::new(self.pose(*step), self.size).with_timestamp(i as u64 * 33)
            })
            .collect()
    }

    /// In-memory source replaying the script
    pub fn source(&self) -> VecSource {
        VecSource::new(self.frames())
    }

    /// Replay through a fresh tracker
    pub fn run(&self) -> RepCountResult<ScriptOutcome> {
        self.run_on(&mut Tracker::new(self.kind, self.side))
    }

    /// Replay through an existing tracker
    pub fn run_on(&self, tracker: &mut Tracker) -> RepCountResult<ScriptOutcome> {
        let results = self
            .steps
            .iter()
            .map(|step| tracker.process(&self.pose(*step), self.size))
            .collect::<RepCountResult<Vec<_>>>()?;

        Ok(ScriptOutcome {
            results,
            counter: tracker.counter(),
            stage: tracker.state().stage(),
        })
    }
}

/// Per-frame results of a replayed script
#[derive(Clone, Debug)]
pub struct ScriptOutcome {
    /// One entry per step; `None` for dropouts
    pub results: Vec<Option<FrameResult>>,
    /// Counter after the last step
    pub counter: u32,
    /// Stage after the last step
    pub stage: Stage,
}

impl ScriptOutcome {
    /// Counter after each step (carried over dropouts)
    pub fn counters(&self) -> Vec<u32> {
        let mut last = 0;
        self.results
            .iter()
            .map(|r| {
                if let Some(r) = r {
                    last = r.counter;
                }
                last
            })
            .collect()
    }

    /// Step indices that completed a rep
    pub fn rep_frames(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().filter(|r| r.rep_completed).map(|_| i))
            .collect()
    }

    /// Feedback after each detected step
    pub fn feedback(&self) -> Vec<&str> {
        self.results
            .iter()
            .flatten()
            .map(|r| r.feedback.as_str())
            .collect()
    }
}
