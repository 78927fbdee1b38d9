//! Exercise state and per-frame results

use std::fmt;

use repcount_core::{FrameSize, Point2, Side};

use crate::ExerciseKind;

/// Phase of the current repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Session start, before any threshold has been crossed
    #[default]
    Unknown,
    Up,
    Down,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Unknown => "",
            Stage::Up => "up",
            Stage::Down => "down",
        }
    }

    pub fn is_known(self) -> bool {
        self != Stage::Unknown
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable per-session state of one exercise
///
/// `counter` only ever grows, by one per completed rep. A fresh state is the
/// only way to start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseState {
    side: Side,
    stage: Stage,
    counter: u32,
    feedback: String,
}

impl ExerciseState {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            stage: Stage::Unknown,
            counter: 0,
            feedback: String::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Latest advisory message (may be empty)
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub(crate) fn enter_stage(&mut self, kind: ExerciseKind, stage: Stage, angle: f32) {
        if self.stage != stage {
            tracing::debug!(
                exercise = %kind,
                side = %self.side,
                from = %self.stage,
                to = %stage,
                angle,
                "stage transition"
            );
            self.stage = stage;
        }
    }

    pub(crate) fn complete_rep(&mut self, kind: ExerciseKind, feedback: &str) {
        self.counter += 1;
        self.set_feedback(feedback);
        tracing::debug!(exercise = %kind, side = %self.side, counter = self.counter, "rep completed");
    }

    pub(crate) fn set_feedback(&mut self, feedback: &str) {
        if self.feedback != feedback {
            self.feedback.clear();
            self.feedback.push_str(feedback);
        }
    }

    pub(crate) fn snapshot(&self, measurement: Measurement, frame: FrameSize) -> FrameResult {
        FrameResult {
            kind: measurement.kind,
            angle: measurement.angle,
            secondary_angle: measurement.secondary_angle,
            counter: self.counter,
            stage: self.stage,
            feedback: self.feedback.clone(),
            joints: measurement.joints,
            frame,
            rep_completed: measurement.rep_completed,
        }
    }
}

/// What one exercise measured in one frame
pub(crate) struct Measurement {
    pub kind: ExerciseKind,
    pub angle: f32,
    pub secondary_angle: Option<f32>,
    pub joints: Vec<Point2>,
    pub rep_completed: bool,
}

/// Per-frame output handed to rendering and logging
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// Exercise that produced this result
    pub kind: ExerciseKind,
    /// Primary angle in degrees (elbow, knee, or shoulder height)
    pub angle: f32,
    /// Elbow straightness for lateral raises
    pub secondary_angle: Option<f32>,
    /// Completed reps so far
    pub counter: u32,
    /// Stage after this frame
    pub stage: Stage,
    /// Advisory message after this frame (may be empty)
    pub feedback: String,
    /// Joints used for the measurement, normalized, vertex in the middle
    pub joints: Vec<Point2>,
    /// Dimensions of the source frame
    pub frame: FrameSize,
    /// Did this frame complete a rep?
    pub rep_completed: bool,
}

impl FrameResult {
    /// Joints scaled to pixel space of the source frame
    pub fn pixel_joints(&self) -> Vec<(i32, i32)> {
        self.joints.iter().map(|p| p.to_pixels(self.frame)).collect()
    }
}
