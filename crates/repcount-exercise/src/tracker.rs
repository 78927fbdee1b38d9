//! Tracker - one exercise stage machine selected at session start

use repcount_core::{FrameSize, PoseFrame, RepCountResult, Side};

use crate::{Curl, ExerciseKind, ExerciseState, FrameResult, LateralRaise, Squat};

/// The active exercise of a session
///
/// Each variant keeps its own transition rules; the enum only dispatches.
#[derive(Debug, Clone)]
pub enum Tracker {
    Curl(Curl),
    Squat(Squat),
    LateralRaise(LateralRaise),
}

impl Tracker {
    /// Create a fresh tracker (stage unknown, zero reps)
    pub fn new(kind: ExerciseKind, side: Side) -> Self {
        match kind {
            ExerciseKind::Curl => Tracker::Curl(Curl::new(side)),
            ExerciseKind::Squat => Tracker::Squat(Squat::new(side)),
            ExerciseKind::LateralRaise => Tracker::LateralRaise(LateralRaise::new(side)),
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            Tracker::Curl(_) => ExerciseKind::Curl,
            Tracker::Squat(_) => ExerciseKind::Squat,
            Tracker::LateralRaise(_) => ExerciseKind::LateralRaise,
        }
    }

    pub fn state(&self) -> &ExerciseState {
        match self {
            Tracker::Curl(e) => e.state(),
            Tracker::Squat(e) => e.state(),
            Tracker::LateralRaise(e) => e.state(),
        }
    }

    pub fn side(&self) -> Side {
        self.state().side()
    }

    pub fn counter(&self) -> u32 {
        self.state().counter()
    }

    /// Advance on one frame
    ///
    /// `Ok(None)` means the frame had no detection and nothing changed.
    pub fn process(
        &mut self,
        pose: &PoseFrame,
        frame: FrameSize,
    ) -> RepCountResult<Option<FrameResult>> {
        match self {
            Tracker::Curl(e) => e.process(pose, frame),
            Tracker::Squat(e) => e.process(pose, frame),
            Tracker::LateralRaise(e) => e.process(pose, frame),
        }
    }
}
