//! Bicep curl - elbow flexion
//!
//! Extending the arm past `EXTENDED` arms the rep; flexing below `FLEXED`
//! from the extended stage completes it (counted on the way up).

use repcount_core::{angle_at, FrameSize, PoseFrame, RepCountResult, Side};

use crate::state::Measurement;
use crate::{ExerciseKind, ExerciseState, FrameResult, Stage};

/// Elbow angle above which the arm counts as extended
pub const EXTENDED: f32 = 145.0;
/// Elbow angle below which the arm counts as flexed
pub const FLEXED: f32 = 60.0;

pub const GOOD_REP: &str = "Good Rep!";
pub const LOWER_FULLY: &str = "Lower arm fully";

/// Curl stage machine
///
/// Feedback is sticky: a frame where no rule fires keeps the previous message.
#[derive(Debug, Clone)]
pub struct Curl {
    state: ExerciseState,
}

impl Curl {
    pub fn new(side: Side) -> Self {
        Self {
            state: ExerciseState::new(side),
        }
    }

    pub fn state(&self) -> &ExerciseState {
        &self.state
    }

    /// Advance on one frame. Returns `Ok(None)` for a frame with no detection.
    pub fn process(
        &mut self,
        pose: &PoseFrame,
        frame: FrameSize,
    ) -> RepCountResult<Option<FrameResult>> {
        if pose.is_empty() {
            return Ok(None);
        }

        let arm = self.state.side().arm();
        let shoulder = pose.point(arm.proximal)?;
        let elbow = pose.point(arm.vertex)?;
        let wrist = pose.point(arm.distal)?;

        let angle = angle_at(shoulder, elbow, wrist);
        let kind = ExerciseKind::Curl;
        let rep_completed = self.advance(angle);

        tracing::trace!(angle, stage = %self.state.stage(), counter = self.state.counter(), "curl frame");

        Ok(Some(self.state.snapshot(
            Measurement {
                kind,
                angle,
                secondary_angle: None,
                joints: vec![shoulder, elbow, wrist],
                rep_completed,
            },
            frame,
        )))
    }
}

impl Curl {
    /// Apply the threshold rules to one elbow angle. Returns true on a counted rep.
    fn advance(&mut self, angle: f32) -> bool {
        let kind = ExerciseKind::Curl;

        if angle > EXTENDED {
            self.state.enter_stage(kind, Stage::Down, angle);
        }
        if angle < FLEXED {
            match self.state.stage() {
                Stage::Down => {
                    self.state.enter_stage(kind, Stage::Up, angle);
                    self.state.complete_rep(kind, GOOD_REP);
                    return true;
                }
                // Already counted; the arm never went back down
                Stage::Up => self.state.set_feedback(LOWER_FULLY),
                Stage::Unknown => {}
            }
        }
        false
    }
}
