//! Lateral raise - shoulder abduction with a straight arm
//!
//! Two angles per frame:
//! - height: hip–shoulder–elbow, vertex at the shoulder
//! - elbow: shoulder–elbow–wrist, arm straightness
//!
//! A rep counts when the height angle enters the target band from outside it.
//! Lowering the arm below `LOWERED` re-arms the next rep.

use repcount_core::{angle_at, FrameSize, PoseFrame, RepCountResult, Side};

use crate::state::Measurement;
use crate::{ExerciseKind, ExerciseState, FrameResult, Stage};

/// Target height band (exclusive bounds)
pub const BAND_LOW: f32 = 80.0;
pub const BAND_HIGH: f32 = 100.0;
/// Height angle below which the arm is lowered
pub const LOWERED: f32 = 30.0;
/// Elbow angle below which the arm is considered bent
pub const BENT_ELBOW: f32 = 150.0;

pub const STRAIGHTEN_ARMS: &str = "Straighten Arms! ";
pub const GOOD_HEIGHT: &str = "Good Height!";

/// Lateral raise stage machine
///
/// Feedback is rebuilt every frame from that frame's angles. A counted rep
/// replaces the straightness warning for the frame it lands on.
#[derive(Debug, Clone)]
pub struct LateralRaise {
    state: ExerciseState,
}

impl LateralRaise {
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

        let side = self.state.side();
        let arm = side.arm();
        let hip = pose.point(side.hip())?;
        let shoulder = pose.point(arm.proximal)?;
        let elbow = pose.point(arm.vertex)?;
        let wrist = pose.point(arm.distal)?;

        let elbow_angle = angle_at(shoulder, elbow, wrist);
        let height = angle_at(hip, shoulder, elbow);
        let kind = ExerciseKind::LateralRaise;
        let mut rep_completed = false;

        let mut feedback = if elbow_angle < BENT_ELBOW {
            STRAIGHTEN_ARMS
        } else {
            ""
        };

        if height > BAND_LOW && height < BAND_HIGH {
            if self.state.stage() != Stage::Up {
                self.state.enter_stage(kind, Stage::Up, height);
                self.state.complete_rep(kind, GOOD_HEIGHT);
                feedback = GOOD_HEIGHT;
                rep_completed = true;
            }
        } else if height < LOWERED {
            self.state.enter_stage(kind, Stage::Down, height);
        }

        self.state.set_feedback(feedback);

        tracing::trace!(
            height,
            elbow_angle,
            stage = %self.state.stage(),
            counter = self.state.counter(),
            "lateral raise frame"
        );

        Ok(Some(self.state.snapshot(
            Measurement {
                kind,
                angle: height,
                secondary_angle: Some(elbow_angle),
                joints: vec![hip, shoulder, elbow],
                rep_completed,
            },
            frame,
        )))
    }
}
