//! Squat - knee flexion
//!
//! Standing past `STANDING` arms the rep; dropping below `DEPTH` from the
//! standing stage completes it (counted on the way down, unlike the curl).

use repcount_core::{angle_at, FrameSize, PoseFrame, RepCountResult, Side};

use crate::state::Measurement;
use crate::{ExerciseKind, ExerciseState, FrameResult, Stage};

/// Knee angle above which the lifter is standing
pub const STANDING: f32 = 170.0;
/// Knee angle below which the squat is deep enough
pub const DEPTH: f32 = 90.0;
/// Upper bound of the "partial rep" band, measured from `DEPTH`
pub const PARTIAL: f32 = 140.0;

pub const GOOD_DEPTH: &str = "Good Depth!";
pub const GO_LOWER: &str = "Go Lower";

/// Squat stage machine
///
/// Feedback is sticky: a frame where no rule fires keeps the previous message.
#[derive(Debug, Clone)]
pub struct Squat {
    state: ExerciseState,
}

impl Squat {
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

        let leg = self.state.side().leg();
        let hip = pose.point(leg.proximal)?;
        let knee = pose.point(leg.vertex)?;
        let ankle = pose.point(leg.distal)?;

        let angle = angle_at(hip, knee, ankle);
        let kind = ExerciseKind::Squat;
        let rep_completed = self.advance(angle);

        tracing::trace!(angle, stage = %self.state.stage(), counter = self.state.counter(), "squat frame");

        Ok(Some(self.state.snapshot(
            Measurement {
                kind,
                angle,
                secondary_angle: None,
                joints: vec![hip, knee, ankle],
                rep_completed,
            },
            frame,
        )))
    }
}

impl Squat {
    /// Apply the threshold rules to one knee angle. Returns true on a counted rep.
    fn advance(&mut self, angle: f32) -> bool {
        let kind = ExerciseKind::Squat;

        if angle > STANDING {
            self.state.enter_stage(kind, Stage::Up, angle);
        }
        if angle < DEPTH {
            if self.state.stage() == Stage::Up {
                self.state.enter_stage(kind, Stage::Down, angle);
                self.state.complete_rep(kind, GOOD_DEPTH);
                return true;
            }
            self.state.set_feedback(GOOD_DEPTH);
        } else if angle < PARTIAL && self.state.stage() == Stage::Down {
            self.state.set_feedback(GO_LOWER);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::leg_frame;

    fn run(squat: &mut Squat, angles: &[f32]) -> Vec<FrameResult> {
        angles
            .iter()
            .map(|&a| {
                squat
                    .process(&leg_frame(squat.state().side(), a), FrameSize::default())
                    .unwrap()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_counts_on_descent() {
        let mut squat = Squat::new(Side::Left);
        let results = run(&mut squat, &[180.0, 180.0, 80.0]);
        assert_eq!(results[1].counter, 0);
        assert_eq!(results[2].counter, 1);
        assert_eq!(results[2].stage, Stage::Down);
        assert!(results[2].rep_completed);
        assert_eq!(results[2].feedback, GOOD_DEPTH);
    }

    #[test]
    fn test_second_drop_without_standing_does_not_count() {
        let mut squat = Squat::new(Side::Left);
        let results = run(&mut squat, &[180.0, 180.0, 80.0, 150.0, 80.0]);
        let counters: Vec<u32> = results.iter().map(|r| r.counter).collect();
        assert_eq!(counters, vec![0, 0, 1, 1, 1]);
        // Depth is still reinforced without a new rep
        assert_eq!(results[4].feedback, GOOD_DEPTH);
        assert!(!results[4].rep_completed);
    }

    #[test]
    fn test_standing_rearms() {
        let mut squat = Squat::new(Side::Right);
        run(&mut squat, &[180.0, 180.0, 80.0, 180.0, 80.0]);
        assert_eq!(squat.state().counter(), 2);
    }

    #[test]
    fn test_partial_rep_warning() {
        let mut squat = Squat::new(Side::Left);
        let results = run(&mut squat, &[175.0, 85.0, 120.0]);
        assert_eq!(results[2].feedback, GO_LOWER);
        assert_eq!(results[2].stage, Stage::Down);
    }

    #[test]
    fn test_partial_band_needs_down_stage() {
        let mut squat = Squat::new(Side::Left);
        let results = run(&mut squat, &[175.0, 120.0]);
        assert!(results[1].feedback.is_empty());
        assert_eq!(results[1].stage, Stage::Up);
    }

    #[test]
    fn test_deep_from_unknown_reinforces_without_counting() {
        let mut squat = Squat::new(Side::Left);
        let results = run(&mut squat, &[70.0]);
        assert_eq!(results[0].counter, 0);
        assert_eq!(results[0].stage, Stage::Unknown);
        assert_eq!(results[0].feedback, GOOD_DEPTH);
    }

    #[test]
    fn test_feedback_is_sticky_above_partial_band() {
        let mut squat = Squat::new(Side::Left);
        let results = run(&mut squat, &[175.0, 85.0, 160.0]);
        assert_eq!(results[2].feedback, GOOD_DEPTH);
    }

    #[test]
    fn test_depth_boundary_is_partial() {
        let mut squat = Squat::new(Side::Left);
        squat.advance(180.0);
        assert!(squat.advance(85.0));

        // 90 itself is not deep enough: it sits in the partial band
        assert!(!squat.advance(DEPTH));
        assert_eq!(squat.state().feedback(), GO_LOWER);
        assert_eq!(squat.state().counter(), 1);
    }

    #[test]
    fn test_partial_band_upper_bound_keeps_feedback() {
        let mut squat = Squat::new(Side::Left);
        squat.advance(180.0);
        squat.advance(85.0);

        assert!(!squat.advance(PARTIAL));
        assert_eq!(squat.state().feedback(), GOOD_DEPTH);

        assert!(!squat.advance(PARTIAL - 0.01));
        assert_eq!(squat.state().feedback(), GO_LOWER);
    }

    #[test]
    fn test_standing_boundary_does_not_arm() {
        let mut squat = Squat::new(Side::Left);
        squat.advance(STANDING);
        assert_eq!(squat.state().stage(), Stage::Unknown);
        assert!(!squat.advance(80.0));
        assert_eq!(squat.state().counter(), 0);
    }

    #[test]
    fn test_right_angle_knee_from_placed_points() {
        use repcount_core::{BodyJoint, Point2};

        let pose = PoseFrame::neutral()
            .with_point(BodyJoint::LeftHip, Point2::new(0.5, 0.3))
            .with_point(BodyJoint::LeftKnee, Point2::new(0.5, 0.5))
            .with_point(BodyJoint::LeftAnkle, Point2::new(0.7, 0.5));

        let mut squat = Squat::new(Side::Left);
        squat.advance(180.0);
        squat.advance(85.0);
        let result = squat.process(&pose, FrameSize::default()).unwrap().unwrap();

        assert!((result.angle - DEPTH).abs() < 1e-3);
        assert_eq!(result.feedback, GO_LOWER);
        assert!(!result.rep_completed);
    }

    #[test]
    fn test_empty_frame_is_skipped() {
        let mut squat = Squat::new(Side::Left);
        run(&mut squat, &[180.0]);
        let before = squat.state().clone();
        assert_eq!(squat.process(&PoseFrame::empty(), FrameSize::default()), Ok(None));
        assert_eq!(squat.state(), &before);
    }
}
