//! Pose synthesis from target angles
//!
//! Builds full-body frames whose measured angles match a requested value.
//! Used to replay scripted angle streams through the stage machines in tests,
//! benches and demos without a pose detector.

use repcount_core::{place_at_angle, PoseFrame, Point2, Side};

use crate::ExerciseKind;

/// Segment length for synthesized limbs (normalized units)
const LIMB: f32 = 0.15;

/// Elbow angle used for lateral raises when none is requested (straight arm)
pub const STRAIGHT_ARM: f32 = 180.0;

/// Mirror a left-side layout onto the right side of the image
fn on_side(side: Side, p: Point2) -> Point2 {
    match side {
        Side::Left => p,
        Side::Right => Point2::new(1.0 - p.x, p.y),
    }
}

/// Frame whose shoulder–elbow–wrist angle is `elbow_angle`
pub fn arm_frame(side: Side, elbow_angle: f32) -> PoseFrame {
    let arm = side.arm();
    let shoulder = Point2::new(0.4, 0.3);
    let elbow = Point2::new(0.4, 0.3 + LIMB);
    let wrist = place_at_angle(elbow, shoulder, elbow_angle, LIMB);

    PoseFrame::neutral()
        .with_point(arm.proximal, on_side(side, shoulder))
        .with_point(arm.vertex, on_side(side, elbow))
        .with_point(arm.distal, on_side(side, wrist))
}

/// Frame whose hip–knee–ankle angle is `knee_angle`
pub fn leg_frame(side: Side, knee_angle: f32) -> PoseFrame {
    let leg = side.leg();
    let hip = Point2::new(0.45, 0.5);
    let knee = Point2::new(0.45, 0.5 + LIMB);
    let ankle = place_at_angle(knee, hip, knee_angle, LIMB);

    PoseFrame::neutral()
        .with_point(leg.proximal, on_side(side, hip))
        .with_point(leg.vertex, on_side(side, knee))
        .with_point(leg.distal, on_side(side, ankle))
}

/// Frame whose hip–shoulder–elbow angle is `height_angle` and whose
/// shoulder–elbow–wrist angle is `elbow_angle`
pub fn raise_frame(side: Side, height_angle: f32, elbow_angle: f32) -> PoseFrame {
    let arm = side.arm();
    let shoulder = Point2::new(0.5, 0.3);
    let hip = Point2::new(0.5, 0.3 + 2.0 * LIMB);
    let elbow = place_at_angle(shoulder, hip, height_angle, LIMB);
    let wrist = place_at_angle(elbow, shoulder, elbow_angle, LIMB);

    PoseFrame::neutral()
        .with_point(side.hip(), on_side(side, hip))
        .with_point(arm.proximal, on_side(side, shoulder))
        .with_point(arm.vertex, on_side(side, elbow))
        .with_point(arm.distal, on_side(side, wrist))
}

/// Frame realizing the primary angle of `kind`
///
/// For lateral raises `primary` is the height angle and `secondary` the
/// elbow angle (straight when absent). `secondary` is ignored otherwise.
pub fn frame_for(kind: ExerciseKind, side: Side, primary: f32, secondary: Option<f32>) -> PoseFrame {
    match kind {
        ExerciseKind::Curl => arm_frame(side, primary),
        ExerciseKind::Squat => leg_frame(side, primary),
        ExerciseKind::LateralRaise => {
            raise_frame(side, primary, secondary.unwrap_or(STRAIGHT_ARM))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repcount_core::angle_at;

    fn measure(frame: &PoseFrame, chain: [repcount_core::BodyJoint; 3]) -> f32 {
        let [a, b, c] = chain.map(|j| frame.point(j).unwrap());
        angle_at(a, b, c)
    }

    #[test]
    fn test_arm_frame_realizes_angle() {
        for side in [Side::Left, Side::Right] {
            for target in [20.0, 59.0, 61.0, 146.0, 170.0] {
                let frame = arm_frame(side, target);
                let measured = measure(&frame, side.arm().joints());
                assert!((measured - target).abs() < 0.01, "{} vs {}", measured, target);
            }
        }
    }

    #[test]
    fn test_raise_frame_realizes_both_angles() {
        let side = Side::Right;
        let frame = raise_frame(side, 90.0, 120.0);
        let arm = side.arm();
        let height = measure(&frame, [side.hip(), arm.proximal, arm.vertex]);
        let elbow = measure(&frame, arm.joints());
        assert!((height - 90.0).abs() < 0.01);
        assert!((elbow - 120.0).abs() < 0.01);
    }

    #[test]
    fn test_sides_leave_other_side_neutral() {
        let frame = leg_frame(Side::Left, 80.0);
        let neutral = Point2::new(0.5, 0.5);
        for joint in Side::Right.leg().joints() {
            assert_eq!(frame.point(joint).unwrap(), neutral);
        }
    }
}
