//! Body joint identifiers
//!
//! Indices follow the 33-landmark body model produced by the external pose
//! detector. Exercises address joints by name; the index only matters at the
//! boundary where a landmark collection is read.

use std::fmt;
use std::str::FromStr;

use crate::RepCountError;

/// Number of landmarks in a full body frame
pub const BODY_LANDMARK_COUNT: usize = 33;

/// Joint identifier for the body landmark model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BodyJoint {
    // Head
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,

    // Arms
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,

    // Hands
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,

    // Legs
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,

    // Feet
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyJoint {
    /// All joints in index order
    pub fn all() -> &'static [BodyJoint] {
        use BodyJoint::*;
        &[
            Nose,
            LeftEyeInner,
            LeftEye,
            LeftEyeOuter,
            RightEyeInner,
            RightEye,
            RightEyeOuter,
            LeftEar,
            RightEar,
            MouthLeft,
            MouthRight,
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftWrist,
            RightWrist,
            LeftPinky,
            RightPinky,
            LeftIndex,
            RightIndex,
            LeftThumb,
            RightThumb,
            LeftHip,
            RightHip,
            LeftKnee,
            RightKnee,
            LeftAnkle,
            RightAnkle,
            LeftHeel,
            RightHeel,
            LeftFootIndex,
            RightFootIndex,
        ]
    }

    /// Position of this joint in a landmark collection
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a joint by landmark index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        use BodyJoint::*;
        match self {
            Nose => "nose",
            LeftEyeInner => "left_eye_inner",
            LeftEye => "left_eye",
            LeftEyeOuter => "left_eye_outer",
            RightEyeInner => "right_eye_inner",
            RightEye => "right_eye",
            RightEyeOuter => "right_eye_outer",
            LeftEar => "left_ear",
            RightEar => "right_ear",
            MouthLeft => "mouth_left",
            MouthRight => "mouth_right",
            LeftShoulder => "left_shoulder",
            RightShoulder => "right_shoulder",
            LeftElbow => "left_elbow",
            RightElbow => "right_elbow",
            LeftWrist => "left_wrist",
            RightWrist => "right_wrist",
            LeftPinky => "left_pinky",
            RightPinky => "right_pinky",
            LeftIndex => "left_index",
            RightIndex => "right_index",
            LeftThumb => "left_thumb",
            RightThumb => "right_thumb",
            LeftHip => "left_hip",
            RightHip => "right_hip",
            LeftKnee => "left_knee",
            RightKnee => "right_knee",
            LeftAnkle => "left_ankle",
            RightAnkle => "right_ankle",
            LeftHeel => "left_heel",
            RightHeel => "right_heel",
            LeftFootIndex => "left_foot_index",
            RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for BodyJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three joints forming an angle, with the vertex in the middle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointChain {
    pub proximal: BodyJoint,
    pub vertex: BodyJoint,
    pub distal: BodyJoint,
}

impl JointChain {
    pub const fn new(proximal: BodyJoint, vertex: BodyJoint, distal: BodyJoint) -> Self {
        Self {
            proximal,
            vertex,
            distal,
        }
    }

    /// Joints in proximal, vertex, distal order
    pub fn joints(&self) -> [BodyJoint; 3] {
        [self.proximal, self.vertex, self.distal]
    }
}

/// Side of the body an exercise is tracked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Shoulder, elbow, wrist
    pub fn arm(self) -> JointChain {
        match self {
            Side::Left => JointChain::new(
                BodyJoint::LeftShoulder,
                BodyJoint::LeftElbow,
                BodyJoint::LeftWrist,
            ),
            Side::Right => JointChain::new(
                BodyJoint::RightShoulder,
                BodyJoint::RightElbow,
                BodyJoint::RightWrist,
            ),
        }
    }

    /// Hip, knee, ankle
    pub fn leg(self) -> JointChain {
        match self {
            Side::Left => {
                JointChain::new(BodyJoint::LeftHip, BodyJoint::LeftKnee, BodyJoint::LeftAnkle)
            }
            Side::Right => JointChain::new(
                BodyJoint::RightHip,
                BodyJoint::RightKnee,
                BodyJoint::RightAnkle,
            ),
        }
    }

    pub fn hip(self) -> BodyJoint {
        match self {
            Side::Left => BodyJoint::LeftHip,
            Side::Right => BodyJoint::RightHip,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = RepCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(RepCountError::UnknownSide(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_body_model() {
        assert_eq!(BodyJoint::LeftShoulder.index(), 11);
        assert_eq!(BodyJoint::LeftElbow.index(), 13);
        assert_eq!(BodyJoint::LeftWrist.index(), 15);
        assert_eq!(BodyJoint::RightWrist.index(), 16);
        assert_eq!(BodyJoint::LeftHip.index(), 23);
        assert_eq!(BodyJoint::RightAnkle.index(), 28);
        assert_eq!(BodyJoint::all().len(), BODY_LANDMARK_COUNT);
    }

    #[test]
    fn test_all_is_in_index_order() {
        for (i, joint) in BodyJoint::all().iter().enumerate() {
            assert_eq!(joint.index(), i);
            assert_eq!(BodyJoint::from_index(i), Some(*joint));
        }
        assert_eq!(BodyJoint::from_index(BODY_LANDMARK_COUNT), None);
    }

    #[test]
    fn test_sides_read_disjoint_joints() {
        let left = Side::Left.arm().joints();
        let right = Side::Right.arm().joints();
        assert!(left.iter().all(|j| !right.contains(j)));
        assert_eq!(
            Side::Right.leg().joints(),
            [BodyJoint::RightHip, BodyJoint::RightKnee, BodyJoint::RightAnkle]
        );
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!(" RIGHT ".parse::<Side>(), Ok(Side::Right));
        assert_eq!(
            "up".parse::<Side>(),
            Err(RepCountError::UnknownSide("up".to_string()))
        );
    }
}
