//! Landmarks and per-frame pose collections
//!
//! A `PoseFrame` is what the external pose detector hands over for one video
//! frame: an ordered collection addressed by `BodyJoint` index. An empty
//! frame means nothing was detected.

use crate::{BodyJoint, RepCountError, RepCountResult, BODY_LANDMARK_COUNT};

/// 2D position (normalized coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale normalized coordinates to pixel space
    pub fn to_pixels(self, size: FrameSize) -> (i32, i32) {
        (
            (self.x * size.width as f32) as i32,
            (self.y * size.height as f32) as i32,
        )
    }

    /// Distance to another point
    pub fn distance(self, other: Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pixel dimensions of the frame a pose was detected in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// A single detected landmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// 0-1 normalized, relative to frame width
    pub x: f32,
    /// 0-1 normalized, relative to frame height
    pub y: f32,
    /// Relative depth (ignored by the engine)
    pub z: f32,
    /// Detector confidence (ignored by the engine)
    pub visibility: f32,
}

impl Default for Landmark {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            visibility: 1.0,
        }
    }
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility,
        }
    }

    /// Landmark at a planar position with full visibility
    pub fn at(point: Point2) -> Self {
        Self {
            x: point.x,
            y: point.y,
            ..Self::default()
        }
    }

    /// Planar position (z and visibility dropped)
    #[inline]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Landmarks detected in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseFrame {
    landmarks: Vec<Landmark>,
}

impl PoseFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Frame where detection failed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Full body frame with every landmark at the image center
    pub fn neutral() -> Self {
        Self {
            landmarks: vec![Landmark::at(Point2::new(0.5, 0.5)); BODY_LANDMARK_COUNT],
        }
    }

    /// Override one landmark's planar position, growing the frame if needed
    pub fn with_point(mut self, joint: BodyJoint, point: Point2) -> Self {
        self.set_point(joint, point);
        self
    }

    pub fn set_point(&mut self, joint: BodyJoint, point: Point2) {
        let idx = joint.index();
        if idx >= self.landmarks.len() {
            self.landmarks.resize(idx + 1, Landmark::default());
        }
        self.landmarks[idx].x = point.x;
        self.landmarks[idx].y = point.y;
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn landmark(&self, joint: BodyJoint) -> Option<&Landmark> {
        self.landmarks.get(joint.index())
    }

    /// Planar position of a joint
    ///
    /// A non-empty frame that is too short for the requested joint is an
    /// integration error, not a detection failure.
    pub fn point(&self, joint: BodyJoint) -> RepCountResult<Point2> {
        self.landmark(joint)
            .map(Landmark::point)
            .ok_or(RepCountError::JointOutOfRange {
                joint,
                index: joint.index(),
                len: self.landmarks.len(),
            })
    }
}

impl From<Vec<Landmark>> for PoseFrame {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_truncates() {
        let size = FrameSize::new(640, 480);
        assert_eq!(Point2::new(0.5, 0.25).to_pixels(size), (320, 120));
        assert_eq!(Point2::new(0.999, 0.999).to_pixels(size), (639, 479));
    }

    #[test]
    fn test_neutral_frame_is_full() {
        let frame = PoseFrame::neutral();
        assert_eq!(frame.len(), BODY_LANDMARK_COUNT);
        assert!(!frame.is_empty());
        assert_eq!(
            frame.point(BodyJoint::RightFootIndex),
            Ok(Point2::new(0.5, 0.5))
        );
    }

    #[test]
    fn test_point_out_of_range() {
        let frame = PoseFrame::new(vec![Landmark::default(); 12]);
        assert!(frame.point(BodyJoint::LeftShoulder).is_ok());
        assert_eq!(
            frame.point(BodyJoint::LeftElbow),
            Err(RepCountError::JointOutOfRange {
                joint: BodyJoint::LeftElbow,
                index: 13,
                len: 12,
            })
        );
    }

    #[test]
    fn test_with_point_grows_frame() {
        let frame = PoseFrame::empty().with_point(BodyJoint::LeftWrist, Point2::new(0.1, 0.2));
        assert_eq!(frame.len(), 16);
        assert_eq!(frame.point(BodyJoint::LeftWrist), Ok(Point2::new(0.1, 0.2)));
    }

    #[test]
    fn test_point_ignores_depth() {
        let mut landmarks = vec![Landmark::default(); BODY_LANDMARK_COUNT];
        landmarks[BodyJoint::Nose.index()] = Landmark::new(0.4, 0.6, -3.0, 0.2);
        let frame = PoseFrame::from(landmarks);
        assert_eq!(frame.point(BodyJoint::Nose), Ok(Point2::new(0.4, 0.6)));
    }
}
