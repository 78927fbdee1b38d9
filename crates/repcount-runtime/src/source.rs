//! Landmark sources
//!
//! The pose detector runs outside this crate. A source yields what it
//! produced, one frame at a time, in arrival order.
//!
//! # Wire format
//!
//! `JsonLinesSource` reads one JSON object per line:
//!
//! ```text
//! {"width":640,"height":480,"timestamp_ms":33,"landmarks":[[0.41,0.30,-0.1,0.99], ...]}
//! ```
//!
//! Each landmark is `[x, y]`, `[x, y, z]` or `[x, y, z, visibility]`, listed
//! in body-model index order. An empty `landmarks` array is a frame where
//! detection failed. Width and height default to 640x480 when omitted.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use repcount_core::{FrameSize, Landmark, PoseFrame};
use serde::{Deserialize, Serialize};

use crate::{RuntimeError, RuntimeResult};

/// One frame as delivered by the pose detector
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceFrame {
    pub pose: PoseFrame,
    pub size: FrameSize,
    pub timestamp_ms: Option<u64>,
}

impl SourceFrame {
    pub fn new(pose: PoseFrame, size: FrameSize) -> Self {
        Self {
            pose,
            size,
            timestamp_ms: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Encode as one line of the JSON lines wire format (no trailing newline)
    pub fn to_json_line(&self) -> RuntimeResult<String> {
        let wire = WireFrame {
            width: Some(self.size.width),
            height: Some(self.size.height),
            timestamp_ms: self.timestamp_ms,
            landmarks: self
                .pose
                .landmarks()
                .iter()
                .map(|l| vec![l.x, l.y, l.z, l.visibility])
                .collect(),
        };
        serde_json::to_string(&wire).map_err(RuntimeError::Encode)
    }
}

/// Producer of landmark frames
pub trait LandmarkSource {
    /// Next frame, or `None` when the stream has ended
    fn next_frame(&mut self) -> Option<RuntimeResult<SourceFrame>>;
}

/// In-memory source
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    frames: VecDeque<SourceFrame>,
}

impl VecSource {
    pub fn new(frames: impl IntoIterator<Item = SourceFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LandmarkSource for VecSource {
    fn next_frame(&mut self) -> Option<RuntimeResult<SourceFrame>> {
        self.frames.pop_front().map(Ok)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp_ms: Option<u64>,
    #[serde(default)]
    landmarks: Vec<Vec<f32>>,
}

impl WireFrame {
    fn into_frame(self, line: usize) -> RuntimeResult<SourceFrame> {
        let defaults = FrameSize::default();
        let size = FrameSize::new(
            self.width.unwrap_or(defaults.width),
            self.height.unwrap_or(defaults.height),
        );

        let landmarks = self
            .landmarks
            .into_iter()
            .map(|c| match c.as_slice() {
                [x, y] => Ok(Landmark::new(*x, *y, 0.0, 1.0)),
                [x, y, z] => Ok(Landmark::new(*x, *y, *z, 1.0)),
                [x, y, z, v] => Ok(Landmark::new(*x, *y, *z, *v)),
                other => Err(RuntimeError::BadLandmark {
                    line,
                    len: other.len(),
                }),
            })
            .collect::<RuntimeResult<Vec<_>>>()?;

        Ok(SourceFrame {
            pose: PoseFrame::new(landmarks),
            size,
            timestamp_ms: self.timestamp_ms,
        })
    }
}

/// Source reading the JSON lines wire format
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl JsonLinesSource<BufReader<File>> {
    /// Open a landmark file
    pub fn open(path: impl AsRef<Path>) -> RuntimeResult<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> LandmarkSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Option<RuntimeResult<SourceFrame>> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let text = self.buf.trim();
                    if text.is_empty() {
                        continue;
                    }
                    let line = self.line;
                    return Some(
                        serde_json::from_str::<WireFrame>(text)
                            .map_err(|source| RuntimeError::MalformedFrame { line, source })
                            .and_then(|wire| wire.into_frame(line)),
                    );
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repcount_core::{BodyJoint, Point2};
    use std::io::Cursor;

    fn read_all(text: &str) -> Vec<RuntimeResult<SourceFrame>> {
        let mut source = JsonLinesSource::new(Cursor::new(text.to_string()));
        std::iter::from_fn(|| source.next_frame()).collect()
    }

    #[test]
    fn test_parses_frames_and_skips_blank_lines() {
        let text = "{\"width\":320,\"height\":240,\"timestamp_ms\":5,\"landmarks\":[[0.1,0.2],[0.3,0.4,0.5],[0.6,0.7,0.8,0.9]]}\n\n{\"landmarks\":[]}\n";
        let frames: Vec<SourceFrame> = read_all(text).into_iter().map(|r| r.unwrap()).collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].size, FrameSize::new(320, 240));
        assert_eq!(frames[0].timestamp_ms, Some(5));
        assert_eq!(frames[0].pose.len(), 3);
        assert_eq!(
            frames[0].pose.landmarks()[2],
            Landmark::new(0.6, 0.7, 0.8, 0.9)
        );
        assert!(frames[1].pose.is_empty());
        assert_eq!(frames[1].size, FrameSize::default());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let results = read_all("{\"landmarks\":[]}\n\nnot json\n");
        assert!(results[0].is_ok());
        match &results[1] {
            Err(RuntimeError::MalformedFrame { line, .. }) => assert_eq!(*line, 3),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_bad_landmark_arity() {
        let results = read_all("{\"landmarks\":[[0.1]]}\n");
        assert!(matches!(
            results[0],
            Err(RuntimeError::BadLandmark { line: 1, len: 1 })
        ));
    }

    #[test]
    fn test_json_line_round_trip() {
        let pose = PoseFrame::neutral().with_point(BodyJoint::LeftElbow, Point2::new(0.25, 0.75));
        let frame = SourceFrame::new(pose, FrameSize::new(1280, 720)).with_timestamp(99);

        let line = frame.to_json_line().unwrap();
        let parsed = read_all(&line).remove(0).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_vec_source_drains_in_order() {
        let frames = vec![
            SourceFrame::default().with_timestamp(1),
            SourceFrame::default().with_timestamp(2),
        ];
        let mut source = VecSource::new(frames);
        assert_eq!(source.next_frame().unwrap().unwrap().timestamp_ms, Some(1));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next_frame().unwrap().unwrap().timestamp_ms, Some(2));
        assert!(source.next_frame().is_none());
    }
}
