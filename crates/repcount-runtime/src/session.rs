//! Session - one exercise tracker driven frame by frame

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use repcount_core::Side;
use repcount_exercise::{ExerciseKind, FrameResult, Tracker};

use crate::{
    LandmarkSource, RuntimeError, RuntimeResult, SessionConfig, SessionLog, SourceFrame,
};

/// Consumer of per-frame results (the renderer)
pub trait FrameSink {
    fn on_frame(&mut self, result: &FrameResult);
}

/// Sink that drops every result
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn on_frame(&mut self, _result: &FrameResult) {}
}

impl<F: FnMut(&FrameResult)> FrameSink for F {
    fn on_frame(&mut self, result: &FrameResult) {
        self(result)
    }
}

/// Running totals for a session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames pulled from the source
    pub frames: u64,
    /// Frames with a detection
    pub detections: u64,
    /// Frames skipped for lack of a detection
    pub skipped: u64,
    /// Completed reps
    pub reps: u32,
    /// Feedback after the last processed frame
    pub last_feedback: String,
}

/// Outcome of a finished session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub input_name: String,
    pub exercise: ExerciseKind,
    pub side: Side,
    pub stats: SessionStats,
    pub log_path: Option<PathBuf>,
}

impl SessionReport {
    pub fn reps(&self) -> u32 {
        self.stats.reps
    }
}

/// A single counting session
pub struct Session {
    config: SessionConfig,
    tracker: Tracker,
    stats: SessionStats,
    log: Option<SessionLog<BufWriter<File>>>,
}

impl Session {
    /// Start a session, opening its log file when a log directory is set
    pub fn new(config: SessionConfig) -> RuntimeResult<Self> {
        let log = match config.log_path() {
            Some(path) => Some(SessionLog::create(
                &path,
                &config.input_name,
                config.exercise,
                config.side,
            )?),
            None => None,
        };

        Ok(Session {
            tracker: Tracker::new(config.exercise, config.side),
            config,
            stats: SessionStats::default(),
            log,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Process one frame
    ///
    /// Returns `Ok(None)` when the frame had no detection.
    pub fn step(&mut self, frame: &SourceFrame) -> RuntimeResult<Option<FrameResult>> {
        self.stats.frames += 1;

        let Some(result) = self.tracker.process(&frame.pose, frame.size)? else {
            self.stats.skipped += 1;
            tracing::debug!(frame = self.stats.frames, "no detection, frame skipped");
            return Ok(None);
        };

        self.stats.detections += 1;
        self.stats.reps = result.counter;
        if self.stats.last_feedback != result.feedback {
            self.stats.last_feedback.clone_from(&result.feedback);
        }

        if result.rep_completed {
            tracing::info!(
                reps = result.counter,
                frame = self.stats.frames,
                angle = result.angle,
                feedback = %result.feedback,
                "rep counted"
            );
            if let Some(log) = self.log.as_mut() {
                log.record_rep(self.stats.frames, &result)?;
            }
        }

        Ok(Some(result))
    }

    /// Drive the session until the source is exhausted
    pub fn run<S, K>(mut self, source: &mut S, sink: &mut K) -> RuntimeResult<SessionReport>
    where
        S: LandmarkSource + ?Sized,
        K: FrameSink + ?Sized,
    {
        let span = tracing::info_span!(
            "session",
            input = %self.config.input_name,
            exercise = %self.config.exercise,
            side = %self.config.side,
        );
        let _enter = span.enter();
        tracing::info!("processing");

        match self.drain(source, sink) {
            Ok(()) => self.finish(),
            Err(err) => {
                self.abort(&err);
                Err(err)
            }
        }
    }

    fn drain<S, K>(&mut self, source: &mut S, sink: &mut K) -> RuntimeResult<()>
    where
        S: LandmarkSource + ?Sized,
        K: FrameSink + ?Sized,
    {
        while let Some(frame) = source.next_frame() {
            if let Some(result) = self.step(&frame?)? {
                sink.on_frame(&result);
            }
        }
        Ok(())
    }

    /// Close the log after a failure, keeping the reps counted so far
    fn abort(self, err: &RuntimeError) {
        tracing::warn!(
            reps = self.stats.reps,
            frames = self.stats.frames,
            error = %err,
            "session aborted"
        );
        if let Some(log) = self.log {
            if let Err(e) = log.abort(self.stats.reps, err) {
                tracing::warn!(error = %e, "failed to close session log");
            }
        }
    }

    /// Close the log and produce the report
    pub fn finish(self) -> RuntimeResult<SessionReport> {
        let log_path = self.config.log_path();
        if let Some(log) = self.log {
            log.finish(self.stats.reps)?;
        }

        if self.stats.skipped > 0 {
            tracing::warn!(
                skipped = self.stats.skipped,
                frames = self.stats.frames,
                "frames without detection"
            );
        }
        tracing::info!(reps = self.stats.reps, frames = self.stats.frames, "session finished");

        Ok(SessionReport {
            input_name: self.config.input_name,
            exercise: self.config.exercise,
            side: self.config.side,
            stats: self.stats,
            log_path,
        })
    }
}
