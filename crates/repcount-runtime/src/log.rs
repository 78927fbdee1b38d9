//! Session log file
//!
//! Plain-text record of one session: a header naming the input and exercise,
//! one line per completed rep, and the final rep total.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use repcount_core::Side;
use repcount_exercise::{ExerciseKind, FrameResult};

use crate::RuntimeResult;

/// Width of the rule under the header
const RULE_WIDTH: usize = 30;

/// Writer for a session log
pub struct SessionLog<W: Write> {
    out: W,
    reps_logged: u32,
}

impl SessionLog<BufWriter<File>> {
    /// Create the log file, creating its directory if needed
    pub fn create(
        path: &Path,
        input_name: &str,
        exercise: ExerciseKind,
        side: Side,
    ) -> RuntimeResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), input_name, exercise, side)
    }
}

impl<W: Write> SessionLog<W> {
    /// Start a log, writing the header
    pub fn new(mut out: W, input_name: &str, exercise: ExerciseKind, side: Side) -> RuntimeResult<Self> {
        writeln!(out, "Analysis Log for {}", input_name)?;
        writeln!(out, "Exercise: {}, Side: {}", exercise, side)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(Self {
            out,
            reps_logged: 0,
        })
    }

    /// Record a frame that completed a rep
    pub fn record_rep(&mut self, frame_index: u64, result: &FrameResult) -> RuntimeResult<()> {
        writeln!(
            self.out,
            "Rep {} at frame {}: {} (angle {:.1})",
            result.counter,
            frame_index,
            result.feedback.trim_end(),
            result.angle
        )?;
        self.reps_logged += 1;
        Ok(())
    }

    pub fn reps_logged(&self) -> u32 {
        self.reps_logged
    }

    /// Write the final stats and hand back the writer
    pub fn finish(mut self, total_reps: u32) -> RuntimeResult<W> {
        writeln!(self.out)?;
        self.write_totals(total_reps)
    }

    /// Close a session that failed partway, recording why
    ///
    /// The totals cover only the reps counted before the failure.
    pub fn abort(mut self, total_reps: u32, reason: &dyn fmt::Display) -> RuntimeResult<W> {
        writeln!(self.out)?;
        writeln!(self.out, "Session aborted: {}", reason)?;
        self.write_totals(total_reps)
    }

    fn write_totals(mut self, total_reps: u32) -> RuntimeResult<W> {
        writeln!(self.out, "Final Stats:")?;
        writeln!(self.out, "Total Reps: {}", total_reps)?;
        self.out.flush()?;
        Ok(self.out)
    }
}
