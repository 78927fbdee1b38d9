//! Session configuration

use std::path::PathBuf;

use repcount_core::Side;
use repcount_exercise::ExerciseKind;

/// Configuration of one counting session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Exercise to count
    pub exercise: ExerciseKind,
    /// Side of the body to track
    pub side: Side,
    /// Name used in log file names and log headers
    pub input_name: String,
    /// Directory for `<input_name>_log.txt` (no log file when unset)
    pub log_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            exercise: ExerciseKind::Curl,
            side: Side::Left,
            input_name: "session".to_string(),
            log_dir: None,
        }
    }
}

impl SessionConfig {
    pub fn new(exercise: ExerciseKind, side: Side) -> Self {
        SessionConfig {
            exercise,
            side,
            ..Self::default()
        }
    }

    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = name.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Path of the session log, if logging is enabled
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}_log.txt", self.input_name)))
    }
}
