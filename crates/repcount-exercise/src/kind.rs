//! Exercise kind selection

use std::fmt;
use std::str::FromStr;

use repcount_core::RepCountError;

/// Which exercise a session is counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseKind {
    /// Bicep curl (shoulder–elbow–wrist)
    #[default]
    Curl,
    /// Squat (hip–knee–ankle)
    Squat,
    /// Lateral raise (hip–shoulder–elbow height, shoulder–elbow–wrist straightness)
    LateralRaise,
}

impl ExerciseKind {
    pub fn all() -> &'static [ExerciseKind] {
        &[
            ExerciseKind::Curl,
            ExerciseKind::Squat,
            ExerciseKind::LateralRaise,
        ]
    }

    /// Canonical command-line token
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseKind::Curl => "curl",
            ExerciseKind::Squat => "squat",
            ExerciseKind::LateralRaise => "raise",
        }
    }

    /// Does this exercise report a secondary angle?
    pub fn has_secondary_angle(self) -> bool {
        matches!(self, ExerciseKind::LateralRaise)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = RepCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" | "bicep-curl" | "bicep_curl" => Ok(ExerciseKind::Curl),
            "squat" => Ok(ExerciseKind::Squat),
            "raise" | "lateral-raise" | "lateral_raise" => Ok(ExerciseKind::LateralRaise),
            _ => Err(RepCountError::UnknownExercise(s.to_string())),
        }
    }
}
