//! Error types for repcount

use thiserror::Error;

use crate::BodyJoint;

/// Core repcount errors
///
/// An empty detection is not an error: state machines report it as
/// `Ok(None)` and leave their state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepCountError {
    // Integration errors
    #[error("Joint {joint} (index {index}) out of range: frame has {len} landmarks")]
    JointOutOfRange {
        joint: BodyJoint,
        index: usize,
        len: usize,
    },

    // Configuration errors
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("Unknown side: {0}")]
    UnknownSide(String),
}

/// Result type for repcount operations
pub type RepCountResult<T> = Result<T, RepCountError>;
