//! End-to-end scenarios
//!
//! Canonical scripts for each exercise, and a helper that replays a script
//! through a full runtime session (source → session → sink).

use repcount_core::Side;
use repcount_exercise::{ExerciseKind, FrameResult};
use repcount_runtime::{RuntimeResult, Session, SessionConfig, SessionReport};

use crate::AngleScript;

/// Extend, flex, extend, flex
pub fn curl_two_reps(side: Side) -> AngleScript {
    AngleScript::new(ExerciseKind::Curl, side).angles(&[170.0, 170.0, 50.0, 170.0, 50.0])
}

/// Stand, squat, stand, squat
pub fn squat_two_reps(side: Side) -> AngleScript {
    AngleScript::new(ExerciseKind::Squat, side).angles(&[180.0, 180.0, 80.0, 180.0, 80.0])
}

/// Stand, squat, rise only halfway, squat again
pub fn squat_without_reset(side: Side) -> AngleScript {
    AngleScript::new(ExerciseKind::Squat, side).angles(&[180.0, 180.0, 80.0, 150.0, 80.0])
}

/// Arm held at shoulder height for ten frames
pub fn raise_hold(side: Side) -> AngleScript {
    AngleScript::new(ExerciseKind::LateralRaise, side)
        .hold(10.0, 2)
        .hold(90.0, 10)
}

/// Replay a script through a runtime session, collecting every result
pub fn run_session(
    script: &AngleScript,
    config: SessionConfig,
) -> RuntimeResult<(SessionReport, Vec<FrameResult>)> {
    let mut source = script.source();
    let mut results = Vec::new();
    let mut sink = |r: &FrameResult| results.push(r.clone());
    let report = Session::new(config)?.run(&mut source, &mut sink)?;
    Ok((report, results))
}
