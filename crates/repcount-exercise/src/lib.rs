//! Repcount Exercise - Stage machines for counting reps
//!
//! Each exercise reads a joint chain for the configured side, measures one or
//! two angles, and advances a stage/counter state:
//! - Curl: elbow angle, counts on the down → up transition
//! - Squat: knee angle, counts on the up → down transition
//! - LateralRaise: shoulder height angle, counts on entering the target band
//!
//! # Ownership
//!
//! A `Tracker` belongs to exactly one session and is mutated once per frame.
//! Nothing is shared between trackers, so independent sessions can run on
//! separate threads without locking.

pub mod curl;
pub mod kind;
pub mod lateral_raise;
pub mod squat;
pub mod state;
pub mod synth;
pub mod tracker;

pub use curl::Curl;
pub use kind::*;
pub use lateral_raise::LateralRaise;
pub use squat::Squat;
pub use state::*;
pub use tracker::*;
