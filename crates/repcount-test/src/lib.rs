//! Repcount Test Harness - Scripted scenarios and session fuzzing
//!
//! This crate provides:
//! - Angle scripts replayed through trackers and sessions
//! - Seeded random angle walks with detection dropouts
//! - End-to-end scenarios for every exercise

pub mod fuzzer;
pub mod scenarios;
pub mod script;

pub use fuzzer::*;
pub use scenarios::*;
pub use script::*;
