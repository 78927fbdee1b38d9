//! Repcount Core - Fundamental types and primitives
//!
//! This crate defines the types every other repcount crate builds on:
//! - Body joints and sides (BodyJoint, Side)
//! - Landmarks and per-frame pose collections (Landmark, PoseFrame)
//! - Planar geometry (angle_at, place_at_angle)
//! - The core error type

pub mod error;
pub mod geometry;
pub mod joint;
pub mod pose;

pub use error::*;
pub use geometry::*;
pub use joint::*;
pub use pose::*;
