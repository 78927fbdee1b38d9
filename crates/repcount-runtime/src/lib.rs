//! Repcount Runtime - Frame driver
//!
//! Feeds already-detected landmark frames through one exercise tracker per
//! session:
//! 1. Pull a frame from a landmark source
//! 2. Skip frames with no detection
//! 3. Advance the tracker
//! 4. Hand the result to the sink (renderer)
//! 5. Record completed reps in the session log
//!
//! Batches run one independent session per input file.

pub mod batch;
pub mod config;
pub mod error;
pub mod log;
pub mod session;
pub mod source;
pub mod telemetry;

pub use batch::*;
pub use config::*;
pub use error::*;
pub use log::*;
pub use session::*;
pub use source::*;
pub use telemetry::*;
