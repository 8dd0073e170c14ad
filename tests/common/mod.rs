//! Common test infrastructure for Chromagrid integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;
pub mod log_capture;
pub mod recording_canvas;

pub use assertions::*;
pub use log_capture::LogCapture;
pub use recording_canvas::{CanvasOp, RecordingCanvas};
