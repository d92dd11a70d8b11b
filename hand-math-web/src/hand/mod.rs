//! Hand module - tracker output for a single camera frame
//!
//! Re-exports only. Data types and index constants live in landmarks.rs.

mod landmarks;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use landmarks::*;
