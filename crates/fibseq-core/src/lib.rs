//! # fibseq-core
//!
//! Core library for the fibseq sequence printer. Implements iterative
//! Fibonacci sequence generation with wrapping 32-bit arithmetic and the
//! wall-clock timing wrapper around a generation run.

pub mod constants;
pub mod sequence;
pub mod timing;

// Re-exports
pub use constants::{DEFAULT_COUNT, FIRST_WRAPPED_INDEX};
pub use sequence::generate;
pub use timing::{time, Timed};
