//! Hierarchical pattern sequence generator.
//!
//! This crate builds integer sequences that contain repeated sub-patterns
//! at several pattern lengths ("levels"), for use as controllable input to
//! pattern discovery algorithms:
//! - Planning of the pattern lengths, anchored at the shortest or longest level
//! - Per-level choice of pattern and occurrence counts
//! - Stochastic injection of literal pattern repetitions
//! - Seedable randomness for reproducible sequences
//!
//! Positions not covered by any pattern keep the background symbol `0`.

/// Level planning, pattern injection and the high-level generator.
pub mod model;

/// Error taxonomy shared by every generation step.
pub mod error;

pub use error::GenerationError;
pub use model::generator::{GeneratedSequence, Generator};
pub use model::specification::{LevelType, Origin, Specification};
