//! Top-level module for the pattern generation system.
//!
//! It gathers:
//! - The generation parameters (`Specification`)
//! - Pattern length planning and per-level counts (`level`)
//! - Pattern injection with its alphabet counter (`injector`)
//! - The high-level orchestration (`Generator`)

/// High-level interface building a whole sequence from a `Specification`.
pub mod generator;

/// Pattern length planning and per-level pattern/occurrence counts.
pub mod level;

/// Writes the patterns of one level, and their repetitions, into a sequence.
pub mod injector;

/// Generation parameters: sequence length, level count, origin and level type.
pub mod specification;
