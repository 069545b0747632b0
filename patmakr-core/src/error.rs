use thiserror::Error;

/// Errors reported by sequence generation.
///
/// Skipped levels are not errors: they surface as
/// [`LevelPlan::Skip`](crate::model::level::LevelPlan::Skip).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
	#[error("sequence length must be strictly positive")]
	InvalidSequenceLength,

	#[error("sequence length {sequence_length} exceeds the maximum of {max}")]
	SequenceTooLong {
		sequence_length: usize,
		max: usize,
	},

	#[error("cannot allocate a sequence buffer of {slots} slots")]
	Allocation {
		slots: usize,
	},

	#[error("number of levels must be strictly positive")]
	InvalidLevelCount,

	#[error("pattern length {pattern_length} must be in [1, {sequence_length})")]
	PatternTooLong {
		pattern_length: usize,
		sequence_length: usize,
	},

	#[error("level needs at least one pattern and one occurrence, got {pattern_count} pattern(s) x {occurrence_count} occurrence(s)")]
	EmptyLevel {
		pattern_count: usize,
		occurrence_count: usize,
	},

	#[error("sequence buffer holds {actual} slots, expected {expected}")]
	BufferLength {
		expected: usize,
		actual: usize,
	},

	#[error("unknown origin '{0}', expected 'lowest' or 'highest'")]
	UnknownOrigin(String),

	#[error("unknown level type '{0}', expected 'one_pattern_many_times' or 'many_patterns_twice'")]
	UnknownLevelType(String),
}
