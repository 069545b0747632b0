use log::debug;
use serde::{Deserialize, Serialize};

use super::specification::{LevelType, Origin};

/// Pattern length of the shortest level when planning from `Origin::Lowest`.
pub const LOWEST_PATTERN_LENGTH: usize = 3;

/// Ratio between the pattern lengths of two consecutive levels.
pub const LEVEL_RATIO: usize = 10;

/// One level of injection: `pattern_count` distinct patterns of
/// `pattern_length` symbols, each written `occurrence_count` times.
///
/// # Invariants
/// - `pattern_count >= 1`
/// - `occurrence_count >= 1`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
	pub pattern_length: usize,
	pub pattern_count: usize,
	pub occurrence_count: usize,
}

/// Outcome of parameterizing a pattern length.
///
/// `Skip` means the length leaves room for too few repetitions: the level
/// contributes nothing and no injection takes place.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LevelPlan {
	Skip,
	Inject(Level),
}

/// Plans the pattern lengths of every level, in ascending order.
///
/// # Behavior
/// - `Origin::Lowest`: starts at 3 and multiplies by 10, stopping before
///   the first length that reaches `sequence_length`.
/// - `Origin::Highest`: starts at `floor(3 * sequence_length / 10)` and
///   divides by 10, stopping before the first length equal to 0.
/// - At most `nb_levels` lengths are kept in both cases. When `nb_levels`
///   is larger than the number of representable lengths, the length bound
///   ends the planning.
///
/// Every returned length lies in `[1, sequence_length)`.
pub fn plan_lengths(sequence_length: usize, nb_levels: usize, origin: Origin) -> Vec<usize> {
	let mut lengths = Vec::new();

	match origin {
		Origin::Lowest => {
			let mut pattern_length = LOWEST_PATTERN_LENGTH;
			for _ in 0..nb_levels {
				if pattern_length >= sequence_length {
					break;
				}
				lengths.push(pattern_length);
				pattern_length = match pattern_length.checked_mul(LEVEL_RATIO) {
					Some(next) => next,
					None => break,
				};
			}
		}
		Origin::Highest => {
			// floor(3n / 10) without overflowing on 3n
			let mut pattern_length = sequence_length / 10 * 3 + sequence_length % 10 * 3 / 10;
			for _ in 0..nb_levels {
				if pattern_length == 0 {
					break;
				}
				lengths.push(pattern_length);
				pattern_length /= LEVEL_RATIO;
			}
			lengths.reverse();
		}
	}

	debug!("planned pattern lengths {lengths:?} (origin: {origin}, sequence length: {sequence_length})");
	lengths
}

/// Computes the number of patterns and occurrences for one pattern length.
///
/// # Behavior
/// - `OnePatternManyTimes`: 1 pattern, `floor(2n / 3l)` occurrences;
///   skipped when fewer than 2 occurrences fit.
/// - `ManyPatternsTwice`: `floor(n / 3l)` patterns, 2 occurrences each;
///   skipped when no pattern fits.
///
/// A zero pattern length is always skipped.
pub fn parameterize(sequence_length: usize, pattern_length: usize, level_type: LevelType) -> LevelPlan {
	if pattern_length == 0 {
		return LevelPlan::Skip;
	}

	let plan = match level_type {
		LevelType::OnePatternManyTimes => {
			// floor(floor(2n / 3) / l) == floor(2n / 3l)
			let two_thirds = sequence_length / 3 * 2 + sequence_length % 3 * 2 / 3;
			let occurrence_count = two_thirds / pattern_length;
			if occurrence_count < 2 {
				LevelPlan::Skip
			} else {
				LevelPlan::Inject(Level { pattern_length, pattern_count: 1, occurrence_count })
			}
		}
		LevelType::ManyPatternsTwice => {
			let pattern_count = sequence_length / pattern_length / 3;
			if pattern_count < 1 {
				LevelPlan::Skip
			} else {
				LevelPlan::Inject(Level { pattern_length, pattern_count, occurrence_count: 2 })
			}
		}
	};

	if plan == LevelPlan::Skip {
		debug!("skipping pattern length {pattern_length} ({level_type}, sequence length: {sequence_length})");
	}
	plan
}
