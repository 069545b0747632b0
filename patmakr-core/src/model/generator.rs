use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::model::injector::{self, Alphabet, PlantedPattern, Symbol, BACKGROUND};
use crate::model::level::{self, LevelPlan};
use crate::model::specification::{Specification, MAX_SEQUENCE_LENGTH};

/// What happened to one planned pattern length.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LevelReport {
	pub pattern_length: usize,
	pub plan: LevelPlan,
	/// Patterns written for this level, empty when the level was skipped.
	pub patterns: Vec<PlantedPattern>,
}

/// Output of one generation run.
///
/// `symbols` holds `sequence_length + 1` values: the trailing slot carries
/// no meaning.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSequence {
	pub symbols: Vec<Symbol>,
	pub alphabet_size: usize,
	pub levels: Vec<LevelReport>,
}

impl GeneratedSequence {
	/// Drops the diagnostics and returns the bare sequence.
	pub fn into_symbols(self) -> Vec<Symbol> {
		self.symbols
	}
}

/// High-level sequence builder.
///
/// # Responsibilities
/// - Validate the `Specification`
/// - Plan the pattern lengths and their per-level counts
/// - Thread the sequence and its alphabet through every injected level,
///   shortest pattern length first
pub struct Generator;

impl Generator {
	/// Plans every level of `specification` without touching any sequence.
	///
	/// Lengths come in ascending order, each paired with its outcome.
	///
	/// # Errors
	/// Returns an error if the specification is invalid.
	pub fn plan(specification: &Specification) -> Result<Vec<(usize, LevelPlan)>, GenerationError> {
		specification.validate()?;

		let sequence_length = specification.sequence_length();
		let plans = level::plan_lengths(sequence_length, specification.nb_levels(), specification.origin())
			.into_iter()
			.map(|pattern_length| {
				(pattern_length, level::parameterize(sequence_length, pattern_length, specification.level_type()))
			})
			.collect();

		Ok(plans)
	}

	/// Builds a sequence for `specification`, drawing every start offset from `rng`.
	///
	/// # Behavior
	/// - Starts from `sequence_length + 1` background symbols and a fresh alphabet.
	/// - Skipped levels leave the sequence untouched.
	/// - Longer levels are injected last and may overwrite shorter ones.
	///
	/// # Errors
	/// Returns an error if the specification is invalid, if the buffer cannot
	/// be allocated, or if a planned level breaks the injection preconditions
	/// (never expected).
	pub fn run<R: Rng>(specification: &Specification, rng: &mut R) -> Result<GeneratedSequence, GenerationError> {
		let plans = Self::plan(specification)?;
		let sequence_length = specification.sequence_length();

		let slots = sequence_length.checked_add(1).ok_or(GenerationError::SequenceTooLong {
			sequence_length,
			max: MAX_SEQUENCE_LENGTH,
		})?;
		let mut symbols: Vec<Symbol> = Vec::new();
		symbols
			.try_reserve_exact(slots)
			.map_err(|_| GenerationError::Allocation { slots })?;
		symbols.resize(slots, BACKGROUND);
		let mut alphabet = Alphabet::new();
		let mut levels = Vec::with_capacity(plans.len());

		for (pattern_length, plan) in plans {
			let patterns = match plan {
				LevelPlan::Skip => Vec::new(),
				LevelPlan::Inject(level) => {
					if level.pattern_length >= sequence_length {
						return Err(GenerationError::PatternTooLong {
							pattern_length: level.pattern_length,
							sequence_length,
						});
					}
					debug!(
						"injecting {} pattern(s) of length {} x {} occurrence(s)",
						level.pattern_count, level.pattern_length, level.occurrence_count
					);
					let injection = injector::inject(symbols, alphabet, sequence_length, &level, rng)?;
					symbols = injection.sequence;
					alphabet = injection.alphabet;
					injection.patterns
				}
			};
			levels.push(LevelReport { pattern_length, plan, patterns });
		}

		debug!("generated {} symbols using an alphabet of {}", symbols.len(), alphabet.size());
		Ok(GeneratedSequence { symbols, alphabet_size: alphabet.size(), levels })
	}
}
