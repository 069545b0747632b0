use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use super::level::Level;

/// A value of the generated sequence.
pub type Symbol = usize;

/// Reserved symbol of positions that belong to no pattern.
pub const BACKGROUND: Symbol = 0;

/// Counter of the symbols allocated during one run.
///
/// Symbols are handed out as `1, 2, 3, ...`, so the background symbol is
/// never allocated. An `Alphabet` belongs to a single run and is threaded
/// from one level to the next.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
	size: usize,
}

impl Alphabet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of symbols allocated so far (also the last allocated symbol).
	pub fn size(&self) -> usize {
		self.size
	}

	fn allocate(&mut self) -> Symbol {
		self.size += 1;
		self.size
	}
}

/// Record of one pattern written by [`inject`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlantedPattern {
	/// Window captured after the first occurrence, written verbatim by the others.
	pub template: Vec<Symbol>,

	/// Start offset of every occurrence, in writing order.
	pub starts: Vec<usize>,

	/// Symbols allocated while writing the first occurrence.
	pub fresh_symbols: usize,
}

/// Result of injecting one level.
#[derive(Debug)]
pub struct Injection {
	pub sequence: Vec<Symbol>,
	pub alphabet: Alphabet,
	pub patterns: Vec<PlantedPattern>,
}

/// Writes the patterns of `level`, with all their occurrences, into `sequence`.
///
/// # Parameters
/// - `sequence`: Buffer of `sequence_length + 1` symbols.
/// - `alphabet`: Counter carried over from the previous levels.
/// - `rng`: Source of the start offsets.
///
/// # Behavior
/// For each pattern, every occurrence starts at an offset drawn uniformly
/// in `[0, sequence_length - pattern_length)`.
/// - The first occurrence only fills background positions of its window,
///   each with a freshly allocated symbol. Symbols left by earlier levels
///   are kept. The resulting window becomes the pattern template.
/// - Every other occurrence overwrites its window with the template,
///   whatever the window held before.
///
/// # Errors
/// - `PatternTooLong` if `pattern_length` is not in `[1, sequence_length)`.
/// - `EmptyLevel` if the level has no pattern or no occurrence.
/// - `BufferLength` if `sequence` does not hold `sequence_length + 1` symbols.
pub fn inject<R: Rng>(
	mut sequence: Vec<Symbol>,
	mut alphabet: Alphabet,
	sequence_length: usize,
	level: &Level,
	rng: &mut R,
) -> Result<Injection, GenerationError> {
	let pattern_length = level.pattern_length;
	if pattern_length == 0 || pattern_length >= sequence_length {
		return Err(GenerationError::PatternTooLong { pattern_length, sequence_length });
	}
	if level.pattern_count == 0 || level.occurrence_count == 0 {
		return Err(GenerationError::EmptyLevel {
			pattern_count: level.pattern_count,
			occurrence_count: level.occurrence_count,
		});
	}
	if sequence.len().checked_sub(1) != Some(sequence_length) {
		return Err(GenerationError::BufferLength {
			expected: sequence_length.saturating_add(1),
			actual: sequence.len(),
		});
	}

	let max_start = sequence_length - pattern_length;
	let mut patterns = Vec::with_capacity(level.pattern_count);

	for _ in 0..level.pattern_count {
		let mut template: Vec<Symbol> = Vec::with_capacity(pattern_length);
		let mut starts = Vec::with_capacity(level.occurrence_count);
		let mut fresh_symbols = 0;

		for occurrence in 0..level.occurrence_count {
			let start = rng.random_range(0..max_start);
			let window = &mut sequence[start..start + pattern_length];

			if occurrence == 0 {
				for slot in window.iter_mut() {
					if *slot == BACKGROUND {
						*slot = alphabet.allocate();
						fresh_symbols += 1;
					}
				}
				template.extend_from_slice(window);
			} else {
				window.copy_from_slice(&template);
			}
			starts.push(start);
		}

		trace!("planted pattern of length {pattern_length} at {starts:?} ({fresh_symbols} fresh symbols)");
		patterns.push(PlantedPattern { template, starts, fresh_symbols });
	}

	Ok(Injection { sequence, alphabet, patterns })
}
