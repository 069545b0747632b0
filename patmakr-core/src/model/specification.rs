use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Level count large enough to never be the binding limit.
///
/// With this value the planner always stops on the pattern length bound.
/// The `Origin` still decides whether the lengths grow from 3 or shrink
/// from `floor(3n / 10)`.
pub const UNBOUNDED_LEVELS: usize = 1000;

/// Longest accepted sequence: the buffer holds one extra trailing slot.
pub const MAX_SEQUENCE_LENGTH: usize = usize::MAX - 1;

/// Where the planned levels are anchored.
///
/// For a sequence of length 1000 and 2 levels, `Lowest` keeps the pattern
/// lengths 3 and 30 while `Highest` keeps 30 and 300.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
	Lowest,
	Highest,
}

/// How many patterns, and how many repetitions, each level receives.
///
/// # Variants
/// - `OnePatternManyTimes`: a single pattern repeated as often as the length allows.
/// - `ManyPatternsTwice`: as many patterns as the length allows, each occurring twice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LevelType {
	OnePatternManyTimes,
	ManyPatternsTwice,
}

impl FromStr for Origin {
	type Err = GenerationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"lowest" => Ok(Origin::Lowest),
			"highest" => Ok(Origin::Highest),
			_ => Err(GenerationError::UnknownOrigin(s.to_owned())),
		}
	}
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Origin::Lowest => f.write_str("lowest"),
			Origin::Highest => f.write_str("highest"),
		}
	}
}

impl FromStr for LevelType {
	type Err = GenerationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"one_pattern_many_times" => Ok(LevelType::OnePatternManyTimes),
			"many_patterns_twice" => Ok(LevelType::ManyPatternsTwice),
			_ => Err(GenerationError::UnknownLevelType(s.to_owned())),
		}
	}
}

impl fmt::Display for LevelType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LevelType::OnePatternManyTimes => f.write_str("one_pattern_many_times"),
			LevelType::ManyPatternsTwice => f.write_str("many_patterns_twice"),
		}
	}
}

/// Parameters of one generation run.
///
/// # Invariants
/// - `sequence_length` is in `[1, MAX_SEQUENCE_LENGTH]`
/// - `nb_levels` is strictly positive
///
/// Values built through `new` or the setters always hold these invariants.
/// Deserialized values are checked again by [`Specification::validate`]
/// before any generation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Specification {
	/// Nominal length of the generated sequence.
	sequence_length: usize,

	/// Upper bound on the number of planned levels.
	nb_levels: usize,

	/// Whether levels are kept from the short or the long end.
	origin: Origin,

	/// Pattern/occurrence policy applied to every level.
	level_type: LevelType,
}

impl Default for Specification {
	/// Sequence of 1000 symbols, unbounded level count, highest origin,
	/// one pattern repeated many times per level.
	fn default() -> Self {
		Self {
			sequence_length: 1_000,
			nb_levels: UNBOUNDED_LEVELS,
			origin: Origin::Highest,
			level_type: LevelType::OnePatternManyTimes,
		}
	}
}

impl Specification {
	/// Creates a validated specification.
	///
	/// # Errors
	/// Returns an error if `sequence_length` or `nb_levels` is zero, or if
	/// `sequence_length` exceeds `MAX_SEQUENCE_LENGTH`.
	pub fn new(
		sequence_length: usize,
		nb_levels: usize,
		origin: Origin,
		level_type: LevelType,
	) -> Result<Self, GenerationError> {
		let specification = Self { sequence_length, nb_levels, origin, level_type };
		specification.validate()?;
		Ok(specification)
	}

	/// Checks the invariants listed on the type.
	pub fn validate(&self) -> Result<(), GenerationError> {
		check_sequence_length(self.sequence_length)?;
		if self.nb_levels == 0 {
			return Err(GenerationError::InvalidLevelCount);
		}
		Ok(())
	}

	pub fn sequence_length(&self) -> usize {
		self.sequence_length
	}

	pub fn nb_levels(&self) -> usize {
		self.nb_levels
	}

	pub fn origin(&self) -> Origin {
		self.origin
	}

	pub fn level_type(&self) -> LevelType {
		self.level_type
	}

	/// Sets the nominal sequence length.
	///
	/// # Errors
	/// Returns an error if the value is zero or exceeds `MAX_SEQUENCE_LENGTH`.
	pub fn set_sequence_length(&mut self, sequence_length: usize) -> Result<(), GenerationError> {
		check_sequence_length(sequence_length)?;
		self.sequence_length = sequence_length;
		Ok(())
	}

	/// Sets the maximal number of levels.
	///
	/// # Errors
	/// Returns an error if the value is zero.
	pub fn set_nb_levels(&mut self, nb_levels: usize) -> Result<(), GenerationError> {
		if nb_levels == 0 {
			return Err(GenerationError::InvalidLevelCount);
		}
		self.nb_levels = nb_levels;
		Ok(())
	}

	pub fn set_origin(&mut self, origin: Origin) {
		self.origin = origin;
	}

	pub fn set_level_type(&mut self, level_type: LevelType) {
		self.level_type = level_type;
	}
}

fn check_sequence_length(sequence_length: usize) -> Result<(), GenerationError> {
	if sequence_length == 0 {
		return Err(GenerationError::InvalidSequenceLength);
	}
	if sequence_length > MAX_SEQUENCE_LENGTH {
		return Err(GenerationError::SequenceTooLong { sequence_length, max: MAX_SEQUENCE_LENGTH });
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_matches_unbounded_highest_configuration() {
		let specification = Specification::default();
		assert_eq!(specification.sequence_length(), 1_000);
		assert_eq!(specification.nb_levels(), UNBOUNDED_LEVELS);
		assert_eq!(specification.origin(), Origin::Highest);
		assert_eq!(specification.level_type(), LevelType::OnePatternManyTimes);
		assert!(specification.validate().is_ok());
	}

	#[test]
	fn new_rejects_zero_length_and_zero_levels() {
		assert_eq!(
			Specification::new(0, 3, Origin::Lowest, LevelType::ManyPatternsTwice),
			Err(GenerationError::InvalidSequenceLength)
		);
		assert_eq!(
			Specification::new(100, 0, Origin::Lowest, LevelType::ManyPatternsTwice),
			Err(GenerationError::InvalidLevelCount)
		);
	}

	#[test]
	fn lengths_without_room_for_the_trailing_slot_are_rejected() {
		let too_long = GenerationError::SequenceTooLong { sequence_length: usize::MAX, max: MAX_SEQUENCE_LENGTH };
		assert_eq!(
			Specification::new(usize::MAX, UNBOUNDED_LEVELS, Origin::Lowest, LevelType::OnePatternManyTimes),
			Err(too_long.clone())
		);

		let mut specification = Specification::default();
		assert_eq!(specification.set_sequence_length(usize::MAX), Err(too_long));
		assert_eq!(specification.sequence_length(), 1_000);
		assert!(specification.set_sequence_length(MAX_SEQUENCE_LENGTH).is_ok());
	}

	#[test]
	fn setters_keep_previous_value_on_error() {
		let mut specification = Specification::default();
		assert!(specification.set_sequence_length(0).is_err());
		assert!(specification.set_nb_levels(0).is_err());
		assert_eq!(specification, Specification::default());

		specification.set_sequence_length(30).unwrap();
		specification.set_nb_levels(1).unwrap();
		specification.set_origin(Origin::Lowest);
		specification.set_level_type(LevelType::ManyPatternsTwice);
		assert_eq!(
			specification,
			Specification::new(30, 1, Origin::Lowest, LevelType::ManyPatternsTwice).unwrap()
		);
	}

	#[test]
	fn enums_parse_case_insensitively() {
		assert_eq!("Lowest".parse::<Origin>(), Ok(Origin::Lowest));
		assert_eq!(" HIGHEST ".parse::<Origin>(), Ok(Origin::Highest));
		assert_eq!(
			"many_patterns_twice".parse::<LevelType>(),
			Ok(LevelType::ManyPatternsTwice)
		);
		assert_eq!(
			LevelType::OnePatternManyTimes.to_string().parse::<LevelType>(),
			Ok(LevelType::OnePatternManyTimes)
		);
		assert_eq!(
			"middle".parse::<Origin>(),
			Err(GenerationError::UnknownOrigin("middle".to_owned()))
		);
		assert!("twice".parse::<LevelType>().is_err());
	}
}
