use std::fmt;
use std::str::FromStr;

use crate::error::NumeralError;

/// Upper bound of an enumerated range.
///
/// Classes are selected by the power-of-ten token that follows the last
/// number of the range (`"1000"` selects 1-999).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Magnitude {
	/// 1-99
	Hundred,
	/// 1-999
	Thousand,
	/// 1-999 999
	Million,
	/// 1-999 999 999
	#[default]
	Billion,
}

impl Magnitude {
	/// Largest number of the range (inclusive).
	pub fn max(self) -> u64 {
		match self {
			Magnitude::Hundred => 99,
			Magnitude::Thousand => 999,
			Magnitude::Million => 999_999,
			Magnitude::Billion => 999_999_999,
		}
	}

	/// Selector token of the class.
	pub fn token(self) -> &'static str {
		match self {
			Magnitude::Hundred => "100",
			Magnitude::Thousand => "1000",
			Magnitude::Million => "1000000",
			Magnitude::Billion => "1000000000",
		}
	}
}

impl FromStr for Magnitude {
	type Err = NumeralError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"100" => Ok(Magnitude::Hundred),
			"1000" => Ok(Magnitude::Thousand),
			"1000000" => Ok(Magnitude::Million),
			"1000000000" => Ok(Magnitude::Billion),
			other => Err(NumeralError::InvalidMagnitudeClass(other.to_owned())),
		}
	}
}

impl fmt::Display for Magnitude {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}
