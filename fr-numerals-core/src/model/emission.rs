use std::fmt;

use serde::{Deserialize, Serialize};

/// One generated pair: the decimal digits of a number and its French words.
///
/// While a number is being composed, both fields hold prefixes that later
/// fragments are appended to. Inside a fixed-width group `digits` may carry
/// leading zeros; a finished top-level emission never does.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Emission {
	pub digits: String,
	pub words: String,
}

impl Emission {
	pub fn new(digits: impl Into<String>, words: impl Into<String>) -> Self {
		Self { digits: digits.into(), words: words.into() }
	}

	/// Returns a copy of `self` with both fragments appended.
	pub fn extend(&self, digits: &str, words: &str) -> Self {
		let mut next = self.clone();
		next.digits.push_str(digits);
		next.words.push_str(words);
		next
	}
}

/// Formats as a fixture line body: `words<TAB>digits`.
impl fmt::Display for Emission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}\t{}", self.words, self.digits)
	}
}
