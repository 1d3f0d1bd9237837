use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumeralError;

/// How "et" is joined in 21, 31, 41, 51, 61 and 71.
///
/// # Variants
/// - `Spaced`: "vingt et un", "soixante et onze" (traditional spelling).
/// - `Hyphenated`: "vingt-et-un", "soixante-et-onze" (1990 reform).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
	#[default]
	Spaced,
	Hyphenated,
}

/// Whether "vingts" / "cents" take their plural mark.
///
/// # Variants
/// - `Agree`: plural when the round number ends the phrase or is followed by
///   "millions", singular before "mille".
/// - `Invariant`: never pluralized.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Agreement {
	#[default]
	Agree,
	Invariant,
}

/// What follows a group of up to three digits in the phrase being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
	/// Nothing follows: last group of the number.
	Final,
	/// The group multiplies "mille".
	BeforeMille,
	/// The group multiplies "millions".
	BeforeMillions,
}

impl Position {
	/// "mille" is an adjective and blocks the plural of the group before it.
	fn allows_plural(self) -> bool {
		self != Position::BeforeMille
	}
}

/// Orthographic policy applied on top of the canonical lexical tables.
///
/// # Responsibilities
/// - Choose how "et" is joined (`conjunction`)
/// - Decide the plural of round "quatre-vingts" (`eighty`)
/// - Decide the plural of round "cents" (`hundreds`)
///
/// The default renders traditional French: "vingt et un", "soixante et onze",
/// "quatre-vingts", "deux cents", "quatre-vingt mille", "deux cent mille".
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Spelling {
	/// Joining of "et" in 21-71.
	pub conjunction: Conjunction,

	/// Plural agreement of round 80.
	pub eighty: Agreement,

	/// Plural agreement of round hundreds (200, 300, ...).
	pub hundreds: Agreement,
}

impl Spelling {
	/// Renders a canonical 1-99 table word for the given position.
	///
	/// # Behavior
	/// - Rewrites " et " as "-et-" when `conjunction` is `Hyphenated`.
	/// - Drops the final 's' of "quatre-vingts" unless plural is allowed here.
	///
	/// Words needing no change are returned borrowed.
	pub fn render(&self, word: &'static str, position: Position) -> Cow<'static, str> {
		let mut word = Cow::Borrowed(word);
		if self.conjunction == Conjunction::Hyphenated && word.contains(" et ") {
			word = Cow::Owned(word.replace(" et ", "-et-"));
		}
		if word.ends_with("vingts") && !Self::plural(self.eighty, position) {
			let len = word.len();
			word.to_mut().truncate(len - 1);
		}
		word
	}

	/// Returns "cents" or "cent" for a round hundred (200-900) in `position`.
	pub fn hundred(&self, position: Position) -> &'static str {
		if Self::plural(self.hundreds, position) { "cents" } else { "cent" }
	}

	fn plural(agreement: Agreement, position: Position) -> bool {
		agreement == Agreement::Agree && position.allows_plural()
	}
}

impl FromStr for Conjunction {
	type Err = NumeralError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"spaced" => Ok(Conjunction::Spaced),
			"hyphenated" => Ok(Conjunction::Hyphenated),
			_ => Err(NumeralError::UnknownPolicy { policy: "conjunction", value: s.to_owned() }),
		}
	}
}

impl FromStr for Agreement {
	type Err = NumeralError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"agree" => Ok(Agreement::Agree),
			"invariant" => Ok(Agreement::Invariant),
			_ => Err(NumeralError::UnknownPolicy { policy: "agreement", value: s.to_owned() }),
		}
	}
}
