use std::iter;

use log::debug;

use crate::model::emission::Emission;
use crate::model::lexicon::{TENS, UNITS, ZERO};
use crate::model::magnitude::Magnitude;
use crate::model::spelling::{Position, Spelling};

/// Lazy stream of emissions. Owns a copy of its generator.
pub type Emissions = Box<dyn Iterator<Item = Emission>>;

/// Enumerates every number of a magnitude class with its French spelling.
///
/// # Responsibilities
/// - Compose digit strings and word phrases from the lexical tables
/// - Apply the `Spelling` policy to round numbers and "et" forms
/// - Stream emissions lazily, in a fixed order
///
/// # Ordering
/// At every level the simple sub-range comes first, then the round literal
/// ("cent", "mille", "million"), then the compositions using it as a prefix.
/// The resulting sequence is ascending numeric order.
///
/// # Invariants
/// - Each number of the range is emitted exactly once
/// - Top-level digit strings never have leading zeros
/// - Round values are emitted as literals, so "zéro" never appears in a phrase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumeralGenerator {
	magnitude: Magnitude,
	spelling: Spelling,
	include_zero: bool,
}

impl NumeralGenerator {
	/// Creates a generator over `magnitude` rendering with `spelling`.
	pub fn new(magnitude: Magnitude, spelling: Spelling) -> Self {
		Self { magnitude, spelling, include_zero: false }
	}

	/// Prepends ("0", "zéro") to the stream when `include_zero` is set.
	pub fn with_zero(mut self, include_zero: bool) -> Self {
		self.include_zero = include_zero;
		self
	}

	pub fn magnitude(&self) -> Magnitude {
		self.magnitude
	}

	pub fn spelling(&self) -> Spelling {
		self.spelling
	}

	/// Returns the lazy, restartable sequence of emissions.
	///
	/// Calling it twice yields identical sequences.
	pub fn emissions(&self) -> Emissions {
		let generator = *self;
		debug!(
			"generating numerals up to {} (zero: {}, spelling: {:?})",
			self.magnitude.max(),
			self.include_zero,
			self.spelling
		);

		let root = Emission::default();
		let body: Emissions = match self.magnitude {
			Magnitude::Hundred => generator.one_to_99(root, Position::Final),
			Magnitude::Thousand => generator.one_to_999(root, Position::Final),
			Magnitude::Million => Box::new(generator.one_to_999(root.clone(), Position::Final).chain(generator.thousands(root, false))),
			Magnitude::Billion => Box::new(
				generator.one_to_999(root.clone(), Position::Final)
					.chain(generator.thousands(root.clone(), false))
					.chain(generator.millions(root)),
			),
		};

		if self.include_zero {
			Box::new(iter::once(Emission::new(ZERO.0, ZERO.1)).chain(body))
		} else {
			body
		}
	}

	/// Drives the whole sequence into `sink`, one call per emission.
	///
	/// Returns the number of emissions.
	pub fn run<F: FnMut(Emission)>(&self, mut sink: F) -> usize {
		let mut count = 0;
		for emission in self.emissions() {
			sink(emission);
			count += 1;
		}
		count
	}

	/// Table units, each appended to `prefix`.
	fn units(self, prefix: Emission, table: &'static [(&'static str, &'static str)]) -> Emissions {
		Box::new(table.iter().map(move |(digits, word)| prefix.extend(digits, word)))
	}

	/// 10-99, rendered for `position`.
	fn tens(self, prefix: Emission, position: Position) -> Emissions {
		let spelling = self.spelling;
		Box::new(TENS.iter().map(move |(digits, word)| prefix.extend(digits, &spelling.render(*word, position))))
	}

	/// 1-99
	fn one_to_99(self, prefix: Emission, position: Position) -> Emissions {
		Box::new(self.units(prefix.clone(), &UNITS).chain(self.tens(prefix, position)))
	}

	/// 01-99, two digits wide.
	fn zero_padded_99(self, prefix: Emission, position: Position) -> Emissions {
		Box::new(self.units(prefix.extend("0", ""), &UNITS).chain(self.tens(prefix, position)))
	}

	/// 100-999
	///
	/// "cent" alone, then "cent ..." for 101-199, then for each of 2-9 the
	/// round hundred followed by its compositions. `position` only affects
	/// round forms ("deux cents", "cent quatre-vingts").
	fn hundreds(self, prefix: Emission, position: Position) -> Emissions {
		let hundred = self.spelling.hundred(position);
		let cent = iter::once(prefix.extend("100", "cent"));
		let cent_and = self.zero_padded_99(prefix.extend("1", "cent "), position);
		let multiples = UNITS[1..].iter().flat_map(move |(digits, word)| {
			let head = prefix.extend(digits, word);
			iter::once(head.extend("00", &format!(" {hundred}")))
				.chain(self.zero_padded_99(head.extend("", " cent "), position))
		});
		Box::new(cent.chain(cent_and).chain(multiples))
	}

	/// 1-999
	fn one_to_999(self, prefix: Emission, position: Position) -> Emissions {
		Box::new(self.one_to_99(prefix.clone(), position).chain(self.hundreds(prefix, position)))
	}

	/// 001-999, three digits wide, ending the phrase.
	fn zero_padded_999(self, prefix: Emission) -> Emissions {
		Box::new(
			self.zero_padded_99(prefix.extend("0", ""), Position::Final)
				.chain(self.hundreds(prefix, Position::Final)),
		)
	}

	/// 2-999 used as a multiplier of "mille" or "millions".
	///
	/// "un" never multiplies: the round literal covers it. When `padded`,
	/// digits are three wide (002-999).
	fn multipliers(self, prefix: Emission, position: Position, padded: bool) -> Emissions {
		let (unit_pad, ten_pad) = if padded { ("00", "0") } else { ("", "") };
		Box::new(
			self.units(prefix.extend(unit_pad, ""), &UNITS[1..])
				.chain(self.tens(prefix.extend(ten_pad, ""), position))
				.chain(self.hundreds(prefix, position)),
		)
	}

	/// 1000-999 999, six digits wide when `padded`.
	///
	/// "mille" is invariant and never preceded by "un".
	fn thousands(self, prefix: Emission, padded: bool) -> Emissions {
		let one = if padded { "001" } else { "1" };
		let mille = iter::once(prefix.extend(&format!("{one}000"), "mille"));
		let mille_and = self.zero_padded_999(prefix.extend(one, "mille "));
		let multiples = self.multipliers(prefix, Position::BeforeMille, padded).flat_map(move |head| {
			iter::once(head.extend("000", " mille")).chain(self.zero_padded_999(head.extend("", " mille ")))
		});
		Box::new(mille.chain(mille_and).chain(multiples))
	}

	/// 000001-999 999, six digits wide.
	fn zero_padded_999_999(self, prefix: Emission) -> Emissions {
		Box::new(self.zero_padded_999(prefix.extend("000", "")).chain(self.thousands(prefix, true)))
	}

	/// 1 000 000-999 999 999
	///
	/// "million" alone, then "millions ..." as soon as a remainder follows,
	/// then "N millions" and its compositions.
	fn millions(self, prefix: Emission) -> Emissions {
		let million = iter::once(prefix.extend("1000000", "million"));
		let millions_and = self.zero_padded_999_999(prefix.extend("1", "millions "));
		let multiples = self
			.multipliers(prefix, Position::BeforeMillions, false)
			.flat_map(move |head| self.millions_of(head));
		Box::new(million.chain(millions_and).chain(multiples))
	}

	/// "N millions" then "N millions ..." for a 2-999 multiplier `head`.
	fn millions_of(self, head: Emission) -> Emissions {
		Box::new(
			iter::once(head.extend("000000", " millions"))
				.chain(self.zero_padded_999_999(head.extend("", " millions "))),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect(magnitude: Magnitude) -> Vec<Emission> {
		NumeralGenerator::new(magnitude, Spelling::default()).emissions().collect()
	}

	#[test]
	fn hundred_class_is_one_to_ninety_nine() {
		let emissions = collect(Magnitude::Hundred);
		assert_eq!(emissions.len(), 99);
		assert_eq!(emissions[0], Emission::new("1", "un"));
		assert_eq!(emissions[98], Emission::new("99", "quatre-vingt-dix-neuf"));
	}

	#[test]
	fn zero_comes_first_when_requested() {
		let generator = NumeralGenerator::new(Magnitude::Hundred, Spelling::default()).with_zero(true);
		let mut emissions = generator.emissions();
		assert_eq!(emissions.next(), Some(Emission::new("0", "zéro")));
		assert_eq!(emissions.next(), Some(Emission::new("1", "un")));
		assert_eq!(generator.run(|_| ()), 100);
	}

	#[test]
	fn hundreds_are_round_then_composed() {
		let emissions = collect(Magnitude::Thousand);
		let digits: Vec<&str> = emissions[98..103].iter().map(|e| e.digits.as_str()).collect();
		assert_eq!(digits, ["99", "100", "101", "102", "103"]);
		assert_eq!(emissions[99].words, "cent");
		assert_eq!(emissions[100].words, "cent un");
		assert_eq!(emissions[199].words, "deux cents");
		assert_eq!(emissions[200].words, "deux cent un");
		assert_eq!(emissions[279].words, "deux cent quatre-vingts");
		assert_eq!(emissions[280].words, "deux cent quatre-vingt-un");
	}

	#[test]
	fn padded_thousands_inside_millions() {
		let generator = NumeralGenerator::new(Magnitude::Billion, Spelling::default());
		let around_million: Vec<Emission> = generator.emissions().skip(999_998).take(3).collect();
		assert_eq!(
			around_million,
			[
				Emission::new("999999", "neuf cent quatre-vingt-dix-neuf mille neuf cent quatre-vingt-dix-neuf"),
				Emission::new("1000000", "million"),
				Emission::new("1000001", "millions un"),
			]
		);
		let twelve_thousand = generator.emissions().nth(1_011_999);
		assert_eq!(twelve_thousand, Some(Emission::new("1012000", "millions douze mille")));
	}

	/// Multiplier emission of "millions" whose digits are `digits`.
	fn million_head(generator: NumeralGenerator, digits: &str) -> Emission {
		generator
			.multipliers(Emission::default(), Position::BeforeMillions, false)
			.find(|head| head.digits == digits)
			.unwrap()
	}

	#[test]
	fn round_millions_agree() {
		let generator = NumeralGenerator::new(Magnitude::Billion, Spelling::default());
		let eighty = million_head(generator, "80").words;
		assert_eq!(eighty, "quatre-vingts");

		let mut block = generator.millions_of(million_head(generator, "80"));
		assert_eq!(block.next(), Some(Emission::new("80000000", "quatre-vingts millions")));
		assert_eq!(block.next(), Some(Emission::new("80000001", "quatre-vingts millions un")));

		let mut block = generator.millions_of(million_head(generator, "200"));
		assert_eq!(block.next(), Some(Emission::new("200000000", "deux cents millions")));

		let last = generator.millions_of(million_head(generator, "999")).last();
		assert_eq!(
			last,
			Some(Emission::new(
				"999999999",
				"neuf cent quatre-vingt-dix-neuf millions neuf cent quatre-vingt-dix-neuf mille neuf cent quatre-vingt-dix-neuf"
			))
		);
	}

	#[test]
	fn million_blocks_match_speller() {
		let spelling = Spelling::default();
		let generator = NumeralGenerator::new(Magnitude::Billion, spelling);
		for digits in ["2", "21", "80", "100", "200", "280", "999"] {
			let base: u64 = digits.parse::<u64>().unwrap() * 1_000_000;
			let mut count = 0;
			for (i, emission) in generator.millions_of(million_head(generator, digits)).enumerate() {
				count += 1;
				if i % 997 == 0 {
					let number = base + i as u64;
					assert_eq!(emission.digits, number.to_string());
					assert_eq!(emission.words, crate::spell(number, &spelling).unwrap());
				}
			}
			assert_eq!(count, 1_000_000, "block {digits}");
		}
	}
}
