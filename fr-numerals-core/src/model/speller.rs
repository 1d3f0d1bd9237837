use crate::error::NumeralError;
use crate::model::lexicon::{self, UNITS, ZERO};
use crate::model::spelling::{Position, Spelling};

/// Spells a single number in French.
///
/// # Parameters
/// - `number`: value in `0..=999_999_999`.
/// - `spelling`: orthographic policy.
///
/// # Returns
/// The same phrase `NumeralGenerator` emits for `number` ("zéro" for 0).
///
/// # Errors
/// Returns `NumeralError::OutOfRange` for one billion and above.
pub fn spell(number: u64, spelling: &Spelling) -> Result<String, NumeralError> {
	if number > 999_999_999 {
		return Err(NumeralError::OutOfRange(number));
	}
	if number == 0 {
		return Ok(ZERO.1.to_owned());
	}

	let millions = number / 1_000_000;
	let thousands = number / 1_000 % 1_000;
	let units = number % 1_000;

	let mut parts: Vec<String> = Vec::with_capacity(3);

	match millions {
		0 => (),
		// "million" alone only when nothing follows
		1 if thousands == 0 && units == 0 => parts.push("million".to_owned()),
		1 => parts.push("millions".to_owned()),
		m => parts.push(format!("{} millions", group(m, spelling, Position::BeforeMillions))),
	}

	match thousands {
		0 => (),
		1 => parts.push("mille".to_owned()),
		t => parts.push(format!("{} mille", group(t, spelling, Position::BeforeMille))),
	}

	if units > 0 {
		parts.push(group(units, spelling, Position::Final));
	}

	Ok(parts.join(" "))
}

/// Spells a group in `1..=999`.
fn group(n: u64, spelling: &Spelling, position: Position) -> String {
	let hundreds = n / 100;
	let rest = n % 100;

	match (hundreds, rest) {
		(0, r) => tens(r, spelling, position),
		(1, 0) => "cent".to_owned(),
		(1, r) => format!("cent {}", tens(r, spelling, position)),
		(h, 0) => format!("{} {}", UNITS[h as usize - 1].1, spelling.hundred(position)),
		(h, r) => format!("{} cent {}", UNITS[h as usize - 1].1, tens(r, spelling, position)),
	}
}

/// Spells `1..=99`.
fn tens(n: u64, spelling: &Spelling, position: Position) -> String {
	debug_assert!((1..=99).contains(&n), "tens called with {n}");
	// `group` only passes non-zero remainders below 100, so the lookup always hits
	let word = lexicon::lookup(n as u32).unwrap_or("");
	spelling.render(word, position).into_owned()
}
