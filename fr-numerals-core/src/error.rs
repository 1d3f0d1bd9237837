use thiserror::Error;

/// Errors raised while selecting a range or spelling a number.
///
/// Generation itself cannot fail: tables are fixed and ranges are bounded,
/// so every error is reported before the first emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
	/// The range selector is not one of the supported magnitude classes.
	#[error("invalid magnitude class '{0}', expected one of 100, 1000, 1000000, 1000000000")]
	InvalidMagnitudeClass(String),

	/// A spelling policy token was not recognized.
	#[error("unknown {policy} policy '{value}'")]
	UnknownPolicy {
		policy: &'static str,
		value: String,
	},

	/// The number cannot be spelled (must be below one billion).
	#[error("{0} is out of range, numbers must be below 1000000000")]
	OutOfRange(u64),
}
