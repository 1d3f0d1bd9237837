//! Top-level module for French numeral generation.
//!
//! This module provides:
//! - Fixed lexical tables (`lexicon`)
//! - The orthographic policy (`Spelling`)
//! - Magnitude classes (`Magnitude`)
//! - Generated pairs (`Emission`)
//! - The lazy enumerator (`NumeralGenerator`)
//! - A single-number speller (`spell`)

/// Canonical words for 0-99.
///
/// Tables are statics, shared by the generator and the speller.
pub mod lexicon;

/// Orthographic policy: "et" joining and plural agreement.
pub mod spelling;

/// Supported range classes and their selector tokens.
pub mod magnitude;

/// A `(digits, words)` pair.
pub mod emission;

/// Lazy enumeration of every number of a magnitude class.
///
/// Composes digit strings and phrases recursively from the lexical tables
/// and streams them in a deterministic order.
pub mod generator;

/// Arithmetic speller for one number.
pub mod speller;
