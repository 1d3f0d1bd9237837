//! French cardinal-number spelling library.
//!
//! This crate enumerates French spellings of whole numbers and is mainly used
//! to produce `word\tdigits` fixtures for number-formatting tests. It provides:
//! - Immutable lexical tables for 0-99
//! - A configurable spelling policy (conjunction, plural agreement)
//! - A lazy, deterministic generator over a magnitude class
//! - A single-number speller sharing the same tables
//! - A streaming TSV writer

/// Lexical tables, spelling policy and generation logic.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Output helpers (TSV streaming).
pub mod io;

pub use error::NumeralError;
pub use model::emission::Emission;
pub use model::generator::NumeralGenerator;
pub use model::magnitude::Magnitude;
pub use model::speller::spell;
pub use model::spelling::{Agreement, Conjunction, Position, Spelling};
