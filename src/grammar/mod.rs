//! Grammars assembled from the combinators in [`crate::parser`]
//!
//! - `arithmetic`: `+`, `*` and parentheses over naturals, evaluated while parsing
//! - `roman`: Roman numerals, with and without syntax checking

mod arithmetic;
mod roman;

pub use arithmetic::{expr, factor, term};
pub use roman::{roman_numeral, roman_numeral_unchecked};
