//! The combinator toolkit.
//!
//! - `state`: the [`Parser`] trait, [`ParseResult`] and the [`parse`] entry point
//! - `combinators`: [`BoxedParser`], the core algebra and repetition
//! - `lexical`: character classes, numbers, identifiers and tokens

mod combinators;
mod lexical;
mod state;

pub use combinators::*;
pub use lexical::*;
pub use state::{ParseResult, Parser, parse};

pub(crate) use state::first;
