//! # Funcomb - Backtracking Parser Combinators
//!
//! A small vocabulary of composable parsers over `&str`, enough to write
//! recursive-descent grammars without a separate lexer.
//!
//! ## Architecture Overview
//!
//! A parser is a value: a function from the input to every
//! `(value, remaining input)` pair it can produce. An empty result is the
//! only kind of failure. Larger parsers are built from smaller ones:
//!
//! 1. **Core algebra** (`parser`) - `ret`, `failure`, `item`, `bind`, `map`,
//!    `or` and `satisfy`. Everything else is derived from these.
//! 2. **Repetition** (`parser`) - `many`, `many1` and `fold`, written as
//!    loops so long inputs do not grow the call stack.
//! 3. **Lexical parsers** (`parser`) - digits, letters, naturals,
//!    identifiers, whitespace-skipping tokens and literal symbols.
//! 4. **Grammars** (`grammar`) - an arithmetic evaluator and two Roman
//!    numeral decoders built purely from the above.
//!
//! ## Key Design Decisions
//!
//! ### Committed Choice
//! `bind` and `map` only look at the first result of their operand, and
//! `or` returns its left operand's result whenever that is non-empty. The
//! right operand is retried from the untouched input only on failure. Order
//! alternatives by hand when one is a prefix of another (`IV` before `I`).
//!
//! ### Shared, Immutable Parsers
//! [`parser::BoxedParser`] wraps an `Arc<dyn Fn>` and is `Send + Sync`.
//! Fixed parsers such as [`parser::DIGIT`] are process-wide statics; the
//! same value can parse independent inputs on many threads at once.
//!
//! ### Partial Input
//! A parse that stops early still succeeds. Compare the remainder against
//! the empty string when the whole input must be consumed.
//!
//! ## Example
//!
//! ```
//! use funcomb::grammar::expr;
//! use funcomb::parser::parse;
//!
//! assert_eq!(parse("2*(3+4)", &expr()), vec![(14, "")]);
//! assert_eq!(parse("2*3-4", &expr()), vec![(6, "-4")]);
//! assert!(parse("(1+2", &expr()).is_empty());
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - The combinator toolkit and the [`parser::parse`] entry point
//! - [`grammar`] - Arithmetic and Roman numeral grammars
//! - [`cli`] - Command-line front end used by the `funcomb` binary

pub mod cli;
pub mod grammar;
pub mod parser;
