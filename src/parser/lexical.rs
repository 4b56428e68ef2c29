//! Character-level building blocks.
//!
//! The fixed parsers are process-wide statics built on first use; the
//! lower-case functions hand out clones of them, which only bumps a
//! reference count.

use std::iter;

use once_cell::sync::Lazy;

use super::combinators::{BoxedParser, failure, fold, many, ret, satisfy};

pub static DIGIT: Lazy<BoxedParser<char>> = Lazy::new(|| satisfy(|c| c.is_ascii_digit()));
pub static LOWER: Lazy<BoxedParser<char>> = Lazy::new(|| satisfy(char::is_lowercase));
pub static UPPER: Lazy<BoxedParser<char>> = Lazy::new(|| satisfy(char::is_uppercase));
pub static LETTER: Lazy<BoxedParser<char>> = Lazy::new(|| satisfy(char::is_alphabetic));
pub static ALPHA_NUM: Lazy<BoxedParser<char>> = Lazy::new(|| satisfy(char::is_alphanumeric));

/// nat := digit digit*, folded as it is read; overflow is no parse
pub static NAT: Lazy<BoxedParser<i64>> = Lazy::new(|| {
    digit()
        .bind(|d| {
            fold(digit(), Some(digit_value(d)), |acc: Option<i64>, c| {
                acc?.checked_mul(10)?.checked_add(digit_value(c))
            })
        })
        .bind(|n| n.map_or_else(failure, ret))
});

/// ident := lower alpha_num*
pub static IDENT: Lazy<BoxedParser<String>> = Lazy::new(|| {
    lower().bind(|c| many(alpha_num()).map(move |cs| iter::once(c).chain(cs).collect()))
});

/// space := whitespace*
pub static SPACE: Lazy<BoxedParser<()>> =
    Lazy::new(|| many(satisfy(char::is_whitespace)).map(|_| ()));

pub static NATURAL: Lazy<BoxedParser<i64>> = Lazy::new(|| token(nat()));
pub static IDENTIFIER: Lazy<BoxedParser<String>> = Lazy::new(|| token(ident()));

pub fn digit() -> BoxedParser<char> {
    DIGIT.clone()
}

pub fn lower() -> BoxedParser<char> {
    LOWER.clone()
}

pub fn upper() -> BoxedParser<char> {
    UPPER.clone()
}

pub fn letter() -> BoxedParser<char> {
    LETTER.clone()
}

pub fn alpha_num() -> BoxedParser<char> {
    ALPHA_NUM.clone()
}

pub fn nat() -> BoxedParser<i64> {
    NAT.clone()
}

pub fn ident() -> BoxedParser<String> {
    IDENT.clone()
}

pub fn space() -> BoxedParser<()> {
    SPACE.clone()
}

pub fn natural() -> BoxedParser<i64> {
    NATURAL.clone()
}

pub fn identifier() -> BoxedParser<String> {
    IDENTIFIER.clone()
}

fn digit_value(c: char) -> i64 {
    c.to_digit(10).map_or(0, i64::from)
}

/// Exactly the character `expected`
pub fn char_p(expected: char) -> BoxedParser<char> {
    satisfy(move |c| c == expected)
}

/// The literal `literal`, consuming exactly its length
pub fn string_p(literal: impl Into<String>) -> BoxedParser<String> {
    let literal = literal.into();
    BoxedParser::new(move |input| match input.strip_prefix(literal.as_str()) {
        Some(rest) => vec![(literal.clone(), rest)],
        None => Vec::new(),
    })
}

/// Discard whitespace around `parser`
pub fn token<T: Clone + Send + Sync + 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    space() * parser - space()
}

/// A literal surrounded by optional whitespace
pub fn symbol(literal: impl Into<String>) -> BoxedParser<String> {
    token(string_p(literal))
}
