//! Arithmetic over naturals with `+`, `*` and parentheses.
//!
//! Values are computed while parsing. Both operators are right-associative
//! because each rule recurses into itself on the right. There is no `-`, so
//! `2*3-4` yields `6` and leaves `-4` for the caller to notice.

use crate::parser::{BoxedParser, failure, natural, ret, symbol};

/// expr := term ("+" expr | ε)
pub fn expr() -> BoxedParser<i64> {
    term().bind(|t| {
        let sum = symbol("+").bind(move |_| expr().bind(move |e| checked(t.checked_add(e))));
        sum | ret(t)
    })
}

/// term := factor ("*" term | ε)
pub fn term() -> BoxedParser<i64> {
    factor().bind(|f| {
        let product = symbol("*").bind(move |_| term().bind(move |t| checked(f.checked_mul(t))));
        product | ret(f)
    })
}

/// factor := "(" expr ")" | natural
pub fn factor() -> BoxedParser<i64> {
    // expr() is only built once "(" has matched; building it eagerly here
    // would recurse forever through term() and factor().
    let parenthesised = symbol("(").bind(|_| expr() - symbol(")"));
    parenthesised | natural()
}

fn checked(value: Option<i64>) -> BoxedParser<i64> {
    value.map_or_else(failure, ret)
}
