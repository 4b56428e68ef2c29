/// Outcome of running a parser: every `(value, remaining)` pair it produced.
///
/// An empty vector is the one and only failure. `remaining` always borrows
/// from the input that was handed to the parser, so it is a suffix of it.
pub type ParseResult<'a, T> = Vec<(T, &'a str)>;

pub trait Parser<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T>;
}

impl<T, F> Parser<T> for F
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a, T>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        self(input)
    }
}

/// Run `parser` on `input`.
///
/// The first pair of a non-empty result is the canonical parse. A non-empty
/// remainder is still a success; callers that need full consumption check it.
pub fn parse<'a, T, P: Parser<T>>(input: &'a str, parser: &P) -> ParseResult<'a, T> {
    parser.parse(input)
}

/// First pair of a result, the only one later stages look at.
pub(crate) fn first<'a, T>(result: ParseResult<'a, T>) -> Option<(T, &'a str)> {
    result.into_iter().next()
}
