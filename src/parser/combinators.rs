use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::state::{ParseResult, Parser, first};

type ParserFn<T> = Arc<dyn for<'a> Fn(&'a str) -> ParseResult<'a, T> + Send + Sync>;

// === Boxed Parser for type erasure ===

/// A parser as a value: immutable, cheap to clone and shareable across threads.
pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> std::fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<F>(parser: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a, T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        (self.parser)(input)
    }
}

// === Core algebra ===

/// Return: succeed with `value` without consuming anything
pub fn ret<T: Clone + Send + Sync + 'static>(value: T) -> BoxedParser<T> {
    BoxedParser::new(move |input| vec![(value.clone(), input)])
}

/// Failure: never succeeds
pub fn failure<T: 'static>() -> BoxedParser<T> {
    BoxedParser::new(|_| Vec::new())
}

static ITEM: Lazy<BoxedParser<char>> = Lazy::new(|| {
    BoxedParser::new(|input| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => vec![(c, chars.as_str())],
            None => Vec::new(),
        }
    })
});

/// Item: consume exactly one character
pub fn item() -> BoxedParser<char> {
    ITEM.clone()
}

/// Satisfy: the next character, if `predicate` accepts it
pub fn satisfy<F>(predicate: F) -> BoxedParser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    item().bind(move |c| if predicate(c) { ret(c) } else { failure() })
}

impl<T: 'static> BoxedParser<T> {
    /// Bind: run self, hand its first value to `f` and run the resulting
    /// parser on what is left. `f` is never called when self fails.
    pub fn bind<U: 'static, F>(self, f: F) -> BoxedParser<U>
    where
        F: Fn(T) -> BoxedParser<U> + Send + Sync + 'static,
    {
        BoxedParser::new(move |input| match first(self.parse(input)) {
            Some((value, rest)) => f(value).parse(rest),
            None => Vec::new(),
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F>(self, f: F) -> BoxedParser<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        BoxedParser::new(move |input| match first(self.parse(input)) {
            Some((value, rest)) => vec![(f(value), rest)],
            None => Vec::new(),
        })
    }

    /// Choice: try self, if it fails try other on the same input.
    /// Once self succeeds the choice is committed; other is never consulted.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |input| {
            let result = self.parse(input);
            if result.is_empty() {
                other.parse(input)
            } else {
                result
            }
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.bind(move |_| other.clone())
    }
}

impl<T: Clone + Send + Sync + 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        self.bind(move |a| other.clone().map(move |b| (a.clone(), b)))
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        self.bind(move |a| other.clone().map(move |_| a.clone()))
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: Clone + Send + Sync + 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: Clone + Send + Sync + 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F> Shr<F> for BoxedParser<T>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Repetition ===

/// Apply `parser` until it fails, folding each value into `acc`.
///
/// A match that consumed nothing is folded once and ends the loop, since
/// repeating it could never fail.
fn repeat<'a, T, A>(
    parser: &BoxedParser<T>,
    mut input: &'a str,
    mut acc: A,
    step: impl Fn(A, T) -> A,
) -> (A, &'a str) {
    while let Some((value, rest)) = first(parser.parse(input)) {
        acc = step(acc, value);
        let stalled = rest.len() == input.len();
        input = rest;
        if stalled {
            break;
        }
    }
    (acc, input)
}

fn push<T>(mut values: Vec<T>, value: T) -> Vec<T> {
    values.push(value);
    values
}

/// Parse zero or more occurrences
///
/// This is a loop on purpose. Spelling it as `many1(p) | ret(vec![])` with
/// `many1` recursing back into `many` nests a few stack frames per match and
/// overflows on long inputs.
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |input| vec![repeat(&parser, input, Vec::new(), push)])
}

/// Parse one or more occurrences
pub fn many1<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |input| match first(parser.parse(input)) {
        Some((head, rest)) if rest.len() == input.len() => vec![(vec![head], rest)],
        Some((head, rest)) => vec![repeat(&parser, rest, vec![head], push)],
        None => Vec::new(),
    })
}

/// Like [`many`], but combines the matches into a copy of `seed` with `step`
/// instead of collecting them. Never fails; zero matches yield `seed`.
pub fn fold<T, A, F>(parser: BoxedParser<T>, seed: A, step: F) -> BoxedParser<A>
where
    T: 'static,
    A: Clone + Send + Sync + 'static,
    F: Fn(A, T) -> A + Send + Sync + 'static,
{
    BoxedParser::new(move |input| vec![repeat(&parser, input, seed.clone(), &step)])
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |input| match first(parser.parse(input)) {
        Some((value, rest)) => vec![(Some(value), rest)],
        None => vec![(None, input)],
    })
}
