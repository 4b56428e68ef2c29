//! Roman numerals, decoded two ways.
//!
//! [`roman_numeral_unchecked`] sums whatever sequence of known symbols it
//! finds, so `IIII` is 4 and `VX` is 15. [`roman_numeral`] groups runs of a
//! letter, caps how often a letter may repeat and requires the group values
//! to be strictly descending before it sums them.

use once_cell::sync::Lazy;

use crate::parser::{BoxedParser, char_p, failure, many, many1, ret, satisfy, string_p};

/// Subtractive pairs; tried before single letters so `IV` never reads as `I`, `V`.
const SUBTRACTIVE: [(&str, u64); 6] = [
    ("IV", 4),
    ("IX", 9),
    ("XL", 40),
    ("XC", 90),
    ("CD", 400),
    ("CM", 900),
];

const LETTERS: [(char, u64); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

static UNCHECKED: Lazy<BoxedParser<u64>> = Lazy::new(|| {
    let pairs = SUBTRACTIVE
        .iter()
        .map(|&(pair, value)| string_p(pair).map(move |_| value));
    let letters = LETTERS
        .iter()
        .map(|&(letter, value)| char_p(letter).map(move |_| value));
    let symbol = pairs.chain(letters).fold(failure(), |acc, p| acc | p);

    many(symbol).bind(|values| sum(values).map_or_else(failure, ret))
});

static CHECKED: Lazy<BoxedParser<u64>> = Lazy::new(|| {
    many1(group()).bind(|groups| validate(&groups).map_or_else(failure, ret))
});

/// Sum of any sequence of Roman symbols, valid or not. The empty string is 0.
pub fn roman_numeral_unchecked() -> BoxedParser<u64> {
    UNCHECKED.clone()
}

/// A well-formed Roman numeral. Fails on empty input, over-long runs such as
/// `IIII`, and any group that is not smaller than the one before it.
pub fn roman_numeral() -> BoxedParser<u64> {
    CHECKED.clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    /// One of the two-letter pairs such as `CM`
    Subtractive(u64),
    /// `count` consecutive copies of `letter`
    Run { letter: char, count: usize },
}

impl Group {
    fn value(self) -> Option<u64> {
        match self {
            Group::Subtractive(value) => Some(value),
            Group::Run { letter, count } => {
                letter_value(letter)?.checked_mul(u64::try_from(count).ok()?)
            }
        }
    }

    fn within_cap(self) -> bool {
        match self {
            Group::Subtractive(_) => true,
            Group::Run { letter, count } => repeat_cap(letter).is_none_or(|cap| count <= cap),
        }
    }
}

fn letter_value(letter: char) -> Option<u64> {
    LETTERS
        .iter()
        .find(|&&(l, _)| l == letter)
        .map(|&(_, value)| value)
}

/// How often a letter may repeat in a row; `None` means without limit
fn repeat_cap(letter: char) -> Option<usize> {
    match letter {
        'I' | 'X' | 'C' => Some(3),
        'M' => None,
        _ => Some(1),
    }
}

/// group := subtractive_pair | letter letter*   (the run repeats one letter)
fn group() -> BoxedParser<Group> {
    let pairs = SUBTRACTIVE
        .iter()
        .map(|&(pair, value)| string_p(pair).map(move |_| Group::Subtractive(value)))
        .fold(failure(), |acc, p| acc | p);

    let run = satisfy(|c| letter_value(c).is_some()).bind(|letter| {
        many(char_p(letter)).map(move |rest| Group::Run {
            letter,
            count: rest.len() + 1,
        })
    });

    pairs | run
}

fn validate(groups: &[Group]) -> Option<u64> {
    if !groups.iter().all(|group| group.within_cap()) {
        return None;
    }

    let values = groups
        .iter()
        .map(|group| group.value())
        .collect::<Option<Vec<_>>>()?;

    if !values.windows(2).all(|pair| pair[0] > pair[1]) {
        return None;
    }

    sum(values)
}

fn sum(values: Vec<u64>) -> Option<u64> {
    values
        .into_iter()
        .try_fold(0u64, |total, value| total.checked_add(value))
}
