use funcomb::grammar::{roman_numeral, roman_numeral_unchecked};
use funcomb::parser::parse;

fn checked(input: &str) -> Option<u64> {
    parse(input, &roman_numeral())
        .into_iter()
        .next()
        .map(|(value, _)| value)
}

fn unchecked(input: &str) -> Option<u64> {
    parse(input, &roman_numeral_unchecked())
        .into_iter()
        .next()
        .map(|(value, _)| value)
}

#[test]
fn unchecked_decodes_numerals() {
    assert_eq!(unchecked("I"), Some(1));
    assert_eq!(unchecked("III"), Some(3));
    assert_eq!(unchecked("IX"), Some(9));
    assert_eq!(unchecked("MLXVI"), Some(1066));
    assert_eq!(unchecked("MCMLXXXIX"), Some(1989));
    assert_eq!(unchecked("MMMMMMM"), Some(7000));
}

#[test]
fn unchecked_accepts_malformed_numerals() {
    assert_eq!(unchecked("IIII"), Some(4));
    assert_eq!(unchecked("VX"), Some(15));
    assert_eq!(unchecked("IVX"), Some(14));
}

#[test]
fn unchecked_accepts_empty_input_as_zero() {
    assert_eq!(parse("", &roman_numeral_unchecked()), vec![(0, "")]);
    assert_eq!(parse("abc", &roman_numeral_unchecked()), vec![(0, "abc")]);
}

#[test]
fn checked_decodes_numerals() {
    assert_eq!(checked("I"), Some(1));
    assert_eq!(checked("III"), Some(3));
    assert_eq!(checked("IX"), Some(9));
    assert_eq!(checked("VI"), Some(6));
    assert_eq!(checked("XIV"), Some(14));
    assert_eq!(checked("XXXIX"), Some(39));
    assert_eq!(checked("CDXLIV"), Some(444));
    assert_eq!(checked("MLXVI"), Some(1066));
    assert_eq!(checked("MCMLXXXIX"), Some(1989));
    assert_eq!(checked("MMMMMMM"), Some(7000));
}

#[test]
fn checked_consumes_whole_numeral() {
    assert_eq!(parse("MCMLXXXIX", &roman_numeral()), vec![(1989, "")]);
    assert_eq!(parse("XII rest", &roman_numeral()), vec![(12, " rest")]);
}

#[test]
fn checked_rejects_malformed_numerals() {
    for input in ["IIII", "VX", "IVX", "MDLVX", "sdafasd", "", "VV", "XXXXI", "XIIII", "IIX"] {
        assert_eq!(checked(input), None, "expected {input:?} to be rejected");
    }
}

#[test]
fn checked_rejects_non_alphabetic_noise() {
    assert_eq!(checked("123"), None);
    assert_eq!(checked("-X"), None);
}

#[test]
fn checked_compares_raw_group_values() {
    // IX is followed by a smaller group, so the descending check lets it through
    assert_eq!(checked("IXI"), Some(10));
    assert_eq!(checked("XCX"), Some(100));
}
