use funcomb::grammar::{expr, factor, term};
use funcomb::parser::parse;

fn eval(input: &str) -> Option<(i64, &str)> {
    parse(input, &expr()).into_iter().next()
}

#[test]
fn evaluates_single_natural() {
    assert_eq!(eval("42"), Some((42, "")));
    assert_eq!(eval("(((((42)))))"), Some((42, "")));
}

#[test]
fn evaluates_sums_and_products() {
    assert_eq!(eval("1+1"), Some((2, "")));
    assert_eq!(eval("(1+1)"), Some((2, "")));
    assert_eq!(eval("1*1"), Some((1, "")));
    assert_eq!(eval("1*2"), Some((2, "")));
    assert_eq!(eval("(1*2)"), Some((2, "")));
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(parse("2*3+4", &expr()), vec![(10, "")]);
    assert_eq!(parse("2*(3+4)", &expr()), vec![(14, "")]);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(eval("2 * 3 +  4"), Some((10, "")));
    assert_eq!(eval("2*(     3+ 4)  "), Some((14, "")));
    assert_eq!(eval("  1 + 2"), Some((3, "")));
}

#[test]
fn deeply_mixed_expression() {
    assert_eq!(
        eval("((1))*(2+(((3)))*(4+(((5))+6))*(((7*8)))+9)"),
        Some((2531, ""))
    );
}

#[test]
fn subtraction_is_left_unconsumed() {
    assert_eq!(parse("2*3-4", &expr()), vec![(6, "-4")]);
}

#[test]
fn malformed_expressions_fail() {
    for input in ["-1", "()", "(5", "(1+2", "(1+2()", "", "+"] {
        assert!(
            parse(input, &expr()).is_empty(),
            "expected no parse for {input:?}"
        );
    }
}

#[test]
fn dangling_operator_is_left_unconsumed() {
    assert_eq!(eval("1+"), Some((1, "+")));
    assert_eq!(eval("2*"), Some((2, "*")));
}

#[test]
fn overflowing_sum_stops_before_operator() {
    let input = format!("{}+1", i64::MAX);
    assert_eq!(eval(&input), Some((i64::MAX, "+1")));
}

#[test]
fn term_and_factor_are_usable_alone() {
    assert_eq!(parse("2*3+4", &term()), vec![(6, "+4")]);
    assert_eq!(parse("(2+3)*4", &factor()), vec![(5, "*4")]);
}

#[test]
fn long_sum_chain() {
    let input = vec!["1"; 200].join("+");
    assert_eq!(eval(&input), Some((200, "")));
}
