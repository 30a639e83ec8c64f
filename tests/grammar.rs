use proptest::prelude::*;
use xdy::error::ParseError;
use xdy::grammar::*;
use xdy::types::DiceExpr;

fn test_legal_input(input: &str, expected: &[(u32, u32)]) {
    let parsed: Vec<DiceExpr> = parse_token(input)
        .into_iter()
        .map(|r| match r {
            Ok(expr) => expr,
            Err(e) => panic!("Expected legal input {input:?}, but got error: {e}"),
        })
        .collect();
    let expected: Vec<DiceExpr> = expected
        .iter()
        .map(|(count, sides)| DiceExpr::new(*count, *sides))
        .collect();
    assert_eq!(parsed, expected, "parsing {input:?}");
}

#[test]
fn test_count_and_sides() {
    test_legal_input("2d6", &[(2, 6)]);
    test_legal_input("10d100", &[(10, 100)]);
    test_legal_input("1d1", &[(1, 1)]);
}

#[test]
fn test_single_die() {
    test_legal_input("d20", &[(1, 20)]);
    test_legal_input("2d6 d4", &[(2, 6), (1, 4)]);
}

#[test]
fn test_several_expressions_in_one_token() {
    test_legal_input("3 d8 2d4", &[(3, 8), (2, 4)]);
    test_legal_input("2d6 4d10 d12", &[(2, 6), (4, 10), (1, 12)]);
}

#[test]
fn test_trailing_garbage_is_ignored() {
    test_legal_input("2d6abc", &[(2, 6)]);
    test_legal_input("4d8+3", &[(4, 8)]);
}

#[test]
fn test_each_d_emits_on_its_own() {
    // the count is read from the start of the word every time
    test_legal_input("2d6d8", &[(2, 6), (2, 8)]);
}

#[test]
fn test_tokens_without_d() {
    test_legal_input("", &[]);
    test_legal_input("42", &[]);
    test_legal_input("hello", &[]);
    test_legal_input("2D6", &[]);
}

#[test]
fn test_missing_sides() {
    let result = parse_token("2d");
    assert_eq!(
        result,
        vec![Err(ParseError::MissingSides {
            token: "2d".to_string()
        })]
    );
    assert!(matches!(
        parse_token("dx")[..],
        [Err(ParseError::MissingSides { .. })]
    ));
}

#[test]
fn test_missing_count() {
    let result = parse_token("xd6");
    assert_eq!(
        result,
        vec![Err(ParseError::MissingCount {
            token: "xd6".to_string()
        })]
    );
}

#[test]
fn test_zero_values() {
    assert!(matches!(
        parse_token("0d6")[..],
        [Err(ParseError::ZeroCount { .. })]
    ));
    assert!(matches!(
        parse_token("2d0")[..],
        [Err(ParseError::ZeroSides { .. })]
    ));
    assert!(matches!(
        parse_token("d0")[..],
        [Err(ParseError::ZeroSides { .. })]
    ));
}

#[test]
fn test_overflow() {
    assert!(matches!(
        parse_token("99999999999d6")[..],
        [Err(ParseError::Overflow { .. })]
    ));
    assert!(matches!(
        parse_token("2d99999999999")[..],
        [Err(ParseError::Overflow { .. })]
    ));
}

#[test]
fn test_errors_do_not_hide_later_expressions() {
    let result = parse_token("2d0 3d6");
    assert_eq!(result.len(), 2);
    assert!(result[0].is_err());
    assert_eq!(result[1], Ok(DiceExpr::new(3, 6)));
}

#[test]
fn test_error_names_token() {
    let result = parse_token("4dz");
    let err = result[0].clone().unwrap_err();
    assert_eq!(err.token(), "4dz");
    assert!(err.to_string().contains("4dz"));
}

#[test]
fn test_scanner_is_lazy() {
    let mut scanner = scan("2d6 3d8");
    assert_eq!(scanner.token(), "2d6 3d8");
    assert_eq!(scanner.next(), Some(Ok(DiceExpr::new(2, 6))));
    assert_eq!(scanner.next(), Some(Ok(DiceExpr::new(3, 8))));
    assert_eq!(scanner.next(), None);
}

proptest! {
    #[test]
    fn test_parsing_is_idempotent(token in "[0-9d ]{0,16}") {
        prop_assert_eq!(parse_token(&token), parse_token(&token));
    }

    #[test]
    fn test_well_formed_expressions(count in 1..10_000u32, sides in 1..10_000u32) {
        let token = format!("{count}d{sides}");
        prop_assert_eq!(parse_token(&token), vec![Ok(DiceExpr::new(count, sides))]);
    }

    #[test]
    fn test_parsed_values_are_positive(token in "[0-9a-z ]{0,24}") {
        for expr in parse_token(&token).into_iter().flatten() {
            prop_assert!(expr.count >= 1);
            prop_assert!(expr.sides >= 1);
        }
    }
}
