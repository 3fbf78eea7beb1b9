use infixcalc::{
    error::ParseError,
    interpreter::{
        evaluator::split::find_splits,
        lexer::{Token, tokenize},
        operator::BinaryOperator,
    },
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap().into_iter().map(|(token, _)| token).collect()
}

#[test]
fn symbols_and_literals() {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    assert_eq!(kinds("1+2-3*4/5^6"),
               vec![Token::Integer(1),
                    Token::Operator(Add),
                    Token::Integer(2),
                    Token::Operator(Sub),
                    Token::Integer(3),
                    Token::Operator(Mul),
                    Token::Integer(4),
                    Token::Operator(Div),
                    Token::Integer(5),
                    Token::Operator(Pow),
                    Token::Integer(6)]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t( 12 )\n"), vec![Token::LParen, Token::Integer(12), Token::RParen]);
    assert!(kinds("").is_empty());
    assert!(kinds(" \n\t ").is_empty());
}

#[test]
fn literal_runs_end_at_whitespace_or_symbols() {
    assert_eq!(kinds("12 34"), vec![Token::Integer(12), Token::Integer(34)]);
    assert_eq!(kinds("007"), vec![Token::Integer(7)]);
}

#[test]
fn invalid_literals_are_reported() {
    assert_eq!(tokenize("1 + 2x"),
               Err(ParseError::InvalidLiteral { literal: "2x".to_string(),
                                                offset:  4, }));
    assert!(tokenize("3.14").is_err());
    assert!(tokenize("9223372036854775808").is_err());
    assert!(tokenize("9223372036854775807").is_ok());
}

#[test]
fn tokens_do_not_validate_structure() {
    assert_eq!(kinds(")(+"),
               vec![Token::RParen, Token::LParen, Token::Operator(BinaryOperator::Add)]);
}

#[test]
fn split_prefers_outer_and_weakest_operators() {
    use BinaryOperator::{Add, Mul, Sub};

    let tokens = tokenize("10 - 2 - 3").unwrap();
    assert_eq!(find_splits(&tokens), vec![(1, Sub), (3, Sub)]);

    let tokens = tokenize("(1 + 2) * (3 + 4)").unwrap();
    assert_eq!(find_splits(&tokens), vec![(5, Mul)]);

    let tokens = tokenize("2 + 3 * 4 - 1").unwrap();
    assert_eq!(find_splits(&tokens), vec![(1, Add), (5, Sub)]);

    let tokens = tokenize("(1)").unwrap();
    assert!(find_splits(&tokens).is_empty());
}
