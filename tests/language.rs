use infixcalc::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    evaluate,
    interpreter::{operator::BinaryOperator, value::core::Value},
};

fn assert_prints(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e} ({e:?})"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error for {src:?}: {e:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_prints("1+2", "3");
    assert_prints("8-5", "3");
    assert_prints("7*9", "63");
    assert_prints("10/2", "5");
    assert_prints("2^10", "1024");
    assert_prints("42", "42");
}

#[test]
fn subtraction_is_left_associative() {
    assert_prints("10-2-3", "5");
    assert_prints("100-10-10-10", "70");
    assert_prints("1-2+3", "2");
}

#[test]
fn long_operator_chains_do_not_exhaust_the_stack() {
    let sum = "1+".repeat(50_000) + "1";
    assert_eq!(evaluate(&sum).unwrap(), Value::Integer(50_001));

    let mixed = "2*3-".repeat(50_000) + "0";
    assert_eq!(evaluate(&mixed).unwrap(), Value::Integer(-299_988));

    let trailing = "1+".repeat(50_000);
    assert_failure(&trailing, ErrorKind::InvalidSyntax);
}

#[test]
fn division_is_left_associative() {
    assert_prints("100/10/2", "5");
    assert_prints("8/4*2", "4");
}

#[test]
fn power_is_left_associative() {
    assert_prints("2^3^2", "64");
    assert_prints("2^(3^2)", "512");
}

#[test]
fn precedence() {
    assert_prints("2+3*4", "14");
    assert_prints("(2+3)*4", "20");
    assert_prints("2*3^2", "18");
    assert_prints("1+2*3^2-4/2", "17");
}

#[test]
fn parenthesized_groups() {
    assert_prints("(1+2)*(3+4)", "21");
    assert_prints("((7))", "7");
    assert_prints("((1+2)*(3+4))", "21");
    assert_prints("(2*(3+(4-1)))^2", "144");
    assert_prints("(1)+(2)", "3");
}

#[test]
fn whitespace_is_insignificant() {
    assert_prints("1 + 2 * 3", "7");
    assert_prints("1+2*3", "7");
    assert_prints("  ( 1\t+ 2 )\n* 3 ", "9");
}

#[test]
fn real_results() {
    assert_prints("5/2", "2.5");
    assert_prints("1/4", "0.25");
    assert_prints("2^(0-1)", "0.5");
    assert_prints("4^(1/2)", "2");
    assert_prints("5/2*2", "5");
}

#[test]
fn infinite_results() {
    assert_prints("2^2000", "Infinity");
    assert_prints("0^(0-1)", "Infinity");
    assert_prints("(0-2)^2001", "-Infinity");
    assert_prints("1/(2^2000)", "0");
}

#[test]
fn integer_results_stay_integers() {
    assert_eq!(evaluate("2*3^2").unwrap(), Value::Integer(18));
    assert_eq!(evaluate("0-7").unwrap(), Value::Integer(-7));
    assert_eq!(evaluate("4/2").unwrap(), Value::Real(2.0));
}

#[test]
fn integer_overflow_falls_back_to_real() {
    assert_eq!(evaluate("9223372036854775807+1").unwrap(),
               Value::Real(9_223_372_036_854_775_808.0));
    assert_eq!(evaluate("2^64").unwrap(), Value::Real(18_446_744_073_709_551_616.0));
    assert_eq!(evaluate("2^62").unwrap(), Value::Integer(4_611_686_018_427_387_904));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_failure("1/(2-2)", ErrorKind::DivisionByZero);
    assert_failure("1/(0/5)", ErrorKind::DivisionByZero);
    assert_eq!(evaluate("5/0").unwrap_err().to_string(), "Cannot divide by 0");
}

#[test]
fn malformed_input_is_invalid_syntax() {
    for src in ["", "   ", "3+", "-3", "3*-2", "3+x", "x", "1.5", "()", "(1+2", "1+2)",
                "((1+2)", "1 2", "(", ")", "*", "3++4", "(+)", "99999999999999999999"]
    {
        assert_failure(src, ErrorKind::InvalidSyntax);
    }
    assert_eq!(evaluate("3+").unwrap_err().to_string(), "Invalid syntax");
}

#[test]
fn not_a_number_is_invalid_syntax() {
    assert_failure("(0-8)^(1/3)", ErrorKind::InvalidSyntax);
    assert!(matches!(evaluate("2^2000-2^2000"),
                     Err(Error::Runtime(RuntimeError::NotANumber { .. }))));
}

#[test]
fn first_failure_wins() {
    assert_failure("1/0+", ErrorKind::DivisionByZero);
    assert_failure("1/0+x", ErrorKind::InvalidSyntax);
}

#[test]
fn errors_carry_details() {
    assert_eq!(evaluate("-3").unwrap_err(),
               Error::Runtime(RuntimeError::LeadingOperator { operator: BinaryOperator::Sub,
                                                              offset:   0, }));
    assert_eq!(evaluate("4 / 0").unwrap_err(),
               Error::Runtime(RuntimeError::DivisionByZero { offset: 2 }));
    assert!(matches!(evaluate("1 + abc"),
                     Err(Error::Parse(ParseError::InvalidLiteral { ref literal, offset: 4 }))
                     if literal == "abc"));
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["10-2-3", "5/0", "3+", "(1+2)*(3+4)"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}
