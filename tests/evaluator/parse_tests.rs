//! tests for expression parsing and rejection
use zof::evaluator::{parse, ParseError};

type TestResult = Result<(), ParseError>;

#[test]
fn empty_expression_is_rejected() {
    assert!(matches!(parse(""), Err(ParseError::EmptyExpression)));
    assert!(matches!(parse("   \t "), Err(ParseError::EmptyExpression)));
}

#[test]
fn dangling_operator_is_rejected() {
    assert!(matches!(parse("x + "), Err(ParseError::UnexpectedEnd)));
    assert!(matches!(parse("(1"), Err(ParseError::UnexpectedEnd)));
}

#[test]
fn attribute_access_never_parses() {
    // '.' outside a number literal is not a token; nothing is executed
    let err = parse("os.system('x')").unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidNumber { .. } | ParseError::UnexpectedChar { .. } | ParseError::UnknownName { .. }
    ));
}

#[test]
fn unknown_names_are_rejected() {
    let err = parse("y + 1").unwrap_err();
    assert!(matches!(err, ParseError::UnknownName { name } if name == "y"));
}

#[test]
fn bare_function_reference_is_rejected() {
    let err = parse("sin").unwrap_err();
    assert!(matches!(err, ParseError::BareFunction { name: "sin" }));
}

#[test]
fn wrong_arity_is_rejected() {
    let err = parse("sin(1, 2)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::WrongArity { name: "sin", expected: 1, got: 2 }
    ));

    let err = parse("pow(2)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::WrongArity { name: "pow", expected: 2, got: 1 }
    ));
}

#[test]
fn trailing_input_is_rejected() {
    assert!(matches!(parse("1 2"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("x) + 1"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn parse_is_referentially_transparent() -> TestResult {
    let f1 = parse("sin(x) + x**2")?;
    let f2 = parse("sin(x) + x**2")?;

    for i in -20..=20 {
        let x = f64::from(i) * 0.37;
        assert_eq!(f1.call(x), f2.call(x));
        // repeated calls on the same function agree too
        assert_eq!(f1.call(x), f1.call(x));
    }
    Ok(())
}

#[test]
fn precedence_and_associativity() -> TestResult {
    // unary minus binds looser than exponentiation
    let f = parse("-2**2")?;
    assert_eq!(f.call(0.0), Ok(-4.0));

    // exponentiation is right-associative
    let f = parse("2**3**2")?;
    assert_eq!(f.call(0.0), Ok(512.0));

    // caret is an alias for **
    let f = parse("x^2 - 2")?;
    assert_eq!(f.call(3.0), Ok(7.0));

    // negative exponents parse directly
    let f = parse("2**-3")?;
    assert_eq!(f.call(0.0), Ok(0.125));
    Ok(())
}

#[test]
fn exponent_notation_vs_constant_e() -> TestResult {
    let f = parse("1e-3")?;
    assert_eq!(f.call(0.0), Ok(0.001));

    let f = parse("2*e")?;
    assert_eq!(f.call(0.0), Ok(2.0 * std::f64::consts::E));
    Ok(())
}

#[test]
fn constants_resolve() -> TestResult {
    let f = parse("cos(pi)")?;
    assert_eq!(f.call(0.0), Ok(-1.0));

    let f = parse("tau / 2 - pi")?;
    assert_eq!(f.call(0.0), Ok(0.0));
    Ok(())
}

#[test]
fn two_argument_calls_parse() -> TestResult {
    let f = parse("pow(2, 10)")?;
    assert_eq!(f.call(0.0), Ok(1024.0));

    let f = parse("atan2(1, 1)")?;
    let value = f.call(0.0).expect("defined everywhere");
    assert!((value - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    Ok(())
}

#[test]
fn display_round_trips_the_trimmed_source() -> TestResult {
    let f = parse("  x**2 - 2  ")?;
    assert_eq!(f.to_string(), "x**2 - 2");
    assert_eq!(f.source(), "x**2 - 2");
    Ok(())
}
