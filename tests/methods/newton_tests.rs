//! tests for the Newton-Raphson solver
use zof::evaluator::parse;
use zof::methods::errors::MethodError;
use zof::methods::newton::newton_raphson;

type TestResult = Result<(), MethodError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let df = |x: f64| Ok(2.0 * x);
    let tol = 1e-10;

    let res = newton_raphson(f, df, 1.0, tol, 20)?;

    assert!((res.root - 1.414_213_562_37).abs() <= 1e-9);
    assert!(res.iterations_used < 10);
    Ok(())
}

#[test]
fn zero_derivative_errors() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let df = |_x: f64| Ok(0.0);
    let err = newton_raphson(f, df, 1.0, 1e-10, 20).unwrap_err();

    assert!(matches!(err, MethodError::ZeroDerivative { x } if x == 1.0));
    Ok(())
}

#[test]
fn trace_matches_iterations_used() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let df = |x: f64| Ok(2.0 * x);
    let res = newton_raphson(f, df, 1.0, 1e-10, 20)?;

    assert_eq!(res.iterations.len(), res.iterations_used);
    assert_eq!(res.last().unwrap().iteration, res.iterations_used);
    Ok(())
}

#[test]
fn max_iter_one_gives_exactly_one_record() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let df = |x: f64| Ok(2.0 * x);
    let res = newton_raphson(f, df, 10.0, 1e-30, 1)?;

    assert_eq!(res.iterations.len(), 1);
    assert_eq!(res.iterations_used, 1);
    Ok(())
}

#[test]
fn evaluation_error_propagates_verbatim() -> TestResult {
    let f = parse("log(x)").expect("valid expression");
    let df = parse("1 / x").expect("valid expression");
    // the starting guess is already outside log's domain
    let err = newton_raphson(
        |x| f.call(x),
        |x| df.call(x),
        -1.0,
        1e-10,
        20,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        MethodError::Evaluation(zof::evaluator::EvalError::DomainError { name: "log", x, .. })
        if x == -1.0
    ));
    Ok(())
}

#[test]
fn works_with_parsed_expressions() -> Result<(), Box<dyn std::error::Error>> {
    let f = parse("x**2 - 2")?;
    let df = parse("2*x")?;
    let res = newton_raphson(|x| f.call(x), |x| df.call(x), 1.0, 1e-10, 20)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-9);
    Ok(())
}
