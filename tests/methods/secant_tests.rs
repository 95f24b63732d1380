//! tests for the secant solver
use zof::evaluator::parse;
use zof::methods::errors::MethodError;
use zof::methods::secant::secant;

type TestResult = Result<(), MethodError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let tol = 1e-10;

    let res = secant(f, 1.0, 2.0, tol, 50)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-8);
    assert!(res.iterations_used < 15);
    Ok(())
}

#[test]
fn zero_denominator_on_flat_function() -> TestResult {
    let f = |_x: f64| Ok(1.0);
    let err = secant(f, 0.0, 1.0, 1e-10, 50).unwrap_err();

    assert!(matches!(err, MethodError::ZeroDenominator { iteration: 1 }));
    Ok(())
}

#[test]
fn exhaustion_returns_best_estimate() -> TestResult {
    // no real root; the iteration wanders but must return data
    let f = |x: f64| Ok(x * x + 1.0);
    let niter = 5;
    let res = secant(f, 0.5, 1.5, 1e-12, niter)?;

    assert_eq!(res.iterations_used, niter);
    assert_eq!(res.iterations.len(), niter);
    assert_eq!(res.root, res.last().unwrap().x_n);
    Ok(())
}

#[test]
fn trace_is_one_based_and_ordered() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let res = secant(f, 1.0, 2.0, 1e-10, 50)?;

    for (i, record) in res.iterations.iter().enumerate() {
        assert_eq!(record.iteration, i + 1);
    }
    Ok(())
}

#[test]
fn max_iter_one_gives_exactly_one_record() -> TestResult {
    let f = |x: f64| Ok(x * x - 2.0);
    let res = secant(f, 1.0, 2.0, 1e-30, 1)?;

    assert_eq!(res.iterations.len(), 1);
    assert_eq!(res.iterations_used, 1);
    Ok(())
}

#[test]
fn works_with_parsed_expression() -> Result<(), Box<dyn std::error::Error>> {
    let f = parse("x**3 - x - 2")?;
    let res = secant(|x| f.call(x), 1.0, 2.0, 1e-10, 50)?;

    assert!((res.root.powi(3) - res.root - 2.0).abs() < 1e-8);
    Ok(())
}
