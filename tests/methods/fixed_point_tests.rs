//! tests for fixed-point iteration
use zof::evaluator::parse;
use zof::methods::errors::MethodError;
use zof::methods::fixed_point::fixed_point;

type TestResult = Result<(), MethodError>;

#[test]
fn converges_to_dottie_number() -> TestResult {
    let g = |x: f64| Ok(x.cos());
    let tol = 1e-8;

    let res = fixed_point(g, 0.5, tol, 100)?;

    assert!((res.root - 0.739_085_133_2).abs() <= 1e-7);
    assert!(res.error < tol);
    assert!(res.iterations_used < 100);
    Ok(())
}

#[test]
fn records_displacement_not_g() -> TestResult {
    let g = |x: f64| Ok(x.cos());
    let res = fixed_point(g, 0.5, 1e-8, 100)?;

    // first step: x_1 = g(x0) and the recorded value is g(x0) - x0
    let first = res.iterations[0];
    assert_eq!(first.x_n, 0.5_f64.cos());
    assert_eq!(first.f_x_n, 0.5_f64.cos() - 0.5);
    assert_eq!(first.error, first.f_x_n.abs());
    Ok(())
}

#[test]
fn exhaustion_returns_best_estimate() -> TestResult {
    // g(x) = x + 1 has no fixed point
    let g = |x: f64| Ok(x + 1.0);
    let niter = 7;
    let res = fixed_point(g, 0.0, 1e-10, niter)?;

    assert_eq!(res.iterations_used, niter);
    assert_eq!(res.iterations.len(), niter);
    assert_eq!(res.root, niter as f64);
    assert_eq!(res.error, 1.0);
    Ok(())
}

#[test]
fn max_iter_one_gives_exactly_one_record() -> TestResult {
    let g = |x: f64| Ok(x.cos());
    let res = fixed_point(g, 0.5, 1e-30, 1)?;

    assert_eq!(res.iterations.len(), 1);
    assert_eq!(res.iterations_used, 1);
    Ok(())
}

#[test]
fn works_with_parsed_expression() -> Result<(), Box<dyn std::error::Error>> {
    let g = parse("cos(x)")?;
    let res = fixed_point(|x| g.call(x), 0.5, 1e-8, 100)?;

    assert!((res.root - 0.739_085_133_2).abs() <= 1e-7);
    Ok(())
}
