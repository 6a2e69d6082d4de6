use approx::assert_abs_diff_eq;
use ndarray::array;

use super::*;

#[test]
fn test_gradient_at_origin() {
    let x = array![1.0, 2.0, 3.0];
    let y = array![2.0, 4.0, 6.0];
    let fitter = GradientDescentFitter::new(x.view(), y.view()).unwrap();
    let (d_slope, d_intercept) = fitter.gradient();
    assert_abs_diff_eq!(d_slope, -2.0 / 3.0 * 28.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d_intercept, -2.0 / 3.0 * 12.0, epsilon = 1e-12);
}

#[test]
fn test_gradient_vanishes_at_optimum() {
    let x = array![1.0, 2.0, 3.0];
    let y = array![5.0, 7.0, 9.0];
    let mut fitter = GradientDescentFitter::new(x.view(), y.view()).unwrap();
    fitter.slope = 2.0;
    fitter.intercept = 3.0;
    assert_eq!(fitter.gradient(), (0.0, 0.0));
    assert_eq!(fitter.mse(), 0.0);
}

#[test]
fn test_fit_result_predictions() {
    let x = array![0.0, 1.0, 2.0];
    let y = array![1.0, 3.0, 5.0];
    let params = LinearRegressionParams {
        learning_rate: 0.1,
        epochs: 2000,
    };
    let (fit_result, line) = GradientDescentFitter::new(x.view(), y.view())
        .unwrap()
        .fit(&params)
        .unwrap();
    assert_eq!(fit_result.y_hat.len(), 3);
    assert_abs_diff_eq!(fit_result.y_hat[2], line.predict_single(2.0));
    assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(line.intercept, 1.0, epsilon = 1e-6);
}

#[test]
fn test_non_finite_observations_rejected() {
    let x = array![0.0, f64::INFINITY];
    let y = array![1.0, 2.0];
    assert!(matches!(
        GradientDescentFitter::new(x.view(), y.view()),
        Err(Error::InvalidInput(_))
    ));
}
