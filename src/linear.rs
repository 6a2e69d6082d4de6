use ndarray::{Array1, ArrayView1};

use crate::{
    error::{Error, Result},
    FitResult, FittedModel, ModelFitter,
};

mod fitter;
pub mod params;

pub use fitter::GradientDescentFitter;
pub use params::{LinearRegressionParams, LinearRegressionParamsBuilder};

/// Fitted parameters of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedLine {
    #[inline]
    pub fn predict_single(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl FittedModel<f64> for FittedLine {
    type Output = f64;

    fn predict(&self, x: f64) -> Result<f64> {
        Ok(self.predict_single(x))
    }
}

impl<'a> FittedModel<ArrayView1<'a, f64>> for FittedLine {
    type Output = Array1<f64>;

    fn predict(&self, x: ArrayView1<'a, f64>) -> Result<Array1<f64>> {
        Ok(x.mapv(|v| self.predict_single(v)))
    }
}

impl<'a> From<GradientDescentFitter<'a>> for FittedLine {
    fn from(fitter: GradientDescentFitter<'a>) -> Self {
        Self {
            slope: fitter.slope,
            intercept: fitter.intercept,
        }
    }
}

/// Univariate linear regression trained by full-batch gradient descent on
/// mean-squared error.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    line: Option<FittedLine>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self { line: None }
    }

    pub fn is_fitted(&self) -> bool {
        self.line.is_some()
    }

    pub fn line(&self) -> Option<&FittedLine> {
        self.line.as_ref()
    }

    pub fn fit<'a>(
        &mut self,
        x: ArrayView1<'a, f64>,
        y: ArrayView1<'a, f64>,
        learning_rate: f64,
        epochs: usize,
    ) -> Result<FitResult<f64>> {
        let params = LinearRegressionParamsBuilder::new()
            .learning_rate(learning_rate)
            .epochs(epochs)
            .build();
        self.fit_with_params(x, y, &params)
    }

    /// Starts from slope = intercept = 0 on every call. On error the previous
    /// parameters, if any, are kept.
    pub fn fit_with_params<'a>(
        &mut self,
        x: ArrayView1<'a, f64>,
        y: ArrayView1<'a, f64>,
        params: &LinearRegressionParams,
    ) -> Result<FitResult<f64>> {
        let (fit_result, line) = GradientDescentFitter::new(x, y)?.fit(params)?;
        self.line = Some(line);
        Ok(fit_result)
    }

    pub fn slope(&self) -> Result<f64> {
        self.line.map(|line| line.slope).ok_or(Error::NotFitted)
    }

    pub fn intercept(&self) -> Result<f64> {
        self.line.map(|line| line.intercept).ok_or(Error::NotFitted)
    }

    pub fn predict(&self, x: f64) -> Result<f64> {
        self.line.as_ref().ok_or(Error::NotFitted)?.predict(x)
    }

    pub fn predict_many(&self, x: ArrayView1<f64>) -> Result<Array1<f64>> {
        self.line.as_ref().ok_or(Error::NotFitted)?.predict(x)
    }
}
