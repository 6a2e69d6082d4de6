use ndarray::{Array1, ArrayView1};
use tracing::{debug, trace, warn};

use crate::{
    dataset::check_lengths,
    error::{invalid_input, Error, Result},
    FitResult, FittedModel, ModelFitter,
};

use super::{params::LinearRegressionParams, FittedLine};

/// Epochs between progress events.
const LOG_EVERY: usize = 100;

#[derive(Debug)]
pub struct GradientDescentFitter<'a> {
    pub x: ArrayView1<'a, f64>,
    pub labels: ArrayView1<'a, f64>,
    pub slope: f64,
    pub intercept: f64,
}

impl<'a> GradientDescentFitter<'a> {
    /// Mean-squared-error gradient with respect to (slope, intercept), evaluated
    /// at the current parameters over the whole batch.
    pub fn gradient(&self) -> (f64, f64) {
        let n = self.x.len() as f64;
        let (d_slope, d_intercept) = self
            .x
            .iter()
            .zip(self.labels.iter())
            .fold((0.0, 0.0), |(d_m, d_b), (&x, &y)| {
                let error = y - (self.slope * x + self.intercept);
                (d_m + x * error, d_b + error)
            });
        (-2.0 / n * d_slope, -2.0 / n * d_intercept)
    }

    pub fn step(&mut self, learning_rate: f64) {
        let (d_slope, d_intercept) = self.gradient();
        self.slope -= learning_rate * d_slope;
        self.intercept -= learning_rate * d_intercept;
    }

    pub fn mse(&self) -> f64 {
        self.x
            .iter()
            .zip(self.labels.iter())
            .map(|(&x, &y)| (y - (self.slope * x + self.intercept)).powi(2))
            .sum::<f64>()
            / self.x.len() as f64
    }
}

impl<'a> ModelFitter for GradientDescentFitter<'a> {
    type Model = FittedLine;
    type HyperParameters = LinearRegressionParams;
    type Features = ArrayView1<'a, f64>;
    type Labels = ArrayView1<'a, f64>;
    type Prediction = f64;

    fn new(x: Self::Features, y: Self::Labels) -> Result<Self> {
        if x.is_empty() {
            return Err(invalid_input("dataset has no samples"));
        }
        check_lengths(x.len(), y.len())?;
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(invalid_input("observations must be finite"));
        }
        Ok(Self {
            x,
            labels: y,
            slope: 0.0,
            intercept: 0.0,
        })
    }

    fn fit(
        mut self,
        hyperparameters: &Self::HyperParameters,
    ) -> Result<(FitResult<f64>, Self::Model)> {
        hyperparameters.validate()?;
        let LinearRegressionParams {
            learning_rate,
            epochs,
        } = *hyperparameters;
        debug!(
            n_samples = self.x.len(),
            learning_rate, epochs, "fitting linear regression"
        );

        for epoch in 1..=epochs {
            self.step(learning_rate);
            if !(self.slope.is_finite() && self.intercept.is_finite()) {
                warn!(
                    epoch,
                    slope = self.slope,
                    intercept = self.intercept,
                    "gradient descent diverged"
                );
                return Err(Error::NumericDivergence {
                    epoch,
                    slope: self.slope,
                    intercept: self.intercept,
                });
            }
            if epoch % LOG_EVERY == 0 {
                trace!(epoch, slope = self.slope, intercept = self.intercept, "epoch");
            }
        }

        let x = self.x;
        let err = self.mse();
        let model = FittedLine::from(self);
        let y_hat: Array1<f64> = model.predict(x)?;
        debug!(
            slope = model.slope,
            intercept = model.intercept,
            err,
            "linear regression fitted"
        );
        Ok((FitResult { err, y_hat }, model))
    }
}

#[cfg(test)]
mod tests;
