use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the estimators and the experiment helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Shape or length mismatch, empty dataset, or a value outside the accepted domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A hyperparameter outside its valid range.
    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),
    /// Prediction or accessor use before a successful fit.
    #[error("Estimator has not been fitted")]
    NotFitted,
    /// Gradient descent produced a non-finite parameter.
    #[error("Gradient descent diverged at epoch {epoch} (slope={slope}, intercept={intercept})")]
    NumericDivergence {
        epoch: usize,
        slope: f64,
        intercept: f64,
    },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
    Error::InvalidInput(message.into())
}

pub(crate) fn invalid_hyperparameter(message: impl Into<String>) -> Error {
    Error::InvalidHyperparameter(message.into())
}
