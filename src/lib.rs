pub mod dataset;
pub mod error;
pub mod experiment;
pub mod linear;
pub mod test_data;
pub mod tree;
use ndarray::Array1;

pub use dataset::rows_to_array;
pub use error::{Error, Result};
pub use linear::{FittedLine, LinearRegression, LinearRegressionParams};
pub use tree::{DecisionTreeClassifier, DecisionTreeParams, FittedDecisionTree, MaxDepth};

#[derive(Debug)]
pub struct FitResult<T = f64> {
    pub err: f64,
    pub y_hat: Array1<T>,
}

pub trait FittedModel<X> {
    type Output;

    fn predict(&self, x: X) -> Result<Self::Output>;
}

pub trait ModelFitter: Sized {
    type Model;
    type HyperParameters;
    type Features;
    type Labels;
    type Prediction;

    fn new(x: Self::Features, y: Self::Labels) -> Result<Self>;
    fn fit(
        self,
        hyperparameters: &Self::HyperParameters,
    ) -> Result<(FitResult<Self::Prediction>, Self::Model)>;
}
