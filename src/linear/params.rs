use crate::error::{invalid_hyperparameter, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl LinearRegressionParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(invalid_hyperparameter(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(invalid_hyperparameter("epochs must be positive"));
        }
        Ok(())
    }
}

// Builder for LinearRegressionParams
#[derive(Debug, Clone)]
pub struct LinearRegressionParamsBuilder {
    learning_rate: f64,
    epochs: usize,
}

impl LinearRegressionParamsBuilder {
    pub fn new() -> Self {
        Self {
            learning_rate: 1e-4,
            epochs: 1000,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn build(self) -> LinearRegressionParams {
        LinearRegressionParams {
            learning_rate: self.learning_rate,
            epochs: self.epochs,
        }
    }
}

impl Default for LinearRegressionParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for LinearRegressionParams {
    fn default() -> Self {
        LinearRegressionParamsBuilder::new().build()
    }
}
