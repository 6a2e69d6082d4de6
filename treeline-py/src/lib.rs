use pyo3::{
    exceptions::{PyRuntimeError, PyValueError},
    prelude::*,
    types::PyFloat,
};

use std::ops::{Deref, DerefMut};

use ndarray::ArrayView1;
use numpy::{PyArray1, PyReadonlyArray1, PyReadonlyArray2, ToPyArray};

use treeline::{DecisionTreeClassifier, Error, LinearRegression, MaxDepth};

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::NotFitted => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

#[derive(Debug)]
#[pyclass(name = "DecisionTreeClassifier")]
pub struct DecisionTreeClassifierPy(DecisionTreeClassifier);

impl Deref for DecisionTreeClassifierPy {
    type Target = DecisionTreeClassifier;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DecisionTreeClassifierPy {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[pymethods]
impl DecisionTreeClassifierPy {
    #[new]
    #[pyo3(signature = (max_depth = -1))]
    fn new(max_depth: i64) -> PyResult<Self> {
        let max_depth = MaxDepth::from_signed(max_depth).map_err(to_py_err)?;
        Ok(DecisionTreeClassifierPy(
            DecisionTreeClassifier::with_max_depth(max_depth),
        ))
    }

    #[pyo3(name = "fit")]
    pub fn _fit<'py>(
        &mut self,
        x: PyReadonlyArray2<'py, f64>,
        y: PyReadonlyArray1<'py, i64>,
    ) -> PyResult<f64> {
        let labels = y
            .as_array()
            .iter()
            .map(|&label| usize::try_from(label))
            .collect::<Result<Vec<usize>, _>>()
            .map_err(|_| PyValueError::new_err("labels must be 0 or 1"))?;
        let fit_result = self
            .fit(x.as_array(), ArrayView1::from(&labels))
            .map_err(to_py_err)?;
        Ok(fit_result.err)
    }

    #[pyo3(name = "predict")]
    pub fn _predict<'py>(
        &self,
        py: Python<'py>,
        x: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray1<i64>>> {
        let y_hat = self.predict(x.as_array()).map_err(to_py_err)?;
        Ok(y_hat.mapv(|label| label as i64).to_pyarray(py))
    }

    fn __repr__(&self) -> String {
        format!(
            "DecisionTreeClassifier(max_depth={}, fitted={})",
            self.params().max_depth,
            self.is_fitted()
        )
    }
}

/// `predict` input: a 1-D float array or a single number.
#[derive(FromPyObject)]
pub enum ScalarOrArray<'py> {
    Array(PyReadonlyArray1<'py, f64>),
    Scalar(f64),
}

#[derive(Debug, Default)]
#[pyclass(name = "LinearRegression")]
pub struct LinearRegressionPy(LinearRegression);

#[pymethods]
impl LinearRegressionPy {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    #[pyo3(name = "fit", signature = (x, y, learning_rate, epochs))]
    pub fn _fit<'py>(
        &mut self,
        x: PyReadonlyArray1<'py, f64>,
        y: PyReadonlyArray1<'py, f64>,
        learning_rate: f64,
        epochs: usize,
    ) -> PyResult<f64> {
        let fit_result = self
            .0
            .fit(x.as_array(), y.as_array(), learning_rate, epochs)
            .map_err(to_py_err)?;
        Ok(fit_result.err)
    }

    #[pyo3(name = "predict")]
    pub fn _predict<'py>(
        &self,
        py: Python<'py>,
        x: ScalarOrArray<'py>,
    ) -> PyResult<Bound<'py, PyAny>> {
        match x {
            ScalarOrArray::Array(x) => {
                let y_hat = self.0.predict_many(x.as_array()).map_err(to_py_err)?;
                Ok(y_hat.to_pyarray(py).into_any())
            }
            ScalarOrArray::Scalar(x) => {
                let y_hat = self.0.predict(x).map_err(to_py_err)?;
                Ok(PyFloat::new(py, y_hat).into_any())
            }
        }
    }

    #[getter]
    pub fn slope(&self) -> PyResult<f64> {
        self.0.slope().map_err(to_py_err)
    }

    #[getter]
    pub fn intercept(&self) -> PyResult<f64> {
        self.0.intercept().map_err(to_py_err)
    }
}

#[pymodule]
fn treeline_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DecisionTreeClassifierPy>()?;
    m.add_class::<LinearRegressionPy>()?;
    Ok(())
}
