//! Helpers for running the classic experiments against the estimators: a
//! depth sweep of the decision tree on a labelled CSV and a gradient descent
//! fit on synthetic noisy line data.

use std::{fs::File, path::Path};

use csv::ReaderBuilder;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, info};

use crate::{
    error::{invalid_hyperparameter, invalid_input, Error, Result},
    tree::{Criterion, DecisionTreeClassifier, DecisionTreeParamsBuilder, MaxDepth},
};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct ExperimentParams {
    pub test_size: f64,
    pub seed: u64,
    pub depths: Vec<MaxDepth>,
    pub criterion: Criterion,
}

// Builder for ExperimentParams
#[derive(Debug, Clone)]
pub struct ExperimentParamsBuilder {
    test_size: f64,
    seed: u64,
    depths: Vec<MaxDepth>,
    criterion: Criterion,
}

impl ExperimentParamsBuilder {
    pub fn new() -> Self {
        let mut depths: Vec<MaxDepth> = (1..=7).map(MaxDepth::Bounded).collect();
        depths.push(MaxDepth::Unlimited);
        Self {
            test_size: 0.5,
            seed: 42,
            depths,
            criterion: Criterion::Gini,
        }
    }

    pub fn test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn depths(mut self, depths: Vec<MaxDepth>) -> Self {
        self.depths = depths;
        self
    }

    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn build(self) -> ExperimentParams {
        ExperimentParams {
            test_size: self.test_size,
            seed: self.seed,
            depths: self.depths,
            criterion: self.criterion,
        }
    }
}

impl Default for ExperimentParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ExperimentParams {
    fn default() -> Self {
        ExperimentParamsBuilder::new().build()
    }
}

#[derive(Debug, Clone)]
pub struct Split<T> {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<T>,
    pub y_test: Array1<T>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthReport {
    pub max_depth: MaxDepth,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
}

/// Reads a headered CSV, using `target` as the label column and every other
/// column as a feature. Labels are binarized: `1` is the positive class and
/// any other value becomes `0`.
pub fn load_labeled_csv<P: AsRef<Path>>(
    path: P,
    target: &str,
) -> Result<(Array2<f64>, Array1<usize>)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let target_idx = headers
        .iter()
        .position(|h| h.trim() == target)
        .ok_or_else(|| invalid_input(format!("no column named {target:?}")))?;
    let n_features = headers.len() - 1;

    let mut x_data = Vec::new();
    let mut y_data = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.trim().parse().map_err(|_| {
                invalid_input(format!("row {row}, column {col}: cannot parse {field:?}"))
            })?;
            if col == target_idx {
                y_data.push(usize::from(value == 1.0));
            } else {
                x_data.push(value);
            }
        }
    }

    let x = Array2::from_shape_vec((y_data.len(), n_features), x_data)
        .map_err(|err| invalid_input(err.to_string()))?;
    debug!(path = %path.display(), n_samples = x.nrows(), n_features, "loaded dataset");
    Ok((x, Array1::from(y_data)))
}

/// Shuffles rows with a seeded RNG and holds out `round(n * test_size)` of them.
pub fn train_test_split<T: Clone>(
    x: ArrayView2<f64>,
    y: ArrayView1<T>,
    test_size: f64,
    seed: u64,
) -> Result<Split<T>> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(invalid_hyperparameter(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }
    if x.nrows() != y.len() {
        return Err(invalid_input(format!(
            "features have {} rows but labels have {}",
            x.nrows(),
            y.len()
        )));
    }
    let n = x.nrows();
    let n_test = (n as f64 * test_size).round() as usize;
    if n_test == 0 || n_test == n {
        return Err(invalid_input(format!(
            "cannot split {n} samples with test_size {test_size}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok(Split {
        x_train: x.select(Axis(0), train_idx),
        x_test: x.select(Axis(0), test_idx),
        y_train: y.select(Axis(0), train_idx),
        y_test: y.select(Axis(0), test_idx),
    })
}

/// Fraction of positions where prediction and label agree.
pub fn accuracy(y_true: ArrayView1<usize>, y_pred: ArrayView1<usize>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(invalid_input(format!(
            "{} labels but {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(invalid_input("cannot score an empty prediction"));
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(a, b)| a == b)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

fn evaluate_depth(
    split: &Split<usize>,
    max_depth: MaxDepth,
    criterion: Criterion,
) -> Result<DepthReport> {
    let params = DecisionTreeParamsBuilder::new()
        .max_depth(max_depth)
        .criterion(criterion)
        .build();
    let mut clf = DecisionTreeClassifier::new(params);
    clf.fit(split.x_train.view(), split.y_train.view())?;

    let train_pred = clf.predict(split.x_train.view())?;
    let test_pred = clf.predict(split.x_test.view())?;
    let report = DepthReport {
        max_depth,
        train_accuracy: accuracy(split.y_train.view(), train_pred.view())?,
        test_accuracy: accuracy(split.y_test.view(), test_pred.view())?,
    };
    info!(
        max_depth = %report.max_depth,
        train_accuracy = report.train_accuracy,
        test_accuracy = report.test_accuracy,
        "evaluated depth"
    );
    Ok(report)
}

/// Fits one fresh classifier per depth bound and scores it on both
/// partitions. Reports keep the order of `depths`.
pub fn depth_sweep(
    split: &Split<usize>,
    depths: &[MaxDepth],
    criterion: Criterion,
) -> Result<Vec<DepthReport>> {
    #[cfg(not(feature = "use-rayon"))]
    let reports = depths
        .iter()
        .map(|&max_depth| evaluate_depth(split, max_depth, criterion))
        .collect();

    #[cfg(feature = "use-rayon")]
    let reports = depths
        .par_iter()
        .map(|&max_depth| evaluate_depth(split, max_depth, criterion))
        .collect();

    reports
}

/// Splits `x`/`y` and runs [`depth_sweep`] with the given parameters.
pub fn run_depth_sweep(
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    params: &ExperimentParams,
) -> Result<Vec<DepthReport>> {
    let split = train_test_split(x, y, params.test_size, params.seed)?;
    debug!(
        n_train = split.y_train.len(),
        n_test = split.y_test.len(),
        "split dataset"
    );
    depth_sweep(&split, &params.depths, params.criterion)
}

/// `n` points with `x` uniform on `[0, 5)` in ascending order and
/// `y = slope * x + intercept + N(0, noise_std^2)`.
pub fn synthetic_linear_data(
    n: usize,
    slope: f64,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Array1<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x: Vec<f64> = (0..n).map(|_| 5.0 * rng.gen::<f64>()).collect();
    x.sort_by(f64::total_cmp);
    let y = x
        .iter()
        .map(|&v| slope * v + intercept + noise_std * standard_normal(&mut rng))
        .collect();
    (Array1::from(x), y)
}

/// Box-Muller transform.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
