use std::{env, process::ExitCode, time::SystemTime};

use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use treeline::{
    experiment::{load_labeled_csv, run_depth_sweep, synthetic_linear_data, ExperimentParams},
    test_data::CLASSIFICATION_CSV,
    LinearRegression, LinearRegressionParams, Result,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_classification(path: &str) -> Result<()> {
    let (x, y) = load_labeled_csv(path, "target")?;
    println!("Fitting decision trees on {} samples from {}", y.len(), path);

    let start = SystemTime::now();
    let reports = run_depth_sweep(x.view(), y.view(), &ExperimentParams::default())?;
    for report in reports {
        println!(
            "Depth: {:<4} | Train Acc = {:.10} | Test Acc = {:.10}",
            report.max_depth.to_string(),
            report.train_accuracy,
            report.test_accuracy
        );
    }
    if let Ok(elapsed) = start.elapsed() {
        println!("Time elapsed: {:?}", elapsed);
    }
    Ok(())
}

fn run_regression() -> Result<()> {
    let (x, y) = synthetic_linear_data(2000, 0.5, 0.3, 1.0, 0);
    let params = LinearRegressionParams::default();
    let mut model = LinearRegression::new();
    let fit_result = model.fit_with_params(x.view(), y.view(), &params)?;
    println!(
        "Slope: {:.16}, Intercept: {:.16}, Training Error: {:?}",
        model.slope()?,
        model.intercept()?,
        fit_result.err
    );
    println!("Prediction at x = 2: {:.2}", model.predict(2.0)?);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| CLASSIFICATION_CSV.to_string());

    if let Err(err) = run_classification(&path).and_then(|_| run_regression()) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
