#[cfg(test)]
mod tests {
    use treeline::{
        experiment::{
            depth_sweep, run_depth_sweep, train_test_split, ExperimentParams,
            ExperimentParamsBuilder,
        },
        test_data::setup_classification_csv,
        tree::Criterion,
        MaxDepth,
    };

    #[test]
    fn test_default_sweep() {
        let (x, y) = setup_classification_csv().unwrap();
        let params = ExperimentParams::default();
        let reports = run_depth_sweep(x.view(), y.view(), &params).unwrap();
        assert_eq!(reports.len(), 8);
        for report in &reports {
            println!(
                "Depth: {:<4} | Train Acc = {:.10} | Test Acc = {:.10}",
                report.max_depth.to_string(),
                report.train_accuracy,
                report.test_accuracy
            );
            assert!((0.0..=1.0).contains(&report.test_accuracy));
        }
        let last = reports.last().unwrap();
        assert_eq!(last.max_depth, MaxDepth::Unlimited);
        assert_eq!(last.train_accuracy, 1.0);
        for pair in reports.windows(2) {
            assert!(pair[1].train_accuracy >= pair[0].train_accuracy);
        }
    }

    #[test]
    fn test_sweep_reproducible_with_seed() {
        let (x, y) = setup_classification_csv().unwrap();
        let params = ExperimentParamsBuilder::new()
            .seed(7)
            .test_size(0.3)
            .depths(vec![MaxDepth::Bounded(2), MaxDepth::Bounded(4)])
            .build();
        let first = run_depth_sweep(x.view(), y.view(), &params).unwrap();
        let second = run_depth_sweep(x.view(), y.view(), &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sweep_on_explicit_split() {
        let (x, y) = setup_classification_csv().unwrap();
        let split = train_test_split(x.view(), y.view(), 0.5, 42).unwrap();
        assert_eq!(split.y_train.len() + split.y_test.len(), y.len());
        let reports = depth_sweep(
            &split,
            &[MaxDepth::Bounded(0), MaxDepth::Unlimited],
            Criterion::Entropy,
        )
        .unwrap();
        assert!(reports[1].train_accuracy >= reports[0].train_accuracy);
    }
}
