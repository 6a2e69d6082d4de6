use criterion::{criterion_group, criterion_main, Criterion};
use treeline::experiment::synthetic_linear_data;
use treeline::test_data::setup_classification_csv;
use treeline::{DecisionTreeClassifier, LinearRegression, MaxDepth};

fn bench_tree_fitter(c: &mut Criterion) {
    let (x, y) = setup_classification_csv().expect("Failed to load data/classification.csv");

    let mut group = c.benchmark_group("TreeFitter");

    for max_depth in [MaxDepth::Bounded(3), MaxDepth::Unlimited] {
        group.bench_function(format!("max_depth={max_depth}"), |b| {
            b.iter(|| {
                let mut clf = DecisionTreeClassifier::with_max_depth(max_depth);
                clf.fit(x.view(), y.view()).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_gradient_descent(c: &mut Criterion) {
    let (x, y) = synthetic_linear_data(2000, 0.5, 0.3, 1.0, 0);

    c.bench_function("GradientDescentFitter", |b| {
        b.iter(|| {
            let mut model = LinearRegression::new();
            model.fit(x.view(), y.view(), 1e-4, 1000).unwrap();
        })
    });
}

criterion_group!(benches, bench_tree_fitter, bench_gradient_descent);
criterion_main!(benches);
