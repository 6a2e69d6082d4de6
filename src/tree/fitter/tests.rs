use ndarray::array;

use super::*;
use crate::{
    tree::params::{Criterion, DecisionTreeParamsBuilder, MaxDepth},
    Error,
};

#[test]
fn test_fit_reports_training_error() {
    let x = array![[0.0], [1.0], [2.0], [3.0]];
    let y = array![0, 1, 0, 1];
    let params = DecisionTreeParamsBuilder::new()
        .max_depth(MaxDepth::Bounded(0))
        .build();
    let (fit_result, model) = TreeFitter::new(x.view(), y.view())
        .unwrap()
        .fit(&params)
        .unwrap();
    assert_eq!(model.n_nodes(), 1);
    assert_eq!(fit_result.y_hat, array![0, 0, 0, 0]);
    assert_eq!(fit_result.err, 0.5);
}

#[test]
fn test_children_follow_parent_in_arena() {
    let x = array![[0.0, 5.0], [1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]];
    let y = array![0, 1, 0, 1, 1];
    let (_, model) = TreeFitter::new(x.view(), y.view())
        .unwrap()
        .fit(&DecisionTreeParams::default())
        .unwrap();
    for (id, node) in model.nodes().iter().enumerate() {
        if let Node::Internal { left, right, .. } = node {
            assert!(*left > id && *right > id);
            assert_ne!(left, right);
        }
    }
}

#[test]
fn test_entropy_criterion_fits_separable_data() {
    let x = array![[0.0], [1.0], [2.0], [3.0]];
    let y = array![0, 0, 1, 1];
    let params = DecisionTreeParamsBuilder::new()
        .criterion(Criterion::Entropy)
        .build();
    let (fit_result, model) = TreeFitter::new(x.view(), y.view())
        .unwrap()
        .fit(&params)
        .unwrap();
    assert_eq!(fit_result.err, 0.0);
    assert_eq!(model.depth(), 1);
}

#[test]
fn test_new_rejects_bad_inputs() {
    let x = array![[0.0], [1.0]];
    assert!(matches!(
        TreeFitter::new(x.view(), array![0].view()),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        TreeFitter::new(x.view(), array![0, 2].view()),
        Err(Error::InvalidInput(_))
    ));
    let x_nan = array![[0.0], [f64::NAN]];
    assert!(matches!(
        TreeFitter::new(x_nan.view(), array![0, 1].view()),
        Err(Error::InvalidInput(_))
    ));
}
