use ndarray::{ArrayView1, ArrayView2};
use tracing::{debug, trace};

use crate::{
    dataset::{check_features, check_lengths},
    error::{invalid_input, Result},
    FitResult, FittedModel, ModelFitter,
};

use super::{
    impurity::{class_counts, is_pure, majority_class, N_CLASSES},
    node::{Node, NodeId},
    params::DecisionTreeParams,
    splitting::find_best_split,
    FittedDecisionTree,
};

#[derive(Debug)]
pub struct TreeFitter<'a> {
    pub x: ArrayView2<'a, f64>,
    pub labels: ArrayView1<'a, usize>,
    pub nodes: Vec<Node>,
    pub depth: usize,
}

impl<'a> TreeFitter<'a> {
    /// Grows the subtree for `samples` and returns its root.
    fn grow(&mut self, samples: Vec<usize>, depth: usize, params: &DecisionTreeParams) -> NodeId {
        let counts = class_counts(samples.iter().map(|&i| self.labels[i]));
        let class = majority_class(&counts);

        let id = self.nodes.len();
        self.nodes.push(Node::Leaf { class });
        self.depth = self.depth.max(depth);

        if is_pure(&counts) || samples.len() < 2 || !params.max_depth.allows_split_at(depth) {
            trace!(id, depth, n_samples = samples.len(), class, "leaf");
            return id;
        }

        let Some(split) =
            find_best_split(self.x, self.labels, &samples, &counts, params.criterion)
        else {
            trace!(id, depth, n_samples = samples.len(), class, "leaf, no improving split");
            return id;
        };

        trace!(
            id,
            depth,
            feature = split.feature,
            threshold = split.threshold,
            decrease = split.decrease,
            "split"
        );

        let (left_samples, right_samples): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&i| self.x[(i, split.feature)] <= split.threshold);

        let left = self.grow(left_samples, depth + 1, params);
        let right = self.grow(right_samples, depth + 1, params);
        self.nodes[id] = Node::Internal {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }
}

impl<'a> ModelFitter for TreeFitter<'a> {
    type Model = FittedDecisionTree;
    type HyperParameters = DecisionTreeParams;
    type Features = ArrayView2<'a, f64>;
    type Labels = ArrayView1<'a, usize>;
    type Prediction = usize;

    fn new(x: Self::Features, y: Self::Labels) -> Result<Self> {
        check_features(x)?;
        check_lengths(x.nrows(), y.len())?;
        if let Some(label) = y.iter().find(|&&label| label >= N_CLASSES) {
            return Err(invalid_input(format!(
                "labels must be 0 or 1, found {label}"
            )));
        }
        Ok(Self {
            x,
            labels: y,
            nodes: Vec::new(),
            depth: 0,
        })
    }

    fn fit(
        mut self,
        hyperparameters: &Self::HyperParameters,
    ) -> Result<(FitResult<usize>, Self::Model)> {
        debug!(
            n_samples = self.x.nrows(),
            n_features = self.x.ncols(),
            max_depth = %hyperparameters.max_depth,
            criterion = ?hyperparameters.criterion,
            "fitting decision tree"
        );

        let samples = (0..self.x.nrows()).collect();
        self.grow(samples, 0, hyperparameters);

        let labels = self.labels;
        let x = self.x;
        let model = FittedDecisionTree::from(self);
        let y_hat = model.predict(x)?;
        let n_wrong = y_hat
            .iter()
            .zip(labels.iter())
            .filter(|(pred, label)| pred != label)
            .count();
        let err = n_wrong as f64 / labels.len() as f64;

        debug!(
            n_nodes = model.n_nodes(),
            n_leaves = model.n_leaves(),
            depth = model.depth(),
            err,
            "decision tree fitted"
        );

        Ok((FitResult { err, y_hat }, model))
    }
}

#[cfg(test)]
mod tests;
