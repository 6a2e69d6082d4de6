use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::{
    error::{invalid_input, Error, Result},
    FitResult, FittedModel, ModelFitter,
};

mod fitter;
pub mod impurity;
pub mod node;
pub mod params;
pub mod splitting;

pub use fitter::TreeFitter;
pub use node::{Node, NodeId};
pub use params::{Criterion, DecisionTreeParams, DecisionTreeParamsBuilder, MaxDepth};

/// A fitted binary classification tree stored as a node arena rooted at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedDecisionTree {
    nodes: Vec<Node>,
    n_features: usize,
    depth: usize,
}

impl FittedDecisionTree {
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Feature width seen during fitting.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn predict_single(&self, x: ArrayView1<f64>) -> usize {
        debug_assert_eq!(x.len(), self.n_features);

        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf { class } => return class,
                Node::Internal {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

impl<'a> FittedModel<ArrayView2<'a, f64>> for FittedDecisionTree {
    type Output = Array1<usize>;

    fn predict(&self, x: ArrayView2<'a, f64>) -> Result<Array1<usize>> {
        if x.ncols() != self.n_features {
            return Err(invalid_input(format!(
                "expected {} features, got {}",
                self.n_features,
                x.ncols()
            )));
        }
        Ok(x.axis_iter(Axis(0))
            .map(|row| self.predict_single(row))
            .collect())
    }
}

impl<'a> From<TreeFitter<'a>> for FittedDecisionTree {
    fn from(fitter: TreeFitter<'a>) -> Self {
        Self {
            nodes: fitter.nodes,
            n_features: fitter.x.ncols(),
            depth: fitter.depth,
        }
    }
}

/// Decision tree classifier for binary labels.
///
/// Starts unfit; [`fit`](DecisionTreeClassifier::fit) replaces any previous
/// tree, and [`predict`](DecisionTreeClassifier::predict) fails with
/// [`Error::NotFitted`] until a fit has succeeded.
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeClassifier {
    params: DecisionTreeParams,
    model: Option<FittedDecisionTree>,
}

impl DecisionTreeClassifier {
    pub fn new(params: DecisionTreeParams) -> Self {
        Self {
            params,
            model: None,
        }
    }

    pub fn with_max_depth(max_depth: MaxDepth) -> Self {
        Self::new(DecisionTreeParamsBuilder::new().max_depth(max_depth).build())
    }

    pub fn params(&self) -> &DecisionTreeParams {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&FittedDecisionTree> {
        self.model.as_ref()
    }

    /// Builds a new tree from `x` and binary labels `y`.
    ///
    /// On error the previously fitted tree, if any, is kept.
    pub fn fit<'a>(
        &mut self,
        x: ArrayView2<'a, f64>,
        y: ArrayView1<'a, usize>,
    ) -> Result<FitResult<usize>> {
        let (fit_result, model) = TreeFitter::new(x, y)?.fit(&self.params)?;
        self.model = Some(model);
        Ok(fit_result)
    }

    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<usize>> {
        self.model.as_ref().ok_or(Error::NotFitted)?.predict(x)
    }
}
