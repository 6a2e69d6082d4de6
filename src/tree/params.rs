use std::fmt;

use crate::error::{invalid_hyperparameter, Result};

/// Depth bound of a decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxDepth {
    Bounded(usize),
    #[default]
    Unlimited,
}

impl MaxDepth {
    /// Maps the signed convention used by experiment drivers, where `-1` means unlimited.
    pub fn from_signed(depth: i64) -> Result<Self> {
        match depth {
            -1 => Ok(MaxDepth::Unlimited),
            d if d >= 0 => usize::try_from(d)
                .map(MaxDepth::Bounded)
                .map_err(|_| invalid_hyperparameter(format!("max_depth {d} is too large"))),
            d => Err(invalid_hyperparameter(format!(
                "max_depth must be >= 0 or -1 for unlimited, got {d}"
            ))),
        }
    }

    /// Whether a node at `depth` may still be split.
    #[inline]
    pub fn allows_split_at(self, depth: usize) -> bool {
        match self {
            MaxDepth::Bounded(max_depth) => depth < max_depth,
            MaxDepth::Unlimited => true,
        }
    }
}

impl From<Option<usize>> for MaxDepth {
    fn from(depth: Option<usize>) -> Self {
        depth.map_or(MaxDepth::Unlimited, MaxDepth::Bounded)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Bounded(depth) => write!(f, "{depth}"),
            MaxDepth::Unlimited => f.write_str("None"),
        }
    }
}

/// Impurity measure minimized by the split search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criterion {
    #[default]
    Gini,
    /// Shannon entropy in bits.
    Entropy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeParams {
    pub max_depth: MaxDepth,
    pub criterion: Criterion,
}

// Builder for DecisionTreeParams
#[derive(Debug, Clone)]
pub struct DecisionTreeParamsBuilder {
    max_depth: MaxDepth,
    criterion: Criterion,
}

impl DecisionTreeParamsBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: MaxDepth::Unlimited,
            criterion: Criterion::Gini,
        }
    }

    pub fn max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn build(self) -> DecisionTreeParams {
        DecisionTreeParams {
            max_depth: self.max_depth,
            criterion: self.criterion,
        }
    }
}

impl Default for DecisionTreeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for DecisionTreeParams {
    fn default() -> Self {
        DecisionTreeParamsBuilder::new().build()
    }
}
