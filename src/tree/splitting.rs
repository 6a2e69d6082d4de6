use itertools::Itertools;
use ndarray::{ArrayView1, ArrayView2};

use super::{
    impurity::{ClassCounts, N_CLASSES},
    params::Criterion,
};

/// Impurity decreases closer than this are treated as equal.
const DECREASE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    pub feature: usize,
    pub threshold: f64,
    pub decrease: f64,
}

fn weighted_impurity(criterion: Criterion, left: &ClassCounts, right: &ClassCounts) -> f64 {
    let n_left: usize = left.iter().sum();
    let n_right: usize = right.iter().sum();
    let n = (n_left + n_right) as f64;
    (n_left as f64 * criterion.impurity(left) + n_right as f64 * criterion.impurity(right)) / n
}

/// Midpoint of two consecutive distinct values, kept strictly below `next_value`
/// so that `x <= threshold` reproduces the scored partition.
fn midpoint(value: f64, next_value: f64) -> f64 {
    let mid = value / 2.0 + next_value / 2.0;
    if mid >= value && mid < next_value {
        mid
    } else {
        value
    }
}

/// Best threshold of one feature over `samples`, scanning midpoints between
/// consecutive distinct values in ascending order.
pub fn find_best_threshold(
    feature: usize,
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    samples: &[usize],
    parent_counts: &ClassCounts,
    criterion: Criterion,
) -> Option<SplitCandidate> {
    let parent_impurity = criterion.impurity(parent_counts);
    let sorted: Vec<(f64, usize)> = samples
        .iter()
        .map(|&i| (x[(i, feature)], y[i]))
        .sorted_by(|a, b| a.0.total_cmp(&b.0))
        .collect();

    let mut left = [0; N_CLASSES];
    let mut best: Option<SplitCandidate> = None;

    for ((value, label), (next_value, _)) in sorted.iter().copied().tuple_windows() {
        left[label] += 1;
        if value == next_value {
            continue;
        }
        let mut right = *parent_counts;
        for class in 0..N_CLASSES {
            right[class] -= left[class];
        }

        let decrease = parent_impurity - weighted_impurity(criterion, &left, &right);
        let improves = match best {
            Some(b) => decrease > b.decrease + DECREASE_TOLERANCE,
            None => true,
        };
        if improves {
            best = Some(SplitCandidate {
                feature,
                threshold: midpoint(value, next_value),
                decrease,
            });
        }
    }
    best
}

/// Best split over all features. Ties keep the lowest feature index, then the
/// lowest threshold. Returns `None` unless the decrease is strictly positive.
pub fn find_best_split(
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
    samples: &[usize],
    parent_counts: &ClassCounts,
    criterion: Criterion,
) -> Option<SplitCandidate> {
    (0..x.ncols())
        .filter_map(|feature| find_best_threshold(feature, x, y, samples, parent_counts, criterion))
        .fold(None, |best: Option<SplitCandidate>, candidate| match best {
            Some(b) if candidate.decrease <= b.decrease + DECREASE_TOLERANCE => Some(b),
            _ => Some(candidate),
        })
        .filter(|best| best.decrease > DECREASE_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::impurity::class_counts;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    fn all_samples(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_threshold_is_midpoint_of_separating_values() {
        let x = array![[0.0], [1.0], [2.0], [3.0]];
        let y = array![0, 0, 1, 1];
        let samples = all_samples(4);
        let counts = class_counts(y.iter().copied());
        let split = find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini)
            .expect("expected a split");
        assert_eq!(split.feature, 0);
        assert_abs_diff_eq!(split.threshold, 1.5);
        assert_abs_diff_eq!(split.decrease, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unsorted_samples_and_duplicates() {
        let x = array![[3.0], [1.0], [1.0], [0.0], [3.0]];
        let y = array![1, 0, 0, 0, 1];
        let samples = all_samples(5);
        let counts = class_counts(y.iter().copied());
        let split = find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini)
            .expect("expected a split");
        assert_abs_diff_eq!(split.threshold, 2.0);
    }

    #[test]
    fn test_tie_prefers_lowest_feature() {
        // Both columns separate the classes perfectly.
        let x = array![[0.0, 10.0], [1.0, 11.0], [2.0, 12.0], [3.0, 13.0]];
        let y = array![0, 0, 1, 1];
        let samples = all_samples(4);
        let counts = class_counts(y.iter().copied());
        let split = find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini)
            .expect("expected a split");
        assert_eq!(split.feature, 0);
    }

    #[test]
    fn test_tie_prefers_lowest_threshold() {
        // Isolating either end gives the same decrease.
        let x = array![[0.0], [1.0], [2.0]];
        let y = array![1, 0, 1];
        let samples = all_samples(3);
        let counts = class_counts(y.iter().copied());
        let split = find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini)
            .expect("expected a split");
        assert_abs_diff_eq!(split.threshold, 0.5);
    }

    #[test]
    fn test_midpoint_stays_between_adjacent_values() {
        let a = 1.0 + f64::EPSILON;
        let b = f64::from_bits(a.to_bits() + 1);
        let t = midpoint(a, b);
        assert!(a <= t && t < b);

        let t = midpoint(-f64::MAX, f64::MAX);
        assert!(t.is_finite());
        assert!(-f64::MAX <= t && t < f64::MAX);
    }

    #[test]
    fn test_adjacent_values_split_into_non_empty_children() {
        let a = 1.0 + f64::EPSILON;
        let b = f64::from_bits(a.to_bits() + 1);
        for x in [array![[a], [b]], array![[-f64::MAX], [f64::MAX]]] {
            let y = array![0, 1];
            let samples = all_samples(2);
            let counts = class_counts(y.iter().copied());
            let split = find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini)
                .expect("expected a split");
            let n_left = samples
                .iter()
                .filter(|&&i| x[(i, split.feature)] <= split.threshold)
                .count();
            assert_eq!(n_left, 1);
        }
    }

    #[test]
    fn test_no_split_for_constant_feature() {
        let x = Array2::from_elem((4, 1), 7.0);
        let y = array![0, 1, 0, 1];
        let samples = all_samples(4);
        let counts = class_counts(y.iter().copied());
        assert!(find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini).is_none());
    }

    #[test]
    fn test_no_split_without_positive_decrease() {
        let x = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
        let y = array![0, 1, 1, 0];
        let samples = all_samples(4);
        let counts = class_counts(y.iter().copied());
        assert!(find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Gini).is_none());
    }

    #[test]
    fn test_subset_of_samples() {
        let x = array![[5.0], [0.0], [1.0], [2.0], [3.0]];
        let y = array![1, 0, 0, 1, 1];
        let samples = vec![1, 2, 3, 4];
        let counts = class_counts(samples.iter().map(|&i| y[i]));
        let split = find_best_split(x.view(), y.view(), &samples, &counts, Criterion::Entropy)
            .expect("expected a split");
        assert_abs_diff_eq!(split.threshold, 1.5);
        assert_abs_diff_eq!(split.decrease, 1.0, epsilon = 1e-12);
    }
}
