use super::params::Criterion;

/// Labels are binary; counts are indexed by class.
pub const N_CLASSES: usize = 2;

pub type ClassCounts = [usize; N_CLASSES];

pub fn class_counts<I>(labels: I) -> ClassCounts
where
    I: IntoIterator<Item = usize>,
{
    let mut counts = [0; N_CLASSES];
    for label in labels {
        counts[label] += 1;
    }
    counts
}

/// Majority class; exact ties resolve to the lower class index.
pub fn majority_class(counts: &ClassCounts) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate().skip(1) {
        if count > counts[best] {
            best = class;
        }
    }
    best
}

pub fn is_pure(counts: &ClassCounts) -> bool {
    counts.iter().filter(|&&c| c > 0).count() <= 1
}

impl Criterion {
    pub fn impurity(self, counts: &ClassCounts) -> f64 {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        match self {
            Criterion::Gini => {
                1.0 - counts
                    .iter()
                    .map(|&c| (c as f64 / total).powi(2))
                    .sum::<f64>()
            }
            Criterion::Entropy => counts
                .iter()
                .filter(|&&c| c > 0)
                .map(|&c| {
                    let p = c as f64 / total;
                    -p * p.log2()
                })
                .sum(),
        }
    }
}
