// ============================================================
// Layer 3 — Evaluation Metrics
// ============================================================
// Aggregates per-example predictions into the numbers an
// evaluation run reports:
//
//   - confusion matrix: counts[predicted][actual]
//   - accuracy:         correct / total
//
// Example with 3 topics after 5 examples:
//
//              actual 0  actual 1  actual 2
//   pred 0   [[   2         0         1   ]
//   pred 1    [   0         1         0   ]
//   pred 2    [   0         0         1   ]]
//
//   trace = 4 = correct, sum = 5 = total, accuracy = 0.8
//
// How to read the matrix:
//   - A column is one true topic; off-diagonal cells in it
//     are the topics it gets confused with
//   - A row is one predicted topic; off-diagonal cells in it
//     are false positives for that topic
//
// Reference: Rust Book §8 (Vectors)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::EvalError;

/// Index of the largest score, ties resolved to the lowest index.
/// Returns None for an empty slice.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            // Strict `>` keeps the earliest index on ties
            Some((_, b)) if s <= b || s.is_nan() => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

// ─── ConfusionMatrix ──────────────────────────────────────────────────────────
/// Square count matrix indexed `[predicted][actual]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    num_labels: usize,
    /// Row-major: counts[predicted * num_labels + actual]
    counts: Vec<u32>,
}

impl ConfusionMatrix {
    /// A zeroed `num_labels × num_labels` matrix
    pub fn new(num_labels: usize) -> Self {
        Self {
            num_labels,
            counts: vec![0; num_labels * num_labels],
        }
    }

    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    /// Count one example. Fails if either index falls outside the matrix.
    pub fn record(&mut self, predicted: usize, actual: usize) -> Result<(), EvalError> {
        if predicted >= self.num_labels || actual >= self.num_labels {
            return Err(EvalError::ClassOutOfRange {
                predicted,
                gold:       actual,
                num_labels: self.num_labels,
            });
        }
        self.counts[predicted * self.num_labels + actual] += 1;
        Ok(())
    }

    pub fn get(&self, predicted: usize, actual: usize) -> u32 {
        self.counts[predicted * self.num_labels + actual]
    }

    /// Sum of every cell — equals the number of recorded examples
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Sum of the diagonal — equals the number of correct predictions
    pub fn trace(&self) -> u64 {
        (0..self.num_labels).map(|i| self.get(i, i) as u64).sum()
    }

    /// One row per predicted class
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.counts.chunks(self.num_labels.max(1))
    }

    /// Recall per actual class: diagonal / column sum.
    /// None for a class that never occurs in the gold labels.
    pub fn per_class_recall(&self) -> Vec<Option<f64>> {
        (0..self.num_labels)
            .map(|actual| {
                let support: u64 = (0..self.num_labels)
                    .map(|p| self.get(p, actual) as u64)
                    .sum();
                (support > 0).then(|| self.get(actual, actual) as f64 / support as f64)
            })
            .collect()
    }
}

/// Prints in the bracketed layout numpy uses for 2-D integer arrays:
///
/// ```text
/// [[2 0 1]
///  [0 1 0]
///  [0 0 1]]
/// ```
impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_labels == 0 {
            return write!(f, "[]");
        }
        let width = self
            .counts
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1);

        for (i, row) in self.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
            let open  = if i == 0 { "[[" } else { " [" };
            let close = if i + 1 == self.num_labels { "]]" } else { "]\n" };
            write!(f, "{open}{}{close}", cells.join(" "))?;
        }
        Ok(())
    }
}

// ─── EvalReport ───────────────────────────────────────────────────────────────
/// Everything one evaluation pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// correct / total, in [0.0, 1.0]
    pub accuracy: f64,

    pub correct: usize,

    /// Number of examples actually scored
    pub total: usize,

    pub confusion: ConfusionMatrix,

    /// Lines dropped by the lenient line policy (0 when strict)
    pub skipped: usize,
}

impl EvalReport {
    /// The line written to the console and to the results file.
    /// Accuracy is shown as a percentage with 4 decimals.
    pub fn accuracy_line(&self) -> String {
        format!("val acc: {:.4}", self.accuracy * 100.0)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    }

    #[test]
    fn test_argmax_ties_go_to_lowest_index() {
        assert_eq!(argmax(&[0.5, 0.9, 0.9, 0.1]), Some(1));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_negative_scores() {
        // Raw logits are often all negative
        assert_eq!(argmax(&[-3.0, -0.5, -2.0]), Some(1));
    }

    #[test]
    fn test_record_diagonal_only() {
        let mut cm = ConfusionMatrix::new(3);
        cm.record(2, 2).unwrap();
        assert_eq!(cm.get(2, 2), 1);
        assert_eq!(cm.total(), 1);
        assert_eq!(cm.trace(), 1);
    }

    #[test]
    fn test_record_is_predicted_then_actual() {
        let mut cm = ConfusionMatrix::new(3);
        cm.record(0, 2).unwrap();
        assert_eq!(cm.get(0, 2), 1);
        assert_eq!(cm.get(2, 0), 0);
        assert_eq!(cm.trace(), 0);
    }

    #[test]
    fn test_record_out_of_range() {
        let mut cm = ConfusionMatrix::new(2);
        let err = cm.record(2, 0).unwrap_err();
        assert_eq!(
            err,
            EvalError::ClassOutOfRange { predicted: 2, gold: 0, num_labels: 2 }
        );
        assert_eq!(cm.total(), 0);
    }

    #[test]
    fn test_display_numpy_layout() {
        let mut cm = ConfusionMatrix::new(2);
        for _ in 0..10 {
            cm.record(0, 0).unwrap();
        }
        cm.record(1, 0).unwrap();
        assert_eq!(cm.to_string(), "[[10  0]\n [ 1  0]]");
    }

    #[test]
    fn test_per_class_recall() {
        let mut cm = ConfusionMatrix::new(3);
        cm.record(0, 0).unwrap();
        cm.record(1, 0).unwrap();
        cm.record(1, 1).unwrap();
        let recall = cm.per_class_recall();
        assert_eq!(recall[0], Some(0.5));
        assert_eq!(recall[1], Some(1.0));
        // Topic 2 never appears as a gold label
        assert_eq!(recall[2], None);
    }

    #[test]
    fn test_accuracy_line_format() {
        let report = EvalReport {
            accuracy:  0.5,
            correct:   1,
            total:     2,
            confusion: ConfusionMatrix::new(2),
            skipped:   0,
        };
        assert_eq!(report.accuracy_line(), "val acc: 50.0000");
    }
}
