//! Held-out evaluation of a classifier on a stratified split.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::linear_model::Classifier;
use crate::metrics;

/// Binary classification scores on the test side of a split.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// `[[TN, FP], [FN, TP]]`
    pub confusion_matrix: [[usize; 2]; 2],
}

/// Splits `dataset`, fits `classifier` on the training side and scores its
/// predictions on the test side.
pub fn train_test_split_and_evaluate<C: Classifier>(
    dataset: &Dataset,
    classifier: &mut C,
    test_size: f64,
    seed: u64,
) -> Result<Evaluation> {
    let (train, test) = dataset.train_test_split(test_size, seed)?;
    log::info!(
        "evaluating on {} train / {} test samples",
        train.n_samples(),
        test.n_samples()
    );

    let y_pred = classifier.fit(&train.features, &train.labels)?.predict(&test.features)?;

    let cm = metrics::confusion_matrix(&test.labels, &y_pred)?;
    let evaluation = Evaluation {
        accuracy: metrics::accuracy_score(&test.labels, &y_pred)?,
        precision: metrics::precision_score(&test.labels, &y_pred)?,
        recall: metrics::recall_score(&test.labels, &y_pred)?,
        f1: metrics::f1_score(&test.labels, &y_pred)?,
        confusion_matrix: [[cm[(0, 0)], cm[(0, 1)]], [cm[(1, 0)], cm[(1, 1)]]],
    };

    log::info!(
        "accuracy={:.4} precision={:.4} recall={:.4} f1={:.4}",
        evaluation.accuracy,
        evaluation.precision,
        evaluation.recall,
        evaluation.f1
    );

    Ok(evaluation)
}
