//! Scores for binary predictions, with class `1` as the positive class.

use crate::error::{ClassifierError, Result};
use crate::linear_model::Label;
use crate::{Array2, Vector};

fn label_pairs(y_true: &Vector, y_pred: &Vector) -> Result<Vec<(Label, Label)>> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::shape(
            format!("{} predictions", y_true.len()),
            format!("{} predictions", y_pred.len()),
        ));
    }

    let to_label = |index: usize, value: f64| {
        Label::from_value(value).ok_or(ClassifierError::InvalidLabel { index, value })
    };

    y_true
        .iter()
        .zip(y_pred.iter())
        .enumerate()
        .map(|(i, (&t, &p))| -> Result<(Label, Label)> {
            Ok((to_label(i, t)?, to_label(i, p)?))
        })
        .collect()
}

/// Returns `[[TN, FP], [FN, TP]]`.
pub fn confusion_matrix(y_true: &Vector, y_pred: &Vector) -> Result<Array2<usize>> {
    let mut matrix = Array2::zeros((2, 2));

    for (actual, predicted) in label_pairs(y_true, y_pred)? {
        let row = (actual == Label::Positive) as usize;
        let col = (predicted == Label::Positive) as usize;
        matrix[(row, col)] += 1;
    }

    Ok(matrix)
}

pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let pairs = label_pairs(y_true, y_pred)?;
    if pairs.is_empty() {
        return Err(ClassifierError::EmptyInput);
    }

    let correct = pairs.iter().filter(|(t, p)| t == p).count();
    Ok(correct as f64 / pairs.len() as f64)
}

/// `TP / (TP + FP)`; 0.0 when nothing was predicted positive.
pub fn precision_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let cm = confusion_matrix(y_true, y_pred)?;
    Ok(ratio("precision", cm[(1, 1)], cm[(1, 1)] + cm[(0, 1)]))
}

/// `TP / (TP + FN)`; 0.0 when there are no positive samples.
pub fn recall_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let cm = confusion_matrix(y_true, y_pred)?;
    Ok(ratio("recall", cm[(1, 1)], cm[(1, 1)] + cm[(1, 0)]))
}

pub fn f1_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let cm = confusion_matrix(y_true, y_pred)?;
    let tp = cm[(1, 1)];
    Ok(ratio("f1", 2 * tp, 2 * tp + cm[(0, 1)] + cm[(1, 0)]))
}

fn ratio(metric: &str, numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        log::warn!("{} is ill-defined with a zero denominator, using 0.0", metric);
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
