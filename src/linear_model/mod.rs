//! Linear models for binary classification.
//!
//! This module provides three independent classifiers behind the
//! [`Classifier`] contract:
//! - `LogisticRegression`: full-batch gradient descent with L2 regularization
//! - `Perceptron`: online, mistake-driven updates
//! - `LinearSvm`: online sub-gradient descent on the hinge loss
//!
//! All of them accept labels that are exactly `0.0` or `1.0`, optionally
//! scaled per class through [`ClassWeights`], and train for a fixed number of
//! epochs starting from zero weights.
//!
//! # Examples
//!
//! ## Logistic Regression
//! ```rust
//! use bowclass::{Classifier, LogisticRegression};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = LogisticRegression::new().learning_rate(0.1).epochs(2000);
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! ```
//!
//! ## Linear SVM with class weights
//! ```rust
//! use bowclass::{ClassWeights, Classifier, LinearSvm};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [2.0, 2.0], [-1.0, -1.0], [-2.0, -2.0]];
//! let y = array![1.0, 1.0, 0.0, 0.0];
//!
//! let weights = ClassWeights::new(1.0, 2.0).unwrap();
//! let mut svm = LinearSvm::new().c(0.01).class_weights(weights);
//! svm.fit(&x, &y).unwrap();
//! assert_eq!(svm.predict(&x).unwrap(), y);
//! ```

mod class_weight;
mod linear_svm;
mod logistic_regression;
mod perceptron;

pub use class_weight::{ClassWeights, Label};
pub use linear_svm::LinearSvm;
pub use logistic_regression::LogisticRegression;
pub use perceptron::Perceptron;

use crate::error::{ClassifierError, Result};
use crate::{Matrix, Vector};

/// The `{fit, predict}` contract shared by every binary classifier.
pub trait Classifier {
    /// Trains from scratch on `x` (one sample per row) and `y` (labels in
    /// `{0, 1}`), discarding anything learned by an earlier call.
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<&mut Self>;

    /// Returns one `0.0` / `1.0` label per row of `x`.
    fn predict(&self, x: &Matrix) -> Result<Vector>;

    /// Mean accuracy of `predict(x)` against `y`.
    fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let predictions = self.predict(x)?;
        crate::metrics::accuracy_score(y, &predictions)
    }
}

/// Any of the supported classifiers, dispatched by variant.
#[derive(Clone, Debug)]
pub enum AnyClassifier {
    LogisticRegression(LogisticRegression),
    Perceptron(Perceptron),
    LinearSvm(LinearSvm),
}

impl AnyClassifier {
    pub fn name(&self) -> &'static str {
        match self {
            AnyClassifier::LogisticRegression(_) => "logistic_regression",
            AnyClassifier::Perceptron(_) => "perceptron",
            AnyClassifier::LinearSvm(_) => "linear_svm",
        }
    }

    pub fn coefficients(&self) -> Option<&Vector> {
        match self {
            AnyClassifier::LogisticRegression(model) => model.coefficients(),
            AnyClassifier::Perceptron(model) => model.coefficients(),
            AnyClassifier::LinearSvm(model) => model.coefficients(),
        }
    }

    pub fn intercept(&self) -> Option<f64> {
        match self {
            AnyClassifier::LogisticRegression(model) => model.intercept(),
            AnyClassifier::Perceptron(model) => model.intercept(),
            AnyClassifier::LinearSvm(model) => model.intercept(),
        }
    }
}

impl Classifier for AnyClassifier {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<&mut Self> {
        match self {
            AnyClassifier::LogisticRegression(model) => {
                model.fit(x, y)?;
            }
            AnyClassifier::Perceptron(model) => {
                model.fit(x, y)?;
            }
            AnyClassifier::LinearSvm(model) => {
                model.fit(x, y)?;
            }
        }
        Ok(self)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        match self {
            AnyClassifier::LogisticRegression(model) => model.predict(x),
            AnyClassifier::Perceptron(model) => model.predict(x),
            AnyClassifier::LinearSvm(model) => model.predict(x),
        }
    }
}

impl From<LogisticRegression> for AnyClassifier {
    fn from(model: LogisticRegression) -> Self {
        AnyClassifier::LogisticRegression(model)
    }
}

impl From<Perceptron> for AnyClassifier {
    fn from(model: Perceptron) -> Self {
        AnyClassifier::Perceptron(model)
    }
}

impl From<LinearSvm> for AnyClassifier {
    fn from(model: LinearSvm) -> Self {
        AnyClassifier::LinearSvm(model)
    }
}

/// Validates a training set and converts its labels.
///
/// Checks run in order: sample count vs label count, empty input, then each
/// label value.
pub(crate) fn check_training_data(x: &Matrix, y: &Vector) -> Result<Vec<Label>> {
    if x.nrows() != y.len() {
        return Err(ClassifierError::shape(
            format!("{} labels", x.nrows()),
            format!("{} labels", y.len()),
        ));
    }

    if x.nrows() == 0 {
        return Err(ClassifierError::EmptyInput);
    }

    let labels = y
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Label::from_value(value).ok_or(ClassifierError::InvalidLabel { index, value })
        })
        .collect::<Result<Vec<_>>>()?;

    if labels.iter().all(|&label| label == labels[0]) {
        log::warn!(
            "training labels contain a single class ({:?}) across {} samples",
            labels[0],
            labels.len()
        );
    }

    Ok(labels)
}

/// Returns the trained weights once `x` is known to match their width.
pub(crate) fn check_features<'a>(x: &Matrix, coefficients: Option<&'a Vector>) -> Result<&'a Vector> {
    let coefficients = coefficients.ok_or(ClassifierError::NotFitted)?;

    if x.ncols() != coefficients.len() {
        return Err(ClassifierError::DimensionMismatch {
            expected: coefficients.len(),
            got: x.ncols(),
        });
    }

    Ok(coefficients)
}
