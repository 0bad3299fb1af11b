use super::{check_features, check_training_data, ClassWeights, Classifier};
use crate::error::Result;
use crate::{Matrix, Vector};

/// Rosenblatt perceptron with class-weighted, mistake-driven updates.
///
/// Samples are visited in the order given, every epoch, with no shuffling and
/// no early exit once the training set is separated.
#[derive(Clone, Debug)]
pub struct Perceptron {
    coefficients: Option<Vector>,
    intercept: Option<f64>,
    mistakes: Vec<usize>,
    learning_rate: f64,
    epochs: usize,
    class_weights: ClassWeights,
}

impl Perceptron {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            mistakes: Vec::new(),
            learning_rate: 0.01,
            epochs: 100,
            class_weights: ClassWeights::default(),
        }
    }

    pub fn with_params(learning_rate: f64, epochs: usize) -> Self {
        Self::new().learning_rate(learning_rate).epochs(epochs)
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        if epochs == 0 {
            panic!("epochs must be at least 1");
        }
        self.epochs = epochs;
        self
    }

    pub fn class_weights(mut self, class_weights: ClassWeights) -> Self {
        self.class_weights = class_weights;
        self
    }

    pub fn coefficients(&self) -> Option<&Vector> {
        self.coefficients.as_ref()
    }

    pub fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    /// Number of misclassified samples seen during each epoch of the last fit.
    pub fn mistakes_per_epoch(&self) -> &[usize] {
        &self.mistakes
    }

    /// Raw scores `X·W + b`.
    pub fn decision_function(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = check_features(x, self.coefficients.as_ref())?;
        let intercept = self.intercept.unwrap_or(0.0);
        Ok(x.dot(coeffs) + intercept)
    }
}

impl Classifier for Perceptron {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<&mut Self> {
        let labels = check_training_data(x, y)?;

        let mut weights = Vector::zeros(x.ncols());
        let mut bias = 0.0;
        let mut mistakes = Vec::with_capacity(self.epochs);

        log::debug!(
            "fitting perceptron: {} samples, {} features, {} epochs, lr={}",
            x.nrows(),
            x.ncols(),
            self.epochs,
            self.learning_rate
        );

        for epoch in 0..self.epochs {
            let mut epoch_mistakes = 0;

            for (sample, &label) in x.rows().into_iter().zip(labels.iter()) {
                let predicted = if sample.dot(&weights) + bias > 0.0 { 1.0 } else { 0.0 };
                let update = label.value() - predicted;
                if update == 0.0 {
                    continue;
                }

                epoch_mistakes += 1;
                let step = self.learning_rate * self.class_weights.get(label) * update;
                weights.scaled_add(step, &sample);
                bias += step;
            }

            log::trace!("epoch {}: {} mistakes", epoch, epoch_mistakes);
            mistakes.push(epoch_mistakes);
        }

        log::debug!(
            "perceptron fitted: {} mistakes in final epoch, b={:.6}",
            mistakes.last().copied().unwrap_or(0),
            bias
        );

        self.coefficients = Some(weights);
        self.intercept = Some(bias);
        self.mistakes = mistakes;
        Ok(self)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        let scores = self.decision_function(x)?;
        Ok(scores.mapv(|score| if score > 0.0 { 1.0 } else { 0.0 }))
    }
}

impl Default for Perceptron {
    fn default() -> Self {
        Self::new()
    }
}
