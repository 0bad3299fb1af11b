use super::{check_features, check_training_data, ClassWeights, Classifier, Label};
use crate::error::{ClassifierError, Result};
use crate::{Matrix, Vector};

/// Linear SVM trained by per-sample sub-gradient descent on the hinge loss.
///
/// Labels are mapped to `{-1, +1}` internally. A sample whose margin
/// `y · (x·W + b)` is below 1 pulls the hyperplane towards itself, scaled by
/// its class weight; every sample applies the `C · ||W||²` shrinkage.
#[derive(Clone, Debug)]
pub struct LinearSvm {
    coefficients: Option<Vector>,
    intercept: Option<f64>,
    learning_rate: f64,
    epochs: usize,
    c: f64,
    class_weights: ClassWeights,
}

impl LinearSvm {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            learning_rate: 0.001,
            epochs: 1000,
            c: 1.0,
            class_weights: ClassWeights::default(),
        }
    }

    pub fn with_params(learning_rate: f64, epochs: usize, c: f64) -> Self {
        Self::new().learning_rate(learning_rate).epochs(epochs).c(c)
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

    pub fn c(mut self, c: f64) -> Self {
        if c < 0.0 {
            panic!("C must be non-negative, got {}", c);
        }
        self.c = c;
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

    pub fn decision_function(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = check_features(x, self.coefficients.as_ref())?;
        let intercept = self.intercept.unwrap_or(0.0);
        Ok(x.dot(coeffs) + intercept)
    }

    /// Functional margins `y_mod · (x·W + b)` of labelled samples.
    pub fn margins(&self, x: &Matrix, y: &Vector) -> Result<Vector> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::shape(
                format!("{} labels", x.nrows()),
                format!("{} labels", y.len()),
            ));
        }

        let scores = self.decision_function(x)?;
        let signs = y
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Label::from_value(value)
                    .map(Label::sign)
                    .ok_or(ClassifierError::InvalidLabel { index, value })
            })
            .collect::<Result<Vector>>()?;

        Ok(scores * signs)
    }

    fn objective(&self, x: &Matrix, labels: &[Label], weights: &Vector, bias: f64) -> f64 {
        let hinge = x
            .rows()
            .into_iter()
            .zip(labels.iter())
            .map(|(sample, &label)| {
                let margin = label.sign() * (sample.dot(weights) + bias);
                self.class_weights.get(label) * (1.0 - margin).max(0.0)
            })
            .sum::<f64>();

        hinge / labels.len() as f64 + self.c * weights.dot(weights)
    }
}

impl Classifier for LinearSvm {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<&mut Self> {
        let labels = check_training_data(x, y)?;

        let mut weights = Vector::zeros(x.ncols());
        let mut bias = 0.0;

        log::debug!(
            "fitting linear svm: {} samples, {} features, {} epochs, lr={}, C={}",
            x.nrows(),
            x.ncols(),
            self.epochs,
            self.learning_rate,
            self.c
        );

        for epoch in 0..self.epochs {
            for (sample, &label) in x.rows().into_iter().zip(labels.iter()) {
                let sign = label.sign();
                let margin = sign * (sample.dot(&weights) + bias);

                // Shrinkage uses W from before this sample's hinge step.
                weights *= 1.0 - 2.0 * self.learning_rate * self.c;

                if margin < 1.0 {
                    let class_weight = self.class_weights.get(label);
                    weights.scaled_add(self.learning_rate * sign * class_weight, &sample);
                    bias += self.learning_rate * sign * class_weight;
                }
            }

            if log::log_enabled!(log::Level::Trace) {
                let objective = self.objective(x, &labels, &weights, bias);
                log::trace!("epoch {}: weighted hinge objective {:.6}", epoch, objective);
            }
        }

        log::debug!(
            "linear svm fitted: |W|={:.6}, b={:.6}",
            weights.dot(&weights).sqrt(),
            bias
        );

        self.coefficients = Some(weights);
        self.intercept = Some(bias);
        Ok(self)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        let scores = self.decision_function(x)?;
        Ok(scores.mapv(|score| if score >= 0.0 { 1.0 } else { 0.0 }))
    }
}

impl Default for LinearSvm {
    fn default() -> Self {
        Self::new()
    }
}
