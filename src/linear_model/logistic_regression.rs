use super::{check_features, check_training_data, ClassWeights, Classifier};
use crate::error::Result;
use crate::{Matrix, Vector};

/// Binary logistic regression trained by full-batch gradient descent.
///
/// Each epoch takes one step along the class-weighted log-loss gradient plus
/// an L2 penalty of `lam * ||W||²` on the weights (the bias is not penalized).
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    coefficients: Option<Vector>,
    intercept: Option<f64>,
    learning_rate: f64,
    epochs: usize,
    lam: f64,
    class_weights: ClassWeights,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            learning_rate: 0.01,
            epochs: 1000,
            lam: 0.0,
            class_weights: ClassWeights::default(),
        }
    }

    pub fn with_params(learning_rate: f64, epochs: usize, lam: f64) -> Self {
        Self::new().learning_rate(learning_rate).epochs(epochs).lam(lam)
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

    pub fn lam(mut self, lam: f64) -> Self {
        if lam < 0.0 {
            panic!("lam must be non-negative, got {}", lam);
        }
        self.lam = lam;
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

    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = check_features(x, self.coefficients.as_ref())?;
        let intercept = self.intercept.unwrap_or(0.0);

        let linear_combination = x.dot(coeffs) + intercept;
        Ok(linear_combination.mapv(Self::sigmoid))
    }

    /// Logistic function split on the sign of `z` so `exp` never overflows.
    pub fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    fn weighted_log_loss(y_true: &Vector, y_pred: &Vector, sample_weights: &Vector) -> f64 {
        let epsilon = 1e-15;

        let loss = y_true
            .iter()
            .zip(y_pred.iter())
            .zip(sample_weights.iter())
            .map(|((&y, &p), &w)| {
                let p = p.clamp(epsilon, 1.0 - epsilon);
                w * (-y * p.ln() - (1.0 - y) * (1.0 - p).ln())
            })
            .sum::<f64>();

        loss / y_true.len() as f64
    }
}

impl Classifier for LogisticRegression {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<&mut Self> {
        let labels = check_training_data(x, y)?;

        let n_samples = x.nrows() as f64;
        let sample_weights: Vector = labels
            .iter()
            .map(|&label| self.class_weights.get(label))
            .collect();

        let mut weights = Vector::zeros(x.ncols());
        let mut bias = 0.0;

        log::debug!(
            "fitting logistic regression: {} samples, {} features, {} epochs, lr={}, lam={}",
            x.nrows(),
            x.ncols(),
            self.epochs,
            self.learning_rate,
            self.lam
        );

        for epoch in 0..self.epochs {
            let probabilities = (x.dot(&weights) + bias).mapv(Self::sigmoid);

            if log::log_enabled!(log::Level::Trace) {
                let loss = Self::weighted_log_loss(y, &probabilities, &sample_weights);
                log::trace!("epoch {}: weighted log loss {:.6}", epoch, loss);
            }

            let weighted_error = (&probabilities - y) * &sample_weights;
            let gradient = x.t().dot(&weighted_error) / n_samples + &weights * (2.0 * self.lam);
            let gradient_bias = weighted_error.sum() / n_samples;

            weights.scaled_add(-self.learning_rate, &gradient);
            bias -= self.learning_rate * gradient_bias;
        }

        log::debug!(
            "logistic regression fitted: |W|={:.6}, b={:.6}",
            weights.dot(&weights).sqrt(),
            bias
        );

        self.coefficients = Some(weights);
        self.intercept = Some(bias);
        Ok(self)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifierError;
    use ndarray::array;

    fn norm(v: &Vector) -> f64 {
        v.dot(v).sqrt()
    }

    #[test]
    fn test_logistic_regression_simple() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];

        let mut model = LogisticRegression::with_params(0.1, 2000, 0.0);
        model.fit(&x, &y).unwrap();

        let predictions = model.predict(&x).unwrap();
        let probabilities = model.predict_proba(&x).unwrap();

        assert_eq!(predictions, y);
        assert_eq!(probabilities.len(), 4);
        assert!(probabilities[0] < 0.5);
        assert!(probabilities[3] > 0.5);
    }

    #[test]
    fn test_first_step_matches_gradient() {
        // With W = 0 and b = 0 every probability is 0.5, so one epoch moves
        // W by lr * mean((y - 0.5) * x).
        let x = array![[1.0, 2.0], [3.0, -1.0]];
        let y = array![1.0, 0.0];

        let mut model = LogisticRegression::with_params(0.5, 1, 0.0);
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients().unwrap();
        assert!((coeffs[0] - (-0.25)).abs() < 1e-12);
        assert!((coeffs[1] - 0.375).abs() < 1e-12);
        assert!(model.intercept().unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_function() {
        assert!((LogisticRegression::sigmoid(0.0) - 0.5).abs() < 1e-10);

        for z in [1000.0, -1000.0, 745.0, -745.0, 1e308, -1e308] {
            let p = LogisticRegression::sigmoid(z);
            assert!(!p.is_nan(), "sigmoid({}) is NaN", z);
            assert!((0.0..=1.0).contains(&p), "sigmoid({}) = {}", z, p);
        }

        assert!(LogisticRegression::sigmoid(1000.0) > 0.99);
        assert!(LogisticRegression::sigmoid(-1000.0) < 0.01);
    }

    #[test]
    fn test_fit_returns_trained_handle() {
        let x = array![[1.0], [-1.0]];
        let y = array![1.0, 0.0];

        let mut model = LogisticRegression::new();
        let predictions = model.fit(&x, &y).unwrap().predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn test_logistic_regression_invalid_labels() {
        let x = array![[1.0], [2.0]];
        let y = array![0.5, 2.0];

        let mut model = LogisticRegression::new();
        assert!(matches!(
            model.fit(&x, &y),
            Err(ClassifierError::InvalidLabel { index: 0, .. })
        ));
    }

    #[test]
    fn test_logistic_regression_shape_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![0.0, 1.0, 1.0];

        let mut model = LogisticRegression::new();
        assert!(matches!(
            model.fit(&x, &y),
            Err(ClassifierError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_logistic_regression_empty_input() {
        let x = Matrix::zeros((0, 3));
        let y = Vector::zeros(0);

        let mut model = LogisticRegression::new();
        assert!(matches!(model.fit(&x, &y), Err(ClassifierError::EmptyInput)));
        assert!(model.coefficients().is_none());
    }

    #[test]
    fn test_logistic_regression_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = LogisticRegression::new();

        assert!(matches!(model.predict(&x), Err(ClassifierError::NotFitted)));
        assert!(matches!(model.predict_proba(&x), Err(ClassifierError::NotFitted)));
    }

    #[test]
    fn test_logistic_regression_dimension_mismatch() {
        let x = array![[1.0, 0.0], [-1.0, 0.0]];
        let y = array![1.0, 0.0];

        let mut model = LogisticRegression::new();
        model.fit(&x, &y).unwrap();

        assert!(matches!(
            model.predict(&array![[1.0, 0.0, 0.0]]),
            Err(ClassifierError::DimensionMismatch { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn test_class_weights_change_parameters() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];

        let mut balanced = LogisticRegression::with_params(0.1, 10, 0.0);
        balanced.fit(&x, &y).unwrap();

        let mut weighted = LogisticRegression::with_params(0.1, 10, 0.0)
            .class_weights(ClassWeights::new(1.0, 5.0).unwrap());
        weighted.fit(&x, &y).unwrap();

        assert_ne!(balanced.coefficients(), weighted.coefficients());
        assert_ne!(balanced.intercept(), weighted.intercept());
        // Heavier positives pull the decision boundary towards the negatives.
        assert!(weighted.intercept().unwrap() > balanced.intercept().unwrap());
    }

    #[test]
    fn test_regularization_shrinks_weights() {
        let x = array![[1.0, 0.5], [2.0, 1.0], [3.0, 2.5], [4.0, 3.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];

        let norms: Vec<f64> = [0.0, 0.1, 1.0]
            .iter()
            .map(|&lam| {
                let mut model = LogisticRegression::with_params(0.1, 500, lam);
                model.fit(&x, &y).unwrap();
                norm(model.coefficients().unwrap())
            })
            .collect();

        assert!(norms[0] > norms[1], "{:?}", norms);
        assert!(norms[1] > norms[2], "{:?}", norms);
    }

    #[test]
    fn test_separable_four_features() {
        let x = array![
            [1.0, 2.0, 1.0, 0.5],
            [2.0, 1.0, 1.5, 1.0],
            [1.5, 1.5, 2.0, 1.0],
            [2.0, 2.0, 1.0, 1.5],
            [-1.0, -2.0, -1.0, -0.5],
            [-2.0, -1.0, -1.5, -1.0],
            [-1.5, -1.5, -2.0, -1.0],
            [-2.0, -2.0, -1.0, -1.5]
        ];
        let y = array![1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];

        let mut model = LogisticRegression::with_params(0.1, 500, 0.0);
        model.fit(&x, &y).unwrap();

        assert_eq!(model.predict(&x).unwrap(), y);
        assert_eq!(model.score(&x, &y).unwrap(), 1.0);
    }

    #[test]
    #[should_panic(expected = "learning_rate must be positive")]
    fn test_invalid_learning_rate() {
        LogisticRegression::new().learning_rate(0.0);
    }

    #[test]
    #[should_panic(expected = "lam must be non-negative")]
    fn test_invalid_lam() {
        LogisticRegression::new().lam(-1.0);
    }
}
