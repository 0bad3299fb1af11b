//! Serializable hyperparameters for building a classifier at runtime.
//!
//! ```rust
//! use bowclass::ModelConfig;
//!
//! let config = ModelConfig::from_json(
//!     r#"{"model": "linear_svm", "learning_rate": 0.01, "C": 0.1, "class_weight": {"1": 3.0}}"#,
//! )
//! .unwrap();
//! let model = config.build().unwrap();
//! assert_eq!(model.name(), "linear_svm");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};
use crate::linear_model::{AnyClassifier, ClassWeights, LinearSvm, LogisticRegression, Perceptron};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticRegressionConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub lam: f64,
    pub class_weight: ClassWeights,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 1000,
            lam: 0.0,
            class_weight: ClassWeights::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub class_weight: ClassWeights,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 100,
            class_weight: ClassWeights::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearSvmConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    #[serde(rename = "C", alias = "c")]
    pub c: f64,
    pub class_weight: ClassWeights,
}

impl Default for LinearSvmConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            epochs: 1000,
            c: 1.0,
            class_weight: ClassWeights::default(),
        }
    }
}

/// Which classifier to build, tagged by the `"model"` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelConfig {
    LogisticRegression(LogisticRegressionConfig),
    Perceptron(PerceptronConfig),
    LinearSvm(LinearSvmConfig),
}

impl ModelConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ModelConfig::LogisticRegression(cfg) => {
                check_learning_rate(cfg.learning_rate)?;
                check_epochs(cfg.epochs)?;
                check_penalty("lam", cfg.lam)
            }
            ModelConfig::Perceptron(cfg) => {
                check_learning_rate(cfg.learning_rate)?;
                check_epochs(cfg.epochs)
            }
            ModelConfig::LinearSvm(cfg) => {
                check_learning_rate(cfg.learning_rate)?;
                check_epochs(cfg.epochs)?;
                check_penalty("C", cfg.c)
            }
        }
    }

    pub fn build(&self) -> Result<AnyClassifier> {
        self.validate()?;

        let model: AnyClassifier = match self {
            ModelConfig::LogisticRegression(cfg) => {
                LogisticRegression::with_params(cfg.learning_rate, cfg.epochs, cfg.lam)
                    .class_weights(cfg.class_weight)
                    .into()
            }
            ModelConfig::Perceptron(cfg) => Perceptron::with_params(cfg.learning_rate, cfg.epochs)
                .class_weights(cfg.class_weight)
                .into(),
            ModelConfig::LinearSvm(cfg) => LinearSvm::with_params(cfg.learning_rate, cfg.epochs, cfg.c)
                .class_weights(cfg.class_weight)
                .into(),
        };

        Ok(model)
    }
}

fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(ClassifierError::hyperparameter("learning_rate", learning_rate));
    }
    Ok(())
}

fn check_epochs(epochs: usize) -> Result<()> {
    if epochs == 0 {
        return Err(ClassifierError::hyperparameter("epochs", epochs));
    }
    Ok(())
}

fn check_penalty(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ClassifierError::hyperparameter(name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::Classifier;
    use ndarray::array;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::from_json(r#"{"model": "logistic_regression"}"#).unwrap();
        assert_eq!(
            config,
            ModelConfig::LogisticRegression(LogisticRegressionConfig::default())
        );

        let config = ModelConfig::from_json(r#"{"model": "perceptron", "epochs": 5}"#).unwrap();
        match config {
            ModelConfig::Perceptron(cfg) => {
                assert_eq!(cfg.epochs, 5);
                assert_eq!(cfg.learning_rate, 0.01);
            }
            other => panic!("unexpected config {:?}", other),
        }
    }

    #[test]
    fn test_svm_config() {
        let config = ModelConfig::from_json(
            r#"{"model": "linear_svm", "C": 0.5, "class_weight": {"0": 1.0, "1": 5.0}}"#,
        )
        .unwrap();

        match &config {
            ModelConfig::LinearSvm(cfg) => {
                assert_eq!(cfg.c, 0.5);
                assert_eq!(cfg.learning_rate, 0.001);
                assert_eq!(cfg.class_weight, ClassWeights::new(1.0, 5.0).unwrap());
            }
            other => panic!("unexpected config {:?}", other),
        }

        let mut model = config.build().unwrap();
        let x = array![[1.0, 1.0], [-1.0, -1.0]];
        let y = array![1.0, 0.0];
        assert_eq!(model.fit(&x, &y).unwrap().predict(&x).unwrap(), y);
    }

    #[test]
    fn test_rejects_unknown_class_weight() {
        let err = ModelConfig::from_json(
            r#"{"model": "perceptron", "class_weight": {"0": 1.0, "2": 5.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_model() {
        assert!(ModelConfig::from_json(r#"{"model": "random_forest"}"#).is_err());
    }

    #[test]
    fn test_validate() {
        let bad = [
            r#"{"model": "logistic_regression", "learning_rate": 0.0}"#,
            r#"{"model": "logistic_regression", "lam": -0.1}"#,
            r#"{"model": "perceptron", "epochs": 0}"#,
            r#"{"model": "linear_svm", "C": -1.0}"#,
        ];

        for json in bad {
            assert!(
                matches!(
                    ModelConfig::from_json(json),
                    Err(ClassifierError::InvalidHyperparameter { .. })
                ),
                "{} should be rejected",
                json
            );
        }
    }

    #[test]
    fn test_build_rejects_invalid_without_panicking() {
        let config = ModelConfig::Perceptron(PerceptronConfig {
            learning_rate: -1.0,
            ..PerceptronConfig::default()
        });
        assert!(config.build().is_err());
    }
}
