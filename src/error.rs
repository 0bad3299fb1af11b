use thiserror::Error;

/// Errors surfaced by training, prediction and the surrounding pipeline.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Label count differs from sample count, or feature rows are ragged.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// The training set contains zero samples.
    #[error("training data contains no samples")]
    EmptyInput,

    /// Prediction input width differs from the trained weight vector.
    #[error("number of features in X ({got}) doesn't match training data ({expected})")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model used before a successful `fit`.
    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("label {value} at index {index} is not 0 or 1")]
    InvalidLabel { index: usize, value: f64 },

    #[error("invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: String },

    #[error("unknown class: {0}")]
    UnknownClass(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ClassifierError {
    pub(crate) fn shape(expected: impl ToString, got: impl ToString) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub(crate) fn hyperparameter(name: &str, value: impl ToString) -> Self {
        Self::InvalidHyperparameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
