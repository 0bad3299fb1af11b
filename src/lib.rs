//! Binary linear classifiers for telling two instrument classes apart from
//! fixed-length audio feature vectors.
//!
//! Three models share the [`Classifier`] contract: gradient-descent
//! [`LogisticRegression`], the online [`Perceptron`] and a sub-gradient
//! [`LinearSvm`]. Each works directly on an ndarray weight vector and bias.
//!
//! ```rust
//! use bowclass::{Classifier, Perceptron};
//! use ndarray::array;
//!
//! let x = array![[2.0, 2.0], [3.0, 3.0], [-2.0, -2.0], [-3.0, -3.0]];
//! let y = array![1.0, 1.0, 0.0, 0.0];
//!
//! let mut model = Perceptron::new();
//! model.fit(&x, &y).unwrap();
//! assert_eq!(model.predict(&x).unwrap(), y);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;
pub mod utils;

pub use config::ModelConfig;
pub use dataset::Dataset;
pub use error::{ClassifierError, Result};
pub use evaluation::{Evaluation, train_test_split_and_evaluate};
pub use linear_model::{
    AnyClassifier, ClassWeights, Classifier, Label, LinearSvm, LogisticRegression, Perceptron,
};
pub use preprocessing::StandardScaler;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
