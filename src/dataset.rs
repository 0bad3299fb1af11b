use std::collections::BTreeMap;

use ndarray::{s, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ClassifierError, Result};
use crate::linear_model::Label;
use crate::utils::matrix_from_rows;
use crate::{Matrix, Vector};

/// Feature rows paired with binary labels.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(ClassifierError::shape(
                format!("{} labels", features.nrows()),
                format!("{} labels", labels.len()),
            ));
        }

        for (index, &value) in labels.iter().enumerate() {
            if Label::from_value(value).is_none() {
                return Err(ClassifierError::InvalidLabel { index, value });
            }
        }

        Ok(Self { features, labels })
    }

    pub fn from_rows(rows: &[Vec<f64>], labels: Vec<f64>) -> Result<Self> {
        Self::new(matrix_from_rows(rows)?, Vector::from(labels))
    }

    /// Builds a dataset from exactly two named categories of feature rows.
    ///
    /// Categories are labelled in alphabetical order, so the first name gets
    /// label 0 and the second label 1. The names are returned in that order.
    pub fn from_categories(categories: &BTreeMap<String, Vec<Vec<f64>>>) -> Result<(Self, Vec<String>)> {
        if categories.len() != 2 {
            return Err(ClassifierError::shape(
                "2 categories",
                format!("{} categories", categories.len()),
            ));
        }

        let mut rows = Vec::new();
        let mut labels = Vec::new();
        let mut names = Vec::with_capacity(2);

        for (label, (name, samples)) in categories.iter().enumerate() {
            log::debug!("category {:?} -> label {} ({} samples)", name, label, samples.len());
            rows.extend(samples.iter().cloned());
            labels.extend(std::iter::repeat(label as f64).take(samples.len()));
            names.push(name.clone());
        }

        Ok((Self::from_rows(&rows, labels)?, names))
    }

    /// Two uniform-noise blobs centred at `+separation` (label 1) and
    /// `-separation` (label 0) along every feature.
    pub fn synthetic(n_per_class: usize, n_features: usize, separation: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Uniform::new(-1.0, 1.0);

        let mut features = Matrix::random_using((2 * n_per_class, n_features), noise, &mut rng);
        features
            .slice_mut(s![..n_per_class, ..])
            .mapv_inplace(|v| v + separation);
        features
            .slice_mut(s![n_per_class.., ..])
            .mapv_inplace(|v| v - separation);

        let labels = Vector::from_iter(
            std::iter::repeat(1.0)
                .take(n_per_class)
                .chain(std::iter::repeat(0.0).take(n_per_class)),
        );

        Self { features, labels }
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// `(negatives, positives)`.
    pub fn class_counts(&self) -> (usize, usize) {
        let positives = self.labels.iter().filter(|&&l| l == 1.0).count();
        (self.labels.len() - positives, positives)
    }

    /// Stratified, shuffled split. Each class contributes
    /// `round(count * test_size)` samples to the test side.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(ClassifierError::hyperparameter("test_size", test_size));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut train_idx = Vec::new();
        let mut test_idx = Vec::new();

        for class in [0.0, 1.0] {
            let mut idx: Vec<usize> = (0..self.n_samples())
                .filter(|&i| self.labels[i] == class)
                .collect();
            idx.shuffle(&mut rng);

            let n_test = (idx.len() as f64 * test_size).round() as usize;
            test_idx.extend_from_slice(&idx[..n_test]);
            train_idx.extend_from_slice(&idx[n_test..]);
        }

        if train_idx.is_empty() || test_idx.is_empty() {
            return Err(ClassifierError::hyperparameter(
                "test_size",
                format!("{} leaves an empty split of {} samples", test_size, self.n_samples()),
            ));
        }

        train_idx.shuffle(&mut rng);
        test_idx.shuffle(&mut rng);

        Ok((self.subset(&train_idx), self.subset(&test_idx)))
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![1.0, 0.0, 1.0];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
        assert_eq!(dataset.class_counts(), (1, 2));
    }

    #[test]
    fn test_dataset_rejects_bad_input() {
        assert!(matches!(
            Dataset::new(array![[1.0], [2.0]], array![1.0]),
            Err(ClassifierError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            Dataset::new(array![[1.0], [2.0]], array![1.0, 2.0]),
            Err(ClassifierError::InvalidLabel { index: 1, .. })
        ));
        assert!(matches!(
            Dataset::from_rows(&[vec![1.0, 2.0], vec![3.0]], vec![0.0, 1.0]),
            Err(ClassifierError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_categories() {
        let mut categories = BTreeMap::new();
        categories.insert("violin".to_string(), vec![vec![1.0, 1.0], vec![2.0, 2.0]]);
        categories.insert("viola".to_string(), vec![vec![-1.0, -1.0]]);

        let (dataset, names) = Dataset::from_categories(&categories).unwrap();
        assert_eq!(names, vec!["viola".to_string(), "violin".to_string()]);
        assert_eq!(dataset.labels, array![0.0, 1.0, 1.0]);
        assert_eq!(dataset.features.row(0), array![-1.0, -1.0]);
    }

    #[test]
    fn test_from_categories_requires_two() {
        let mut categories = BTreeMap::new();
        categories.insert("violin".to_string(), vec![vec![1.0]]);
        assert!(Dataset::from_categories(&categories).is_err());

        categories.insert("viola".to_string(), vec![vec![2.0]]);
        categories.insert("cello".to_string(), vec![vec![3.0]]);
        assert!(Dataset::from_categories(&categories).is_err());
    }

    #[test]
    fn test_train_test_split_is_stratified() {
        let dataset = Dataset::synthetic(50, 5, 2.0, 7);
        let (train, test) = dataset.train_test_split(0.2, 42).unwrap();

        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);
        assert_eq!(train.class_counts(), (40, 40));
        assert_eq!(test.class_counts(), (10, 10));
    }

    #[test]
    fn test_train_test_split_is_seeded() {
        let dataset = Dataset::synthetic(20, 3, 1.0, 1);

        let (a_train, a_test) = dataset.train_test_split(0.25, 42).unwrap();
        let (b_train, b_test) = dataset.train_test_split(0.25, 42).unwrap();
        assert_eq!(a_train.features, b_train.features);
        assert_eq!(a_test.labels, b_test.labels);
    }

    #[test]
    fn test_train_test_split_invalid_size() {
        let dataset = Dataset::synthetic(2, 2, 1.0, 1);
        assert!(dataset.train_test_split(0.0, 1).is_err());
        assert!(dataset.train_test_split(1.0, 1).is_err());
        // One sample per class rounds to an empty test side.
        let tiny = Dataset::synthetic(1, 2, 1.0, 1);
        assert!(tiny.train_test_split(0.2, 1).is_err());
    }

    #[test]
    fn test_synthetic_blobs() {
        let dataset = Dataset::synthetic(10, 4, 3.0, 3);
        assert_eq!(dataset.features.shape(), &[20, 4]);
        assert_eq!(dataset.class_counts(), (10, 10));

        for (row, &label) in dataset.features.rows().into_iter().zip(dataset.labels.iter()) {
            if label == 1.0 {
                assert!(row.iter().all(|&v| v > 1.0));
            } else {
                assert!(row.iter().all(|&v| v < -1.0));
            }
        }
    }
}
