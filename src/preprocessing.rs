use ndarray::Axis;

use crate::error::{ClassifierError, Result};
use crate::{Matrix, Vector};

/// Standardizes each feature column to zero mean and unit variance.
///
/// Columns with (near) zero variance are only centred.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        let mean = data.mean_axis(Axis(0)).ok_or(ClassifierError::EmptyInput)?;
        let std = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 1e-10 { s } else { 1.0 });

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let (mean, std) = match (self.mean.as_ref(), self.std.as_ref()) {
            (Some(mean), Some(std)) => (mean, std),
            _ => return Err(ClassifierError::NotFitted),
        };

        if data.ncols() != mean.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: mean.len(),
                got: data.ncols(),
            });
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }
}
