use crate::error::{ClassifierError, Result};
use crate::Matrix;

/// Builds a feature matrix from row-major input, rejecting ragged rows.
///
/// An empty slice yields a `0 x 0` matrix; `fit` rejects it as empty input.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    let n_features = rows.first().map_or(0, Vec::len);

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_features {
            return Err(ClassifierError::shape(
                format!("{} features in every row", n_features),
                format!("{} features in row {}", row.len(), i),
            ));
        }
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Matrix::from_shape_vec((rows.len(), n_features), flat)
        .map_err(|e| ClassifierError::shape(format!("{} x {}", rows.len(), n_features), e))
}
