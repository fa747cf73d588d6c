//! Symmetric matrix assembly and eigenvalue extraction
//!
//! Every ligand-field block goes through the same two steps: the diagonal and the
//! upper-triangle couplings are mirrored into a dense symmetric matrix, which is then
//! diagonalized with nalgebra's symmetric QR algorithm.

extern crate nalgebra as na;

use crate::constants::{EIGEN_EPSILON, EIGEN_MAX_ITERATIONS};
use na::{DMatrix, DVector};

/// Build an `n x n` symmetric matrix from its diagonal and off-diagonal couplings.
///
/// Pairs missing from `off_diagonal` stay zero. Each `(i, j)` value is written to both
/// `M[i][j]` and `M[j][i]`.
///
/// # Panics
///
/// Panics if a coupling index lies outside the matrix.
pub fn construct_matrix<I>(diagonal: &[f64], off_diagonal: I) -> DMatrix<f64>
where
    I: IntoIterator<Item = ((usize, usize), f64)>,
{
    let size = diagonal.len();
    let mut matrix = DMatrix::zeros(size, size);
    for (i, &value) in diagonal.iter().enumerate() {
        matrix[(i, i)] = value;
    }

    for ((i, j), value) in off_diagonal {
        assert!(
            i < size && j < size,
            "off-diagonal index ({i}, {j}) out of bounds for a {size}x{size} block"
        );
        matrix[(i, j)] = value;
        matrix[(j, i)] = value;
    }

    matrix
}

/// Eigenvalues of a real symmetric matrix in ascending order.
///
/// Returns `None` when the decomposition does not converge.
pub fn eigensolver(matrix: DMatrix<f64>) -> Option<DVector<f64>> {
    assert!(matrix.is_square(), "eigensolver expects a square matrix");

    let eig = matrix.try_symmetric_eigen(EIGEN_EPSILON, EIGEN_MAX_ITERATIONS)?;
    let mut values: Vec<f64> = eig.eigenvalues.iter().copied().collect();
    values.sort_by(|a, b| a.total_cmp(b));

    Some(DVector::from_vec(values))
}
