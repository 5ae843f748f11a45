//! Pauli decomposition of 2×2 Hermitian matrices and its inverse.
//!
//! Any 2×2 Hermitian `H` can be written as `r0·I + r1·X + r2·Y + r3·Z` with
//! real `rk = ½ Re Tr(H·Pk)`.

use crate::error::{PauliError, Result};
use crate::matrix::Matrix;
use crate::pauli::{GENERATORS, Generator};
use crate::ZERO;

/// Returns `[r0, r1, r2, r3]` such that `H = r0·I + r1·X + r2·Y + r3·Z`.
///
/// Only 2×2 input is accepted. The input is not checked for hermiticity; for
/// a non-Hermitian matrix the coefficients describe its Hermitian part.
pub fn decompose(h: &Matrix) -> Result<[f32; 4]> {
    if h.dim() != 2 {
        return Err(PauliError::invalid(
            "decompose",
            format!("expected a 2x2 matrix, got {0}x{0}", h.dim()),
        ));
    }
    let mut coefficients = [0.0; 4];
    coefficients[0] = 0.5 * h.trace().re();

    let mut work = h.clone();
    for generator in [Generator::X, Generator::Y, Generator::Z] {
        let pauli = Matrix::from(generator);
        work.multiply_assign(&pauli)?;
        coefficients[generator.idx()] = 0.5 * work.trace().re();
        // P·P = I restores the working copy.
        work.multiply_assign(&pauli)?;
    }
    Ok(coefficients)
}

/// Builds `r0·I + r1·X + r2·Y + r3·Z` from the four real coefficients.
pub fn compose(coefficients: [f32; 4]) -> Matrix {
    let canonical = GENERATORS.map(Generator::to_mat);
    let mut entries = [[ZERO; 2]; 2];
    for (r, row) in entries.iter_mut().enumerate() {
        for (c, entry) in row.iter_mut().enumerate() {
            *entry = canonical
                .iter()
                .zip(coefficients)
                .fold(ZERO, |acc, (mat, coeff)| acc + mat[r][c] * coeff);
        }
    }
    Matrix::from_mat2(entries)
}
