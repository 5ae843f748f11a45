//! Dense complex square matrices.

use core::ops::Mul;

use crate::error::{PauliError, Result};
use crate::{Cpx, ONE, ZERO};

/// A dense square matrix of complex entries, stored row-major.
///
/// Entry `(r, c)` lives at `r * cols + c`. Equality is exact: two matrices are
/// equal when their dimensions match and every entry compares equal, with no
/// tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    entries: Vec<Cpx>,
}

impl Matrix {
    /// Constructs a zero-filled `rows`×`cols` matrix.
    ///
    /// Only square shapes with at least one row are accepted.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows != cols {
            return Err(PauliError::invalid(
                "Matrix::new",
                format!("requested {rows}x{cols}, only square matrices are supported"),
            ));
        }
        if rows == 0 {
            return Err(PauliError::invalid(
                "Matrix::new",
                "a matrix needs at least one row",
            ));
        }
        Ok(Self::zeros(rows))
    }

    /// Constructs the `dim`×`dim` identity matrix.
    pub fn identity(dim: usize) -> Result<Self> {
        let mut m = Self::new(dim, dim)?;
        for k in 0..dim {
            m.entries[k * dim + k] = ONE;
        }
        Ok(m)
    }

    /// Constructs a matrix from row-major entries; `entries.len()` must be `dim * dim`.
    pub fn from_entries(dim: usize, entries: Vec<Cpx>) -> Result<Self> {
        if dim == 0 || entries.len() != dim * dim {
            return Err(PauliError::invalid(
                "Matrix::from_entries",
                format!(
                    "{} entries cannot fill a {dim}x{dim} matrix",
                    entries.len()
                ),
            ));
        }
        Ok(Self { dim, entries })
    }

    /// Constructs a matrix from an array of rows.
    pub fn from_rows<const N: usize>(rows: [[Cpx; N]; N]) -> Result<Self> {
        Self::from_entries(N, rows.into_iter().flatten().collect())
    }

    pub(crate) fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: vec![ZERO; dim * dim],
        }
    }

    pub(crate) fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> Cpx) -> Self {
        let mut entries = Vec::with_capacity(dim * dim);
        for r in 0..dim {
            for c in 0..dim {
                entries.push(f(r, c));
            }
        }
        Self { dim, entries }
    }

    pub(crate) fn from_mat2(mat: [[Cpx; 2]; 2]) -> Self {
        Self {
            dim: 2,
            entries: vec![mat[0][0], mat[0][1], mat[1][0], mat[1][1]],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dim
    }
    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dim
    }
    /// Side length of the square matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }
    /// Row-major view of the entries.
    pub fn entries(&self) -> &[Cpx] {
        &self.entries
    }

    fn offset(&self, op: &'static str, row: usize, col: usize) -> Result<usize> {
        if row >= self.dim || col >= self.dim {
            return Err(PauliError::OutOfRange {
                op,
                row,
                col,
                rows: self.dim,
                cols: self.dim,
            });
        }
        Ok(row * self.dim + col)
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cpx> {
        let idx = self.offset("Matrix::get", row, col)?;
        Ok(self.entries[idx])
    }

    /// Overwrites the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Cpx) -> Result<()> {
        let idx = self.offset("Matrix::set", row, col)?;
        self.entries[idx] = value;
        Ok(())
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Cpx {
        (0..self.dim).fold(ZERO, |acc, k| acc + self.entries[k * self.dim + k])
    }

    /// Replaces the matrix by its conjugate transpose.
    pub fn conjugate_transpose(&mut self) {
        let n = self.dim;
        for r in 0..n {
            for c in r..n {
                let upper = self.entries[r * n + c].conj();
                let lower = self.entries[c * n + r].conj();
                self.entries[r * n + c] = lower;
                self.entries[c * n + r] = upper;
            }
        }
    }

    /// Returns the conjugate transpose, leaving `self` untouched.
    pub fn dagger(&self) -> Matrix {
        let mut out = self.clone();
        out.conjugate_transpose();
        out
    }

    /// Checks whether the matrix equals its own conjugate transpose.
    pub fn is_hermitian(&self) -> bool {
        *self == self.dagger()
    }

    /// Returns the matrix product `self · other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.dim != other.dim {
            return Err(PauliError::dimension_mismatch(
                "Matrix::multiply",
                self.dim,
                other.dim,
            ));
        }
        Ok(self.product(other))
    }

    /// Dense product; callers guarantee equal dimensions.
    pub(crate) fn product(&self, other: &Matrix) -> Matrix {
        let n = self.dim;
        let mut entries = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                let mut acc = ZERO;
                for s in 0..n {
                    acc += self.entries[r * n + s] * other.entries[s * n + c];
                }
                entries.push(acc);
            }
        }
        Matrix { dim: n, entries }
    }

    /// Replaces `self` by `self · other`.
    ///
    /// The product is built in full before it replaces the receiver, so on
    /// error `self` is left unchanged.
    pub fn multiply_assign(&mut self, other: &Matrix) -> Result<()> {
        *self = self.multiply(other)?;
        Ok(())
    }

    /// Returns the entrywise sum `self + other`.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix> {
        if self.dim != other.dim {
            return Err(PauliError::dimension_mismatch(
                "Matrix::checked_add",
                self.dim,
                other.dim,
            ));
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| *a + *b)
            .collect();
        Ok(Matrix {
            dim: self.dim,
            entries,
        })
    }

    /// Returns every entry multiplied by `scalar`.
    pub fn scale(&self, scalar: Cpx) -> Matrix {
        Matrix {
            dim: self.dim,
            entries: self.entries.iter().map(|e| *e * scalar).collect(),
        }
    }

    /// Kronecker (tensor) product `self ⊗ other`.
    ///
    /// Entry `(r·n₂ + r₂, c·n₂ + c₂)` of the result is `self(r, c) · other(r₂, c₂)`.
    pub fn kron(&self, other: &Matrix) -> Matrix {
        let (n1, n2) = (self.dim, other.dim);
        let dim = n1 * n2;
        let mut out = Matrix::zeros(dim);
        for r in 0..n1 {
            for c in 0..n1 {
                let a = self.entries[r * n1 + c];
                for r2 in 0..n2 {
                    for c2 in 0..n2 {
                        out.entries[(r * n2 + r2) * dim + c * n2 + c2] =
                            a * other.entries[r2 * n2 + c2];
                    }
                }
            }
        }
        out
    }
}

impl Mul<Cpx> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Cpx) -> Self::Output {
        self.scale(rhs)
    }
}
impl Mul<Matrix> for Cpx {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Self::Output {
        rhs.scale(self)
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::*;
    use crate::{J, NEG_ONE};

    fn c(re: f32, im: f32) -> Cpx {
        Cpx::ReIm { re, im }
    }

    fn sample() -> Matrix {
        Matrix::from_rows([[c(1.0, 2.0), c(3.0, -1.0)], [c(0.0, 4.0), c(-2.0, 0.0)]]).unwrap()
    }

    #[test]
    fn test_new_is_zeroed() {
        let m = Matrix::new(3, 3).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 3);
        assert!(m.entries().iter().all(|e| *e == ZERO));
    }

    #[test]
    fn test_new_rejects_non_square() {
        let err = Matrix::new(2, 3).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(Matrix::new(0, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_from_entries_length_check() {
        assert!(Matrix::from_entries(2, vec![ONE; 3]).is_err());
        assert!(Matrix::from_entries(2, vec![ONE; 4]).is_ok());
    }

    #[test]
    fn test_get_set() {
        let mut m = Matrix::identity(2).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), ONE);
        m.set(0, 1, J).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), J);
        assert_eq!(m.entries()[1], J);
    }

    #[test]
    fn test_out_of_range() {
        let mut m = Matrix::identity(2).unwrap();
        let err = m.get(2, 0).unwrap_err();
        assert_eq!(
            err,
            PauliError::OutOfRange {
                op: "Matrix::get",
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
        assert!(m.set(0, 5, ONE).unwrap_err().is_out_of_range());
        assert_eq!(m, Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_trace() {
        assert_eq!(sample().trace(), c(-1.0, 2.0));
        assert_eq!(Matrix::identity(4).unwrap().trace(), Cpx::Re { re: 4.0 });
    }

    #[test]
    fn test_conjugate_transpose() {
        let mut m = sample();
        m.conjugate_transpose();
        let expected =
            Matrix::from_rows([[c(1.0, -2.0), c(0.0, -4.0)], [c(3.0, 1.0), c(-2.0, 0.0)]])
                .unwrap();
        assert_eq!(m, expected);
        m.conjugate_transpose();
        assert_eq!(m, sample());
    }

    #[test]
    fn test_multiply() {
        let x = Matrix::from_rows([[ZERO, ONE], [ONE, ZERO]]).unwrap();
        let product = sample().multiply(&x).unwrap();
        let expected =
            Matrix::from_rows([[c(3.0, -1.0), c(1.0, 2.0)], [c(-2.0, 0.0), c(0.0, 4.0)]])
                .unwrap();
        assert_eq!(product, expected);
    }

    #[test]
    fn test_multiply_assign_leaves_receiver_on_error() {
        let mut m = sample();
        let err = m.multiply_assign(&Matrix::identity(3).unwrap()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(m, sample());

        m.multiply_assign(&Matrix::identity(2).unwrap()).unwrap();
        assert_eq!(m, sample());
    }

    #[test]
    fn test_exact_equality() {
        let mut m = sample();
        assert_eq!(m, sample());
        m.set(1, 1, c(-2.0, 1e-6)).unwrap();
        assert_ne!(m, sample());
        assert_ne!(Matrix::identity(2).unwrap(), Matrix::identity(3).unwrap());
    }

    #[test]
    fn test_hermitian_closure() {
        let r = sample();
        let h = r.checked_add(&r.dagger()).unwrap();
        assert!(h.is_hermitian());
        assert!(!r.is_hermitian());
    }

    #[test]
    fn test_scale_and_kron() {
        let m = Matrix::identity(2).unwrap() * NEG_ONE;
        assert_eq!(m.get(0, 0).unwrap(), NEG_ONE);
        let k = sample().kron(&Matrix::identity(2).unwrap());
        assert_eq!(k.dim(), 4);
        assert_eq!(k.get(2, 0).unwrap(), c(0.0, 4.0));
        assert_eq!(k.get(3, 1).unwrap(), c(0.0, 4.0));
        assert_eq!(k.get(2, 1).unwrap(), ZERO);
    }
}
