//! Random integer Hermitian matrices for exercising the decomposition.

use rand::Rng;

use crate::matrix::Matrix;
use crate::Cpx;

/// Largest side length picked when [`HermitianSampler::side`] is 0.
pub const MAX_RANDOM_SIDE: usize = 10;

/// Draws `R + R†` for a random integer complex matrix `R`.
///
/// The real and imaginary parts of every entry of `R` are uniform integers in
/// `[-bound/2, bound/2]`, so the entries of the result lie in `[-bound, bound]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HermitianSampler {
    pub bound: u16,
    /// Side length; 0 picks one uniformly from `1..=MAX_RANDOM_SIDE` per sample.
    pub side: usize,
}

impl Default for HermitianSampler {
    fn default() -> Self {
        Self { bound: 10, side: 2 }
    }
}

impl HermitianSampler {
    pub fn with_bound(mut self, bound: u16) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Draws one Hermitian matrix from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Matrix {
        let side = match self.side {
            0 => rng.gen_range(1..=MAX_RANDOM_SIDE),
            n => n,
        };
        let half = i32::from(self.bound / 2);
        let r = Matrix::from_fn(side, |_, _| Cpx::ReIm {
            re: rng.gen_range(-half..=half) as f32,
            im: rng.gen_range(-half..=half) as f32,
        });
        let e = r.entries();
        Matrix::from_fn(side, |row, col| e[row * side + col] + e[col * side + row].conj())
    }
}
