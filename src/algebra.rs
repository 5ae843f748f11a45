//! Tensor products of Pauli generators with an arbitrary complex phase.

use core::fmt;
use core::ops::Mul;
use core::str::FromStr;

use crate::error::{PauliError, Result};
use crate::matrix::Matrix;
use crate::pauli::{Generator, PauliMatrix, structure_constant};
use crate::{Cpx, ONE};

/// An element `phase · (P₁ ⊗ P₂ ⊗ … ⊗ Pₙ)` of the Pauli algebra on `n` qubits.
///
/// The entries form a `2ⁿ × 2ⁿ` matrix and always equal `phase` times the
/// Kronecker product of the canonical generator matrices, except after
/// [`PauliAlgebraElement::checked_add`], where the phases add and the label
/// is carried over unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliAlgebraElement {
    factors: Vec<Generator>,
    phase: Cpx,
    matrix: Matrix,
}

impl PauliAlgebraElement {
    /// Parses a generator string such as `"XYZ"` or `"x @ y @ z"`.
    ///
    /// Letters are case-insensitive; whitespace and `@` separate factors and
    /// are otherwise ignored. Unlike [`PauliMatrix::from_label`] this is
    /// strict: an empty string or any other character is rejected.
    pub fn new(label: &str) -> Result<Self> {
        let mut factors = Vec::with_capacity(label.len());
        for ch in label.chars() {
            if ch == '@' || ch.is_whitespace() {
                continue;
            }
            let generator = Generator::from_char(ch).ok_or_else(|| {
                PauliError::invalid(
                    "PauliAlgebraElement::new",
                    format!("{ch:?} in {label:?} is not one of I, X, Y, Z"),
                )
            })?;
            factors.push(generator);
        }
        Self::from_generators(factors)
    }

    /// Builds the tensor product of `generators`, left to right, with phase 1.
    pub fn from_generators<G>(generators: G) -> Result<Self>
    where
        G: IntoIterator<Item = Generator>,
    {
        let factors: Vec<Generator> = generators.into_iter().collect();
        let Some(matrix) = kron_all(&factors) else {
            return Err(PauliError::invalid(
                "PauliAlgebraElement::from_generators",
                "at least one generator is required",
            ));
        };
        tracing::trace!(n = factors.len(), "built Pauli algebra element");
        Ok(Self {
            factors,
            phase: ONE,
            matrix,
        })
    }

    /// The generators, one per qubit slot.
    pub fn factors(&self) -> &[Generator] {
        &self.factors
    }

    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

    /// Side length `2ⁿ` of the underlying matrix.
    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    pub fn phase(&self) -> Cpx {
        self.phase
    }

    /// Composite label with `" @ "` between factors, e.g. `"X @ Y @ Z"`.
    pub fn label(&self) -> String {
        let mut out = String::with_capacity(self.factors.len() * 4);
        for (k, g) in self.factors.iter().enumerate() {
            if k > 0 {
                out.push_str(" @ ");
            }
            out.push(g.as_char());
        }
        out
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cpx> {
        self.matrix.get(row, col)
    }

    /// Tensor product `self ⊗ other`: phases multiply, labels concatenate.
    pub fn tensor(&self, other: &PauliAlgebraElement) -> PauliAlgebraElement {
        let mut factors = Vec::with_capacity(self.factors.len() + other.factors.len());
        factors.extend_from_slice(&self.factors);
        factors.extend_from_slice(&other.factors);
        tracing::trace!(n = factors.len(), "tensored Pauli algebra elements");
        PauliAlgebraElement {
            factors,
            phase: self.phase * other.phase,
            matrix: self.matrix.kron(&other.matrix),
        }
    }

    /// Multiplies the entries and the phase by any complex scalar.
    pub fn scale(&self, scalar: Cpx) -> PauliAlgebraElement {
        PauliAlgebraElement {
            factors: self.factors.clone(),
            phase: self.phase * scalar,
            matrix: self.matrix.scale(scalar),
        }
    }

    /// Sum of two elements with the same label.
    ///
    /// Entries add, the new phase is the sum of both phases, and the label is
    /// kept. Elements with different labels or dimensions are rejected.
    pub fn checked_add(&self, other: &PauliAlgebraElement) -> Result<PauliAlgebraElement> {
        if self.factors != other.factors {
            return Err(PauliError::invalid(
                "PauliAlgebraElement::checked_add",
                format!(
                    "labels {:?} and {:?} differ",
                    self.label(),
                    other.label()
                ),
            ));
        }
        Ok(PauliAlgebraElement {
            factors: self.factors.clone(),
            phase: self.phase + other.phase,
            matrix: self.matrix.checked_add(&other.matrix)?,
        })
    }

    /// Factor-wise product: slot `k` of the result is `self[k] · other[k]`.
    ///
    /// Slot signs from [`structure_constant`] are folded into the phase along
    /// with both operands' phases, so the result equals the dense product of
    /// the two matrices.
    pub fn multiply(&self, other: &PauliAlgebraElement) -> Result<PauliAlgebraElement> {
        if self.factors.len() != other.factors.len() {
            return Err(PauliError::invalid(
                "PauliAlgebraElement::multiply",
                format!(
                    "{:?} has {} factors but {:?} has {}",
                    self.label(),
                    self.factors.len(),
                    other.label(),
                    other.factors.len()
                ),
            ));
        }
        let mut phase = self.phase * other.phase;
        let mut factors = Vec::with_capacity(self.factors.len());
        for (a, b) in self.factors.iter().zip(&other.factors) {
            let (sign, generator) = structure_constant(*a, *b);
            phase = phase * sign;
            factors.push(generator);
        }
        let Some(canonical) = kron_all(&factors) else {
            return Err(PauliError::invalid(
                "PauliAlgebraElement::multiply",
                "elements have no factors",
            ));
        };
        Ok(PauliAlgebraElement {
            factors,
            phase,
            matrix: canonical.scale(phase),
        })
    }
}

/// Left-to-right Kronecker product of the canonical generator matrices.
fn kron_all(factors: &[Generator]) -> Option<Matrix> {
    let (first, rest) = factors.split_first()?;
    Some(
        rest.iter()
            .fold(Matrix::from(*first), |acc, g| acc.kron(&Matrix::from(*g))),
    )
}

impl FromStr for PauliAlgebraElement {
    type Err = PauliError;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Generator> for PauliAlgebraElement {
    fn from(generator: Generator) -> Self {
        PauliAlgebraElement {
            factors: vec![generator],
            phase: ONE,
            matrix: generator.into(),
        }
    }
}

impl From<PauliMatrix> for PauliAlgebraElement {
    fn from(pauli: PauliMatrix) -> Self {
        PauliAlgebraElement {
            factors: vec![pauli.generator()],
            phase: pauli.phase(),
            matrix: pauli.into_matrix(),
        }
    }
}

impl From<PauliAlgebraElement> for Matrix {
    fn from(element: PauliAlgebraElement) -> Self {
        element.matrix
    }
}

impl Mul<Cpx> for PauliAlgebraElement {
    type Output = PauliAlgebraElement;
    fn mul(self, rhs: Cpx) -> Self::Output {
        self.scale(rhs)
    }
}
impl Mul<PauliAlgebraElement> for Cpx {
    type Output = PauliAlgebraElement;
    fn mul(self, rhs: PauliAlgebraElement) -> Self::Output {
        rhs.scale(self)
    }
}

/// Renders the phase prefix and the label, e.g. `1X @ Y`, `-1iZ` or `(1 + 2i)X`.
///
/// Both parts of the phase are truncated toward zero.
impl fmt::Display for PauliAlgebraElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.phase.re() as i64, self.phase.im() as i64);
        if self.phase.im() == 0.0 {
            write!(f, "{re}")?;
        } else if self.phase.re() == 0.0 {
            write!(f, "{im}i")?;
        } else {
            write!(f, "({re} + {im}i)")?;
        }
        f.write_str(&self.label())
    }
}
