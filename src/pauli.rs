//! Single-qubit Pauli generators and Pauli matrices with a tracked phase.

use core::fmt;
use core::ops::{Mul, Neg};

use crate::error::{PauliError, Result};
use crate::matrix::Matrix;
use crate::{Cpx, J, NEG_J, NEG_ONE, ONE, ZERO};

/// One of the four Pauli generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    I,
    X,
    Y,
    Z,
}

/// All generators in table order.
pub const GENERATORS: [Generator; 4] = [Generator::I, Generator::X, Generator::Y, Generator::Z];

impl Generator {
    /// idx values map to: 0 = I, 1 = X, 2 = Y, 3 = Z.
    pub fn idx(self) -> usize {
        match self {
            Generator::I => 0,
            Generator::X => 1,
            Generator::Y => 2,
            Generator::Z => 3,
        }
    }

    /// Parses a generator character, case-insensitively.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'I' => Some(Generator::I),
            'X' => Some(Generator::X),
            'Y' => Some(Generator::Y),
            'Z' => Some(Generator::Z),
            _ => None,
        }
    }

    /// Parses a one-character label, case-insensitively.
    ///
    /// Unrecognized labels fall back to `I` with a warning. Use
    /// [`Generator::from_char`] or [`crate::PauliAlgebraElement::new`] to
    /// reject bad input instead.
    pub fn from_label(label: &str) -> Self {
        let mut chars = label.chars();
        match (chars.next().and_then(Self::from_char), chars.next()) {
            (Some(generator), None) => generator,
            _ => {
                tracing::warn!(label, "unrecognized Pauli label, defaulting to I");
                Generator::I
            }
        }
    }

    /// Canonical label character.
    pub fn as_char(self) -> char {
        match self {
            Generator::I => 'I',
            Generator::X => 'X',
            Generator::Y => 'Y',
            Generator::Z => 'Z',
        }
    }

    /// Converts this generator into its full 2×2 matrix form.
    pub fn to_mat(self) -> [[Cpx; 2]; 2] {
        match self {
            Generator::I => [[ONE, ZERO], [ZERO, ONE]],
            Generator::X => [[ZERO, ONE], [ONE, ZERO]],
            Generator::Y => [[ZERO, NEG_J], [J, ZERO]],
            Generator::Z => [[ONE, ZERO], [ZERO, NEG_ONE]],
        }
    }
}

impl TryFrom<char> for Generator {
    type Error = PauliError;
    fn try_from(ch: char) -> Result<Self> {
        Self::from_char(ch).ok_or_else(|| {
            PauliError::invalid(
                "Generator::try_from",
                format!("{ch:?} is not one of I, X, Y, Z"),
            )
        })
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Generator> for Matrix {
    fn from(generator: Generator) -> Self {
        Matrix::from_mat2(generator.to_mat())
    }
}

/// Structure constants of the Pauli group: `a · b = phase · label`.
///
/// This 4×4 table is the only place the product rule is written down.
pub fn structure_constant(a: Generator, b: Generator) -> (Cpx, Generator) {
    const LABELS: [[Generator; 4]; 4] = {
        use Generator::*;
        [
            [I, X, Y, Z], // I * {I, X, Y, Z}
            [X, I, Z, Y], // X * {I, X, Y, Z}
            [Y, Z, I, X], // Y * {I, X, Y, Z}
            [Z, Y, X, I], // Z * {I, X, Y, Z}
        ]
    };
    const SIGNS: [[Cpx; 4]; 4] = [
        [ONE; 4],             // I * {I, X, Y, Z}
        [ONE, ONE, J, NEG_J], // X * {I, X, Y, Z}
        [ONE, NEG_J, ONE, J], // Y * {I, X, Y, Z}
        [ONE, J, NEG_J, ONE], // Z * {I, X, Y, Z}
    ];
    (SIGNS[a.idx()][b.idx()], LABELS[a.idx()][b.idx()])
}

/// Maps a value equal to one of {1, -1, i, -i} onto its exact constant.
pub(crate) fn unit_phase(phase: Cpx) -> Option<Cpx> {
    [ONE, NEG_ONE, J, NEG_J].into_iter().find(|p| *p == phase)
}

/// A Pauli generator multiplied by a phase in {1, -1, i, -i}.
///
/// The entries always equal `phase · generator.to_mat()`: the only ways to
/// change a `PauliMatrix` are the operations below, all of which keep the
/// symbolic label/phase and the numeric entries in step.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliMatrix {
    generator: Generator,
    phase: Cpx,
    matrix: Matrix,
}

impl PauliMatrix {
    /// Constructs the generator with phase 1.
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            phase: ONE,
            matrix: generator.into(),
        }
    }

    /// Constructs from a one-character label; unknown labels give `I` (see [`Generator::from_label`]).
    pub fn from_label(label: &str) -> Self {
        Self::new(Generator::from_label(label))
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    /// The canonical label, e.g. `'Z'`.
    pub fn label(&self) -> char {
        self.generator.as_char()
    }

    /// The tracked phase; always one of 1, -1, i, -i.
    pub fn phase(&self) -> Cpx {
        self.phase
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

    /// Multiplies by a phase; anything outside {1, -1, i, -i} is rejected.
    pub fn scale(&self, phase: Cpx) -> Result<Self> {
        let phase = unit_phase(phase).ok_or_else(|| {
            PauliError::invalid(
                "PauliMatrix::scale",
                format!("phase {phase:?} is not one of 1, -1, i, -i"),
            )
        })?;
        Ok(Self {
            generator: self.generator,
            phase: self.phase * phase,
            matrix: self.matrix.scale(phase),
        })
    }

    /// Product `self · rhs`.
    ///
    /// The label and phase come from [`structure_constant`]; the entries come
    /// from an independent dense multiplication, and the two are checked
    /// against each other.
    pub fn multiply(&self, rhs: &PauliMatrix) -> PauliMatrix {
        let (sign, generator) = structure_constant(self.generator, rhs.generator);
        let phase = self.phase * rhs.phase * sign;
        // Both operands are 2×2 by construction.
        let matrix = self.matrix.product(&rhs.matrix);
        debug_assert_eq!(
            matrix,
            Matrix::from(generator).scale(phase),
            "structure constants disagree with the dense product of {self} and {rhs}"
        );
        PauliMatrix {
            generator,
            phase,
            matrix,
        }
    }
}

impl Default for PauliMatrix {
    fn default() -> Self {
        Self::new(Generator::I)
    }
}

impl From<Generator> for PauliMatrix {
    fn from(generator: Generator) -> Self {
        Self::new(generator)
    }
}

impl From<PauliMatrix> for Matrix {
    fn from(pauli: PauliMatrix) -> Self {
        pauli.matrix
    }
}

impl Mul for PauliMatrix {
    type Output = PauliMatrix;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
impl Mul<&PauliMatrix> for &PauliMatrix {
    type Output = PauliMatrix;
    fn mul(self, rhs: &PauliMatrix) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Neg for PauliMatrix {
    type Output = Self;
    fn neg(self) -> Self::Output {
        PauliMatrix {
            generator: self.generator,
            phase: -self.phase,
            matrix: self.matrix.scale(NEG_ONE),
        }
    }
}

impl fmt::Display for PauliMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.phase {
            p if p == NEG_ONE => "-",
            p if p == J => "i",
            p if p == NEG_J => "-i",
            _ => "",
        };
        write!(f, "{prefix}{}", self.generator)
    }
}
