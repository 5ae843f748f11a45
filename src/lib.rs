//! The `cpx-pauli` library provides dense complex square matrices, Pauli matrices
//! with a symbolically tracked phase, and tensor-product Pauli algebra elements.
//! It also decomposes 2×2 Hermitian matrices in the {I, X, Y, Z} basis.
//! It leverages the `cpx-coords` crate for complex number arithmetic.

pub mod algebra;
pub mod error;
pub mod hermitian;
pub mod matrix;
pub mod pauli;
pub mod sampling;

pub use algebra::PauliAlgebraElement;
pub use error::{PauliError, Result};
pub use hermitian::{compose, decompose};
pub use matrix::Matrix;
pub use pauli::{GENERATORS, Generator, PauliMatrix, structure_constant};
pub use sampling::HermitianSampler;

/// Complex scalar used for every matrix entry and phase.
pub type Cpx = cpx_coords::Cpx<f32>;

/// Represents the exact complex number 0.
pub const ZERO: Cpx = Cpx::Zero;
/// Represents the exact complex number 1.
pub const ONE: Cpx = Cpx::One;
/// Represents the exact complex number -1.
pub const NEG_ONE: Cpx = Cpx::NegOne;
/// Represents the imaginary unit i.
pub const J: Cpx = Cpx::J;
/// Represents -i.
pub const NEG_J: Cpx = Cpx::NegJ;

#[test]
fn test_pauli_table_matches_matrices() {
    for a in GENERATORS {
        for b in GENERATORS {
            let (phase, label) = structure_constant(a, b);
            let dense = Matrix::from(a).multiply(&Matrix::from(b)).unwrap();
            assert_eq!(dense, Matrix::from(label).scale(phase));
        }
    }
}

#[test]
fn test_element_scaled_by_j() {
    let element: PauliAlgebraElement = "XY".parse().unwrap();
    let scaled = element * J;

    assert_eq!(scaled.phase(), J);
    assert_eq!(scaled.label(), "X @ Y");
    let expected = Matrix::from(Generator::X)
        .kron(&Matrix::from(Generator::Y))
        .scale(J);
    assert_eq!(scaled.as_matrix(), &expected);

    println!("{}", scaled);
}

#[test]
fn test_decompose_pauli_z() {
    let z = Matrix::from_rows([[ONE, ZERO], [ZERO, NEG_ONE]]).unwrap();
    let coefficients = decompose(&z).unwrap();

    assert_eq!(coefficients, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(compose(coefficients), z);

    println!("{:?}", coefficients);
}

#[test]
fn test_pauli_x_times_y() {
    let result = PauliMatrix::from_label("x") * PauliMatrix::from_label("Y");

    assert_eq!(result.label(), 'Z');
    assert_eq!(result.phase(), J);
    assert_eq!(-result.clone(), PauliMatrix::new(Generator::Z).scale(NEG_J).unwrap());

    println!("{}", result);
}
