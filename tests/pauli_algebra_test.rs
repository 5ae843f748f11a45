use cpx_pauli::{
    compose, decompose, Cpx, Generator, HermitianSampler, Matrix, PauliAlgebraElement,
    PauliMatrix, J, NEG_J, NEG_ONE, ONE,
};
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generator() -> BoxedStrategy<Generator> {
    prop::sample::select(vec![Generator::I, Generator::X, Generator::Y, Generator::Z]).boxed()
}

fn unit_phase() -> BoxedStrategy<Cpx> {
    prop::sample::select(vec![ONE, NEG_ONE, J, NEG_J]).boxed()
}

fn element_of_len(len: usize) -> BoxedStrategy<PauliAlgebraElement> {
    (vec(generator(), len), unit_phase())
        .prop_map(|(generators, phase)| {
            PauliAlgebraElement::from_generators(generators)
                .unwrap()
                .scale(phase)
        })
        .boxed()
}

fn small_element() -> BoxedStrategy<PauliAlgebraElement> {
    (1..=3usize).prop_flat_map(element_of_len).boxed()
}

fn aligned_pair() -> BoxedStrategy<(PauliAlgebraElement, PauliAlgebraElement)> {
    (1..=3usize)
        .prop_flat_map(|n| (element_of_len(n), element_of_len(n)))
        .boxed()
}

fn integer_matrix(dim: usize) -> BoxedStrategy<Matrix> {
    vec((-5i8..=5, -5i8..=5), dim * dim)
        .prop_map(move |parts| {
            let entries = parts
                .into_iter()
                .map(|(re, im)| Cpx::ReIm {
                    re: f32::from(re),
                    im: f32::from(im),
                })
                .collect();
            Matrix::from_entries(dim, entries).unwrap()
        })
        .boxed()
}

proptest! {
    #[test]
    fn test_factorwise_product_matches_dense((a, b) in aligned_pair()) {
        let product = a.multiply(&b).unwrap();
        let dense = a.as_matrix().multiply(b.as_matrix()).unwrap();
        prop_assert_eq!(product.as_matrix(), &dense);
        prop_assert_eq!(product.num_factors(), a.num_factors());
    }

    #[test]
    fn test_tensor_is_associative(a in small_element(), b in small_element(), c in small_element()) {
        let left = a.tensor(&b).tensor(&c);
        let right = a.tensor(&b.tensor(&c));
        prop_assert_eq!(left.dim(), a.dim() * b.dim() * c.dim());
        prop_assert_eq!(left, right);
    }

    #[test]
    fn test_label_parses_back(a in small_element()) {
        let parsed: PauliAlgebraElement = a.label().parse().unwrap();
        prop_assert_eq!(parsed.factors(), a.factors());
        prop_assert_eq!(parsed.scale(a.phase()), a);
    }

    #[test]
    fn test_pauli_commutation(a in generator(), b in generator()) {
        let (pa, pb) = (PauliMatrix::new(a), PauliMatrix::new(b));
        let ab = &pa * &pb;
        let ba = &pb * &pa;
        if a == b || a == Generator::I || b == Generator::I {
            prop_assert_eq!(ab, ba);
        } else {
            prop_assert_eq!(ab, -ba);
        }
    }

    #[test]
    fn test_pauli_phases_multiply(a in generator(), b in generator(), p in unit_phase(), q in unit_phase()) {
        let lhs = PauliMatrix::new(a).scale(p).unwrap() * PauliMatrix::new(b).scale(q).unwrap();
        let rhs = (PauliMatrix::new(a) * PauliMatrix::new(b)).scale(p * q).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_sum_with_dagger_is_hermitian(r in (1..=4usize).prop_flat_map(integer_matrix)) {
        let h = r.checked_add(&r.dagger()).unwrap();
        prop_assert!(h.is_hermitian());
        prop_assert_eq!(h.dagger(), h.clone());
    }

    #[test]
    fn test_decompose_round_trip(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let h = HermitianSampler::default().sample(&mut rng);
        let coefficients = decompose(&h).unwrap();
        prop_assert_eq!(compose(coefficients), h);
    }

    #[test]
    fn test_sampler_is_hermitian(seed in any::<u64>(), side in 0..=6usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let h = HermitianSampler::default().with_side(side).sample(&mut rng);
        prop_assert!(h.is_hermitian());
        if side > 0 {
            prop_assert_eq!(h.dim(), side);
        }
    }
}

#[test]
fn test_adding_different_labels_fails() {
    let xz: PauliAlgebraElement = "XZ".parse().unwrap();
    let xy: PauliAlgebraElement = "XY".parse().unwrap();
    let err = xz.checked_add(&xy).unwrap_err();
    assert!(err.is_invalid_argument());
    println!("{}", err);
}
