use super::{embedded, kron};
use crate::config::MapperConfig;
use crate::mapper::LogarithmicMapper;
use crate::pauli::sparse::assert_matrix_close;
use crate::spin::{Spin, SpinAxis, SpinOp, SpinTerm};
use num_complex::Complex64;
use proptest::collection::vec;
use proptest::prelude::*;

const REGISTER: usize = 3;

fn axis_strategy() -> impl Strategy<Value = SpinAxis> {
    prop_oneof![Just(SpinAxis::X), Just(SpinAxis::Y), Just(SpinAxis::Z)]
}

fn term_strategy() -> impl Strategy<Value = SpinTerm> {
    (
        vec((axis_strategy(), 0..REGISTER), 0..4),
        -2.0f64..2.0,
        -2.0f64..2.0,
    )
        .prop_map(|(factors, re, im)| SpinTerm::new(factors, Complex64::new(re, im)))
}

fn config_strategy() -> impl Strategy<Value = MapperConfig> {
    (-2.0f64..2.0, any::<bool>())
        .prop_map(|(padding, upper)| MapperConfig::default().with_padding(padding).with_embed_upper(upper))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_mapping_is_linear(
        twice in 1i64..4,
        config in config_strategy(),
        left in vec(term_strategy(), 0..4),
        right in vec(term_strategy(), 0..4),
    ) {
        let spin = Spin::new(twice, 2).unwrap();
        let mapper = LogarithmicMapper::new(config);
        let joined: Vec<SpinTerm> = left.iter().chain(right.iter()).cloned().collect();

        let whole = mapper
            .map(&SpinOp::new(spin, joined).with_register_length(REGISTER), None)
            .unwrap();
        let a = mapper
            .map(&SpinOp::new(spin, left).with_register_length(REGISTER), None)
            .unwrap();
        let b = mapper
            .map(&SpinOp::new(spin, right).with_register_length(REGISTER), None)
            .unwrap();

        prop_assert_eq!(whole.num_qubits(), REGISTER * spin.num_qubits());
        prop_assert!(whole.approx_eq(&a.add(&b).unwrap(), 1e-9));
    }

    #[test]
    fn test_single_term_matches_dense_construction(
        twice in 1i64..4,
        config in config_strategy(),
        term in term_strategy(),
    ) {
        let spin = Spin::new(twice, 2).unwrap();
        let mapper = LogarithmicMapper::new(config);
        let mapped = mapper
            .map(&SpinOp::new(spin, vec![term.clone()]).with_register_length(REGISTER), None)
            .unwrap();

        let identity = embedded(spin, None, &config);
        let mut sites = vec![identity.clone(); REGISTER];
        let mut touched = [false; REGISTER];
        for &(axis, index) in &term.factors {
            let factor = embedded(spin, Some(axis), &config);
            sites[index] = if touched[index] { sites[index].dot(&factor) } else { factor };
            touched[index] = true;
        }
        let expected = sites
            .iter()
            .rev()
            .skip(1)
            .fold(sites[REGISTER - 1].clone(), |acc, site| kron(&acc, site))
            .mapv(|v| v * term.coeff);
        assert_matrix_close(&mapped.to_matrix(), &expected);
    }
}
