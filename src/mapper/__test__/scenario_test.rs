use super::{c, embedded, kron, pauli_config};
use crate::config::MapperConfig;
use crate::error::MappingError;
use crate::mapper::{map_term, LogarithmicMapper};
use crate::pauli::sparse::assert_matrix_close;
use crate::pauli::{SparsePauliOp, ATOL};
use crate::spin::{Spin, SpinAxis, SpinOp, SpinTerm};
use ndarray::Array2;
use num_complex::Complex64;
use std::sync::Arc;

#[test]
fn test_spin_half_z_maps_to_pauli_z() {
    let op = SpinOp::new(
        Spin::half(),
        vec![SpinTerm::new(vec![(SpinAxis::Z, 0)], c(1.0, 0.0))],
    );

    let mapped = LogarithmicMapper::new(pauli_config()).map(&op, None).unwrap();
    assert_eq!(mapped.num_qubits(), 1);
    assert_eq!(mapped.to_list(), vec![("Z".to_string(), c(1.0, 0.0))]);

    // padding and placement are irrelevant when 2S+1 is a power of two
    let config = pauli_config().with_padding(9.0).with_embed_upper(false);
    let mapped = LogarithmicMapper::new(config).map(&op, None).unwrap();
    assert_eq!(mapped.to_list(), vec![("Z".to_string(), c(1.0, 0.0))]);

    let physical = LogarithmicMapper::default().map(&op, None).unwrap();
    assert_eq!(physical.to_list(), vec![("Z".to_string(), c(0.5, 0.0))]);
}

#[test]
fn test_spin_one_z_embeds_into_two_qubits() {
    let op = SpinOp::from_labels(Spin::from_integer(1), [("Z_0", c(1.0, 0.0))]).unwrap();
    let mapped = LogarithmicMapper::default().map(&op, None).unwrap();
    assert_eq!(mapped.num_qubits(), 2);

    let mut expected = Array2::<Complex64>::zeros((4, 4));
    expected[[0, 0]] = c(1.0, 0.0);
    expected[[2, 2]] = c(-1.0, 0.0);
    expected[[3, 3]] = c(1.0, 0.0);
    assert_matrix_close(&mapped.to_matrix(), &expected);

    let lower = LogarithmicMapper::new(MapperConfig::default().with_embed_upper(false).with_padding(0.5))
        .map(&op, None)
        .unwrap();
    let mut expected = Array2::<Complex64>::zeros((4, 4));
    expected[[0, 0]] = c(0.5, 0.0);
    expected[[1, 1]] = c(1.0, 0.0);
    expected[[3, 3]] = c(-1.0, 0.0);
    assert_matrix_close(&lower.to_matrix(), &expected);
}

#[test]
fn test_untouched_sites_are_filled_with_identity() {
    let coeff = c(0.75, -0.25);
    let mapper = LogarithmicMapper::new(pauli_config());
    for (axis, label) in [(SpinAxis::X, "XI"), (SpinAxis::Y, "YI"), (SpinAxis::Z, "ZI")] {
        let op = SpinOp::new(Spin::half(), vec![SpinTerm::new(vec![(axis, 1)], coeff)])
            .with_register_length(2);
        let mapped = mapper.map(&op, None).unwrap();
        let expected = SparsePauliOp::from_list(2, [(label, coeff)]).unwrap();
        assert_eq!(mapped, expected);
    }

    let op = SpinOp::from_labels(Spin::half(), [("Y_0", coeff)]).unwrap();
    let mapped = mapper.map(&op, Some(3)).unwrap();
    assert_eq!(mapped.to_list(), vec![("IIY".to_string(), coeff)]);
}

#[test]
fn test_same_site_factors_compose_in_term_order() {
    let mapper = LogarithmicMapper::new(pauli_config());
    let xz = SpinOp::from_labels(Spin::half(), [("X_0 Z_0", c(1.0, 0.0))]).unwrap();
    let zx = SpinOp::from_labels(Spin::half(), [("Z_0 X_0", c(1.0, 0.0))]).unwrap();
    // X·Z = -iY, Z·X = iY
    assert_eq!(mapper.map(&xz, None).unwrap().to_list(), vec![("Y".to_string(), c(0.0, -1.0))]);
    assert_eq!(mapper.map(&zx, None).unwrap().to_list(), vec![("Y".to_string(), c(0.0, 1.0))]);

    let spin = Spin::from_integer(1);
    let config = MapperConfig::default();
    let mapper = LogarithmicMapper::new(config);
    let op = SpinOp::from_labels(spin, [("X_0 Z_0", c(1.0, 0.0))]).unwrap();
    let x = embedded(spin, Some(SpinAxis::X), &config);
    let z = embedded(spin, Some(SpinAxis::Z), &config);
    let mapped = mapper.map(&op, None).unwrap().to_matrix();
    assert_matrix_close(&mapped, &x.dot(&z));
    let diff = &mapped - &z.dot(&x);
    assert!(diff.iter().any(|v| v.norm() > 1e-6));
}

#[test]
fn test_two_site_spin_one_coupling_matches_dense_kron() {
    let spin = Spin::from_integer(1);
    let config = MapperConfig::default().with_padding(2.0);
    let mapper = LogarithmicMapper::new(config);
    let op = SpinOp::from_labels(
        spin,
        [
            ("X_0 X_1", c(1.0, 0.0)),
            ("Y_1 Y_0", c(0.5, 0.0)),
            ("Z_1 Z_1", c(0.0, 0.3)),
            ("", c(-1.0, 0.0)),
        ],
    )
    .unwrap();
    let mapped = mapper.map(&op, None).unwrap();
    assert_eq!(mapped.num_qubits(), 4);

    let x = embedded(spin, Some(SpinAxis::X), &config);
    let y = embedded(spin, Some(SpinAxis::Y), &config);
    let z = embedded(spin, Some(SpinAxis::Z), &config);
    let id = embedded(spin, None, &config);
    let expected = kron(&x, &x)
        + kron(&y, &y).mapv(|v| v * 0.5)
        + kron(&z.dot(&z), &id).mapv(|v| v * c(0.0, 0.3))
        - kron(&id, &id);
    assert_matrix_close(&mapped.to_matrix(), &expected);
}

#[test]
fn test_empty_operator_maps_to_explicit_zero() {
    let op = SpinOp::new(Spin::from_integer(1), vec![]).with_register_length(3);
    let mapped = LogarithmicMapper::default().map(&op, None).unwrap();
    assert!(mapped.is_empty());
    assert_eq!(mapped.num_qubits(), 6);
    assert_eq!(mapped, SparsePauliOp::zero(6));
}

#[test]
fn test_out_of_range_site_is_rejected() {
    let op = SpinOp::from_labels(Spin::half(), [("X_0", c(1.0, 0.0)), ("Z_2", c(1.0, 0.0))])
        .unwrap()
        .with_register_length(2);
    assert_eq!(
        LogarithmicMapper::default().map(&op, None),
        Err(MappingError::IndexOutOfRange {
            index: 2,
            register_length: 2
        })
    );
    let inferred = SpinOp::from_labels(Spin::half(), [("Z_2", c(1.0, 0.0))]).unwrap();
    assert!(LogarithmicMapper::default().map(&inferred, Some(1)).is_err());
}

#[test]
fn test_unknown_axis_is_rejected() {
    assert_eq!(
        SpinOp::from_labels(Spin::half(), [("X_0 W_1", c(1.0, 0.0))]),
        Err(MappingError::UnknownAxis("W".to_string()))
    );
}

#[test]
fn test_cancelling_terms_are_dropped() {
    let op = SpinOp::from_labels(
        Spin::new(3, 2).unwrap(),
        [("X_0 Y_1", c(1.0, 0.0)), ("Y_1 X_0", c(-1.0, 0.0))],
    )
    .unwrap();
    assert!(LogarithmicMapper::default().map(&op, None).unwrap().is_empty());
}

#[test]
fn test_ladder_labels_expand_to_raising_operator() {
    let spin = Spin::from_integer(1);
    let config = MapperConfig::default();
    let op = SpinOp::from_labels(spin, [("+_0", c(1.0, 0.0))]).unwrap();
    let mapped = LogarithmicMapper::new(config).map(&op, None).unwrap().to_matrix();

    let x = embedded(spin, Some(SpinAxis::X), &config);
    let y = embedded(spin, Some(SpinAxis::Y), &config);
    let expected = x + y.mapv(|v| v * Complex64::i());
    assert_matrix_close(&mapped, &expected);
    // S+ only connects m -> m+1, i.e. index k -> k-1
    assert!((mapped[[0, 1]].re - 2f64.sqrt()).abs() < 1e-12);
    assert!(mapped[[1, 0]].norm() < 1e-12);
}

#[test]
fn test_encoding_cache_is_shared() {
    let mapper = LogarithmicMapper::default();
    let spin = Spin::new(5, 2).unwrap();
    let ops = vec![
        SpinOp::from_labels(spin, [("Z_0", c(1.0, 0.0))]).unwrap(),
        SpinOp::from_labels(spin, [("X_1", c(1.0, 0.0))]).unwrap(),
    ];
    let mapped = mapper.map_many(&ops).unwrap();
    assert_eq!(mapped.len(), 2);
    assert_eq!(mapped[0].num_qubits(), 3);
    assert_eq!(mapped[1].num_qubits(), 6);
    assert!(Arc::ptr_eq(
        &mapper.encoding(spin).unwrap(),
        &mapper.encoding(spin).unwrap()
    ));
}

#[test]
fn test_map_term_scales_by_coefficient() {
    let mapper = LogarithmicMapper::new(pauli_config());
    let encoding = mapper.encoding(Spin::half()).unwrap();
    let term = SpinTerm::new(vec![(SpinAxis::X, 0), (SpinAxis::Z, 1)], c(0.0, 2.0));
    let mapped = map_term(&term, 2, &encoding).unwrap();
    let expected = SparsePauliOp::from_list(2, [("ZX", c(0.0, 2.0))]).unwrap();
    assert!(mapped.approx_eq(&expected, ATOL));

    let scalar = map_term(&SpinTerm::new(vec![], c(3.0, 0.0)), 0, &encoding).unwrap();
    assert_eq!(scalar.to_list(), vec![(String::new(), c(3.0, 0.0))]);
}
