use super::*;

#[test]
fn hash_is_deterministic() {
    for x in [-3.5, 0.0, 1.0, 57.0, 1234.25] {
        assert_eq!(hash(x).to_bits(), hash(x).to_bits());
    }
}

#[test]
fn hash_of_zero_is_zero() {
    assert_eq!(hash(0.0), 0.0);
}

#[test]
fn hash_stays_strictly_inside_unit_interval_both_signs() {
    let mut saw_negative = false;
    let mut saw_positive = false;
    for i in -500..500 {
        let v = hash(f64::from(i) * 0.731);
        assert!(v > -1.0 && v < 1.0, "hash out of range: {v}");
        saw_negative |= v < 0.0;
        saw_positive |= v > 0.0;
    }
    assert!(saw_negative);
    assert!(saw_positive);
}

#[test]
fn hash_matches_truncating_remainder_formula() {
    let x = 3.0f64;
    let raw = (x * 12.9898).sin() * 43758.5453;
    assert_eq!(hash(x), raw - raw.trunc());
}

#[test]
fn non_finite_input_propagates() {
    assert!(hash(f64::NAN).is_nan());
    assert!(hash(f64::INFINITY).is_nan());
}
