use fixbrot::fixed::{Fixed, Real, FRAC_BITS};

/// One ULP of the Q4.29 representation.
const QUANTUM: f64 = 1.0 / (1u64 << FRAC_BITS) as f64;

// ── conversions ─────────────────────────────────────────────────────────────

#[test]
fn round_trip_stays_within_one_quantum() {
    for &x in &[
        0.0,
        1.0,
        -1.0,
        0.5,
        -0.25,
        3.999_999,
        -3.999_999,
        0.123_456_789,
        -2.718_281_828,
        7.9,
        -7.9,
    ] {
        let back = Fixed::from_f64(x).to_f64();
        assert!(
            (back - x).abs() <= QUANTUM,
            "round trip of {x} drifted to {back}"
        );
    }
}

#[test]
fn zero_and_one_are_exact() {
    assert_eq!(Fixed::from_f64(0.0), Fixed::ZERO);
    assert_eq!(Fixed::from_f64(1.0), Fixed::ONE);
    assert_eq!(Fixed::ONE.to_f64(), 1.0);
}

#[test]
fn bits_round_trip() {
    let v = Fixed::from_f64(-1.375);
    assert_eq!(Fixed::from_bits(v.to_bits()), v);
}

#[test]
fn round_to_i64_uses_bias_before_shift() {
    assert_eq!(Fixed::from_f64(2.4).round_to_i64(), 2);
    assert_eq!(Fixed::from_f64(2.5).round_to_i64(), 3);
    assert_eq!(Fixed::from_f64(2.6).round_to_i64(), 3);
    assert_eq!(Fixed::from_f64(-1.2).round_to_i64(), -1);
}

// ── arithmetic ──────────────────────────────────────────────────────────────

#[test]
fn add_sub_share_scale() {
    let a = Fixed::from_f64(1.5);
    let b = Fixed::from_f64(0.25);
    assert_eq!((a + b).to_f64(), 1.75);
    assert_eq!((a - b).to_f64(), 1.25);
    assert_eq!((-a).to_f64(), -1.5);
}

#[test]
fn multiply_matches_f64_within_epsilon() {
    // Error per operand is one quantum; the product error scales with the
    // operand magnitudes, comfortably under 1e-7 for |fa*fb| < 8.
    let cases = [
        (0.5, 0.5),
        (-0.5, 0.5),
        (1.9, -1.9),
        (2.5, 2.5),
        (0.001, 123.0 / 64.0),
        (-1.25, -0.18),
        (3.9, 1.9),
    ];
    for &(fa, fb) in &cases {
        let got = (Fixed::from_f64(fa) * Fixed::from_f64(fb)).to_f64();
        let want = fa * fb;
        assert!(
            (got - want).abs() < 1e-7,
            "{fa} * {fb}: got {got}, want {want}"
        );
    }
}

#[test]
fn multiply_widens_before_renormalizing() {
    // The raw product of two 7.5s needs 66 bits before the shift; a
    // same-width multiply would wrap and corrupt the result.
    let v = Fixed::from_f64(7.5);
    assert!(((v * v).to_f64() - 56.25).abs() < 1e-6);
}

#[test]
fn multiply_of_squared_magnitude_is_exact_at_escape_radius() {
    // 2.0 * 2.0 = 4.0 exactly: both values and the product are powers of
    // two, so the escape comparison |z|^2 > 4 has no rounding slack.
    let two = Fixed::from_f64(2.0);
    let four = Fixed::from_f64(4.0);
    assert_eq!(two * two, four);
    assert!(!(two * two > four));
}

#[test]
fn real_backends_convert_consistently() {
    assert_eq!(<f64 as Real>::from_f64(0.75), 0.75);
    assert!((<Fixed as Real>::from_f64(0.75).to_f64() - 0.75).abs() <= QUANTUM);
}
