//! The arithmetic core: a pure addition over IEEE-754 doubles.

/// Returns `a + b` in double precision.
///
/// Total for every input, finite or not; infinities and NaN propagate per
/// IEEE-754, so callers never see an error from this layer.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn almost_equal(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS
    }

    #[test]
    fn adds_simple_integers() {
        assert!(almost_equal(add(2.0, 3.0), 5.0));
    }

    #[test]
    fn adds_floats() {
        let cases = [
            ("simple decimals", 2.5, 3.1, 5.6),
            ("negatives", -1.5, -2.5, -4.0),
            ("mix", 10.75, -0.25, 10.5),
            ("zero", 0.0, 0.0, 0.0),
        ];

        for (name, a, b, expected) in cases {
            let got = add(a, b);
            assert!(
                almost_equal(got, expected),
                "{name}: add({a}, {b}) = {got}; want {expected} (diff {})",
                (got - expected).abs()
            );
        }
    }

    #[test]
    fn is_commutative() {
        let pairs = [(2.5, 3.1), (-1.5, 2.25), (1e300, 1e-300)];
        for (a, b) in pairs {
            assert_eq!(add(a, b).to_bits(), add(b, a).to_bits());
        }
    }

    #[test]
    fn propagates_non_finite_operands() {
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(add(f64::NEG_INFINITY, -1.0), f64::NEG_INFINITY);
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    }
}
