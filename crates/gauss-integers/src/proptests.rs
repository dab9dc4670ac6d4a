//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        // Canonical form

        #[test]
        fn rational_is_normalized(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            prop_assert_eq!(r.denominator().signum(), 1);
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
        }

        #[test]
        fn rational_scaling_invariant(
            num in small_int(),
            den in non_zero_int(),
            k in non_zero_int()
        ) {
            prop_assert_eq!(
                Rational::from_i64(num * k, den * k),
                Rational::from_i64(num, den)
            );
        }

        #[test]
        fn checked_constructor_agrees(num in small_int(), den in non_zero_int()) {
            let checked = Rational::new(Integer::new(num), Integer::new(den));
            prop_assert_eq!(checked, Ok(Rational::from_i64(num, den)));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, a + (b + c));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a * &b) * &c, a * (b * c));
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            let neg = -&a;
            prop_assert!((a + neg).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.recip();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_sub_then_add(a in rational(), b in rational()) {
            prop_assert_eq!((&a - &b) + &b, a);
        }

        #[test]
        fn rational_div_then_mul(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((&a / &b) * &b, a);
        }

        // Ordering

        #[test]
        fn ordering_matches_f64(a in rational(), b in rational()) {
            // Small parts keep the f64 images exact enough to order.
            let fa = a.numerator().to_i64().unwrap() as f64 / a.denominator().to_i64().unwrap() as f64;
            let fb = b.numerator().to_i64().unwrap() as f64 / b.denominator().to_i64().unwrap() as f64;
            prop_assume!(fa != fb || a == b);
            prop_assert_eq!(a.cmp(&b), fa.partial_cmp(&fb).unwrap());
        }

        #[test]
        fn abs_is_non_negative(a in rational()) {
            prop_assert!(a.abs() >= Rational::zero());
            prop_assert_eq!(a.abs(), (-&a).abs());
        }

        // Rendering

        #[test]
        fn decimal_rendering_is_exact(num in small_int(), twos in 0u32..6, fives in 0u32..6) {
            let den = 2i64.pow(twos) * 5i64.pow(fives);
            let r = Rational::from_i64(num, den);
            let text = r.to_string();
            prop_assert!(!text.contains('/'));

            // Reading the digits back as an integer over 10^places recovers r.
            let places = text.split('.').nth(1).map_or(0, str::len);
            let digits: i64 = text.replace('.', "").parse().unwrap();
            let ten_pow = 10i64.pow(u32::try_from(places).unwrap());
            prop_assert_eq!(Rational::from_i64(digits, ten_pow), r);
        }

        #[test]
        fn non_terminating_renders_as_fraction(num in non_zero_int(), k in 1i64..50) {
            let r = Rational::from_i64(num, 3 * k);
            prop_assume!(r.denominator().is_multiple_of(&Integer::new(3)));
            prop_assert_eq!(r.to_string(), format!("{}/{}", r.numerator(), r.denominator()));
        }
    }
}
