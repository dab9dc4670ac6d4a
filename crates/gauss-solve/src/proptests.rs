//! Property-based tests for equations and their text form.

#[cfg(test)]
mod tests {
    use gauss_integers::Rational;
    use gauss_linalg::Solution;
    use proptest::prelude::*;

    use crate::{Equation, EquationSystem};

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-500i64..=-1i64), (1i64..=500i64)]
    }

    // Mixes terminating decimals (2^a 5^b denominators) with general fractions.
    fn rational() -> impl Strategy<Value = Rational> {
        prop_oneof![
            (-500i64..500, 0u32..4, 0u32..4)
                .prop_map(|(n, a, b)| Rational::from_i64(n, 2i64.pow(a) * 5i64.pow(b))),
            (-500i64..500, non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d)),
        ]
    }

    fn name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,3}"
    }

    fn equation() -> impl Strategy<Value = Equation> {
        (prop::collection::vec((name(), rational()), 0..6), rational()).prop_map(
            |(terms, constant)| {
                terms
                    .into_iter()
                    .fold(Equation::new(), |eq, (n, v)| eq.with(n, v))
                    .with_constant(constant)
            },
        )
    }

    proptest! {
        #[test]
        fn display_then_parse_round_trips(eq in equation()) {
            let text = eq.to_string();
            let parsed = Equation::parse(&text);
            prop_assert_eq!(parsed, Ok(eq), "text: {}", text);
        }

        #[test]
        fn set_keeps_only_non_zero(ops in prop::collection::vec((name(), -2i64..=2), 0..20)) {
            let mut eq = Equation::new();
            let mut last = std::collections::BTreeMap::new();
            for (n, v) in ops {
                eq.set(n.clone(), Rational::from(v));
                last.insert(n, v);
            }
            let non_zero = last.values().filter(|&&v| v != 0).count();
            prop_assert_eq!(eq.len(), non_zero);
            for (n, v) in &last {
                prop_assert_eq!(eq.get(n), Rational::from(*v));
            }
        }

        #[test]
        fn unique_solution_satisfies_every_equation(
            coeffs in prop::collection::vec(-5i64..=5, 9),
            values in prop::collection::vec(-5i64..=5, 3)
        ) {
            let names = ["u", "v", "w"];
            let system: EquationSystem = (0..3)
                .map(|row| {
                    let mut eq = Equation::new();
                    let mut rhs = 0;
                    for col in 0..3 {
                        eq.set(names[col], Rational::from(coeffs[row * 3 + col]));
                        rhs += coeffs[row * 3 + col] * values[col];
                    }
                    eq.with_constant(Rational::from(-rhs))
                })
                .collect();

            match system.solve().unwrap() {
                Solution::Unique(found) => {
                    for eq in &system {
                        let lhs = eq
                            .iter()
                            .fold(eq.constant().clone(), |acc, (n, c)| acc + c * &found[n]);
                        prop_assert_eq!(lhs, Rational::from(0));
                    }
                }
                Solution::Infinite => {}
                Solution::None => prop_assert!(false, "system built from a known point"),
            }
        }
    }
}
