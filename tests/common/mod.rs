//! Shared strategies and law suites for the algebra property tests.
#![allow(dead_code, unused_macros)]

use cayley_dickson::prelude::*;
use proptest::prelude::*;

/// Small fractions, with zero over-represented so degenerate coordinates
/// (and zero divisors in the split and dual flavors) get exercised.
pub fn rational() -> impl Strategy<Value = Rational> {
    prop_oneof![
        1 => Just(int(0)),
        5 => (-24i64..=24, 1i64..=9).prop_map(|(n, d)| rat(n, d)),
    ]
}

pub fn element<A: Algebra>() -> impl Strategy<Value = A> {
    proptest::collection::vec(rational(), A::DIM)
        .prop_map(|coords| A::from_coords(&coords).unwrap())
}

pub fn units<A: Algebra>() -> Vec<A> {
    (0..A::DIM).filter_map(A::unit).collect()
}

/// Laws every algebra in the tower satisfies.
macro_rules! algebra_laws {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::common::*;
            use cayley_dickson::prelude::*;
            use proptest::prelude::*;

            type T = $ty;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(48))]

                #[test]
                fn add_commutes(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(x.add(&y), y.add(&x));
                }

                #[test]
                fn add_associates(x in element::<T>(), y in element::<T>(), z in element::<T>()) {
                    prop_assert_eq!(x.add(&y).add(&z), x.add(&y.add(&z)));
                }

                #[test]
                fn identities(x in element::<T>()) {
                    prop_assert_eq!(x.add(&T::zero()), x.clone());
                    prop_assert_eq!(x.mul(&T::one()), x.clone());
                    prop_assert_eq!(T::one().mul(&x), x.clone());
                    prop_assert_eq!(x.scale(&int(1)), x);
                }

                #[test]
                fn sub_is_add_neg(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(x.sub(&y), x.add(&y.neg()));
                    prop_assert_eq!(x.sub(&x), T::zero());
                }

                #[test]
                fn involutions(x in element::<T>()) {
                    prop_assert_eq!(x.neg().neg(), x.clone());
                    prop_assert_eq!(x.conj().conj(), x.clone());
                    prop_assert_eq!(x.conj().neg(), x.neg().conj());
                }

                #[test]
                fn conj_reverses_products(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(x.mul(&y).conj(), y.conj().mul(&x.conj()));
                }

                #[test]
                fn linear_maps_distribute(x in element::<T>(), y in element::<T>(), t in rational()) {
                    prop_assert_eq!(x.add(&y).scale(&t), x.scale(&t).add(&y.scale(&t)));
                    prop_assert_eq!(x.sub(&y).scale(&t), x.scale(&t).sub(&y.scale(&t)));
                    prop_assert_eq!(x.add(&y).conj(), x.conj().add(&y.conj()));
                    prop_assert_eq!(x.sub(&y).conj(), x.conj().sub(&y.conj()));
                }

                #[test]
                fn mul_distributes(x in element::<T>(), y in element::<T>(), z in element::<T>()) {
                    prop_assert_eq!(x.mul(&y.add(&z)), x.mul(&y).add(&x.mul(&z)));
                    prop_assert_eq!(x.add(&y).mul(&z), x.mul(&z).add(&y.mul(&z)));
                    prop_assert_eq!(x.mul(&y.sub(&z)), x.mul(&y).sub(&x.mul(&z)));
                    prop_assert_eq!(x.sub(&y).mul(&z), x.mul(&z).sub(&y.mul(&z)));
                }

                #[test]
                fn inverse_laws(x in element::<T>()) {
                    prop_assume!(!x.is_zero_divisor());
                    let x_inv = x.inv().unwrap();
                    prop_assert_eq!(x.mul(&x_inv), T::one());
                    prop_assert_eq!(x_inv.mul(&x), T::one());
                    prop_assert_eq!(x_inv.inv().unwrap(), x);
                }

                #[test]
                fn inv_reverses_products(x in element::<T>(), y in element::<T>()) {
                    prop_assume!(!x.is_zero_divisor() && !y.is_zero_divisor());
                    let xy_inv = x.mul(&y).inv().unwrap();
                    prop_assert_eq!(xy_inv, y.inv().unwrap().mul(&x.inv().unwrap()));
                }

                #[test]
                fn quadrance_composes(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(x.mul(&y).quad(), x.quad().mul(&y.quad()));
                }

                #[test]
                fn quadrance_is_x_times_conj(x in element::<T>()) {
                    prop_assert_eq!(x.mul(&x.conj()), T::one().scale_central(&x.quad()));
                }

                #[test]
                fn quotients(x in element::<T>(), y in element::<T>()) {
                    prop_assume!(!y.is_zero_divisor());
                    prop_assert_eq!(x.quo_r(&y).unwrap().mul(&y), x.clone());
                    prop_assert_eq!(y.mul(&x.quo_l(&y).unwrap()), x.clone());
                    prop_assert_eq!(x.quo(&y).unwrap(), x.quo_r(&y).unwrap());
                }
            }

            #[test]
            fn zero_is_a_zero_divisor() {
                assert_zero_divisor(&T::zero());
            }

            fn assert_zero_divisor(x: &T) {
                assert!(x.is_zero_divisor());
                assert!(matches!(x.inv(), Err(AlgebraError::ZeroDivisor(_))));
                assert!(T::one().quo(x).is_err());
            }

            #[test]
            fn unit_basis_spans_the_coordinates() {
                let units = units::<T>();
                assert_eq!(units.len(), T::DIM);
                assert_eq!(units[0], T::one());
                assert!(T::unit(T::DIM).is_none());
                assert!(T::from_coords(&[int(1)]).is_err());
                let sum = units.iter().fold(T::zero(), |acc, u| acc.add(u));
                assert_eq!(sum.coords(), vec![int(1); T::DIM]);
            }
        }
    };
}

macro_rules! commutative {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::common::*;
            use cayley_dickson::prelude::*;
            use proptest::prelude::*;

            type T = $ty;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(48))]

                #[test]
                fn mul_commutes(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(commutator(&x, &y), T::zero());
                }
            }
        }
    };
}

/// The commutator is not identically zero: some pair of basis units fails
/// to commute.
macro_rules! non_commutative {
    ($name:ident, $ty:ty) => {
        #[test]
        fn $name() {
            type T = $ty;
            let units = common::units::<T>();
            let witness = units
                .iter()
                .any(|x| units.iter().any(|y| commutator(x, y) != T::zero()));
            assert!(witness, "no non-commuting pair of units");
        }
    };
}

macro_rules! associative {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::common::*;
            use cayley_dickson::prelude::*;
            use proptest::prelude::*;

            type T = $ty;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(48))]

                #[test]
                fn mul_associates(x in element::<T>(), y in element::<T>(), z in element::<T>()) {
                    prop_assert_eq!(associator(&x, &y, &z), T::zero());
                }
            }
        }
    };
}

/// Alternative but not associative: the associator vanishes whenever two
/// arguments coincide, yet some triple of units fails to associate.
macro_rules! alternative {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::common::*;
            use cayley_dickson::prelude::*;
            use proptest::prelude::*;

            type T = $ty;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(48))]

                #[test]
                fn left_alternative(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(associator(&x, &x, &y), T::zero());
                }

                #[test]
                fn right_alternative(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(associator(&x, &y, &y), T::zero());
                }

                #[test]
                fn flexible(x in element::<T>(), y in element::<T>()) {
                    prop_assert_eq!(associator(&x, &y, &x), T::zero());
                }
            }

            #[test]
            fn not_associative() {
                let units = units::<T>();
                let witness = units.iter().any(|a| {
                    units.iter().any(|b| units.iter().any(|c| associator(a, b, c) != T::zero()))
                });
                assert!(witness, "every triple of units associates");
            }
        }
    };
}
