//! Ultra: the 16-dimensional twisted doubling of Supra.

#[macro_use]
mod common;

use cayley_dickson::prelude::*;
use proptest::prelude::*;

algebra_laws!(ultra_laws, cayley_dickson::Ultra);
alternative!(ultra_alternative, cayley_dickson::Ultra);
non_commutative!(ultra_does_not_commute, cayley_dickson::Ultra);

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn quadrance_is_dual_and_central(x in common::element::<Ultra>(), y in common::element::<Ultra>()) {
        let q = Ultra::one().scale_central(&x.quad());
        prop_assert_eq!(x.mul(&x.conj()), q.clone());
        prop_assert_eq!(commutator(&q, &y), Ultra::zero());
        prop_assert_eq!(associator(&q, &x, &y), Ultra::zero());
    }

    #[test]
    fn powers_associate(x in common::element::<Ultra>()) {
        let x2 = x.mul(&x);
        prop_assert_eq!(x2.mul(&x), x.mul(&x2));
        prop_assert_eq!(x2.mul(&x2), x.mul(&x2.mul(&x)));
    }
}

#[test]
fn halves_embed_as_supra() {
    let a = Supra::from_ints(&[1, -2, 0, 3, 1, 0, 0, 2]).unwrap();
    let b = Supra::from_ints(&[0, 1, 1, 0, -1, 2, 0, 0]).unwrap();
    let x = Ultra::new(a.clone(), Supra::zero());
    let y = Ultra::new(b.clone(), Supra::zero());
    assert_eq!(x.mul(&y), Ultra::new(a.mul(&b), Supra::zero()));
}

#[test]
fn new_unit_squares_to_minus_one() {
    let m = Ultra::unit(8).unwrap();
    assert_eq!(m.mul(&m), Ultra::one().neg());
}

#[test]
fn elements_without_a_complex_core_are_zero_divisors() {
    // β + 3mγ + mε: coordinates 0, 1, 8, 9 all vanish
    let x = Ultra::from_ints(&[0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 0, 0, 0]).unwrap();
    assert_eq!(x.quad(), Dual::new(int(0), int(0)));
    assert!(x.is_zero_divisor());
    assert!(matches!(x.inv(), Err(AlgebraError::ZeroDivisor(_))));
    assert!(Ultra::one().quo_l(&x).is_err());

    // ε alone is nilpotent inside the left half
    let eps = Ultra::unit(4).unwrap();
    assert_eq!(eps.mul(&eps), Ultra::zero());
    assert!(eps.is_zero_divisor());
}

#[test]
fn a_complex_core_is_enough_to_invert() {
    // 1 + mβ has quadrance 1 + 0ε
    let x = Ultra::from_ints(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(x.quad(), Dual::one());
    assert_eq!(x.mul(&x.inv().unwrap()), Ultra::one());
}
