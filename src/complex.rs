// src/complex.rs
// Level 1: one doubling of the rationals.
//   Complex  i² = -1
//   Perplex  s² = +1   (split-complex)
//   Dual     ε² =  0
// All three are commutative and associative; the conjugate negates the
// second coordinate and the quadrance is a² - γb².

use crate::cayley_dickson::CayleyDickson;
use crate::display::Named;
use crate::flavor::{Elliptic, Hyperbolic, Parabolic};
use crate::rational::{int, Rational};

pub type Complex = CayleyDickson<Rational, Elliptic>;
pub type Perplex = CayleyDickson<Rational, Hyperbolic>;
pub type Dual = CayleyDickson<Rational, Parabolic>;

impl Named for Complex {
    const NAME: &'static str = "Complex";
    const SYMBOLS: &'static [&'static str] = &["", "i"];
}

impl Named for Perplex {
    const NAME: &'static str = "Perplex";
    const SYMBOLS: &'static [&'static str] = &["", "s"];
}

impl Named for Dual {
    const NAME: &'static str = "Dual";
    const SYMBOLS: &'static [&'static str] = &["", "ε"];
}

/// `a + b·u` from integers, for any level-1 flavor.
pub fn pair<F>(a: i64, b: i64) -> CayleyDickson<Rational, F> {
    CayleyDickson::new(int(a), int(b))
}
