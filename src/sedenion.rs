// src/sedenion.rs
// Level 4: the 16-dimensional Ultra algebra.
// Ultra = Supra ⊕ Supra·m with m² = -1, i.e. a twisted doubling of the
// dual-extended Infra algebra. Non-commutative and non-associative, but
// still alternative because Supra is associative and its traces and
// quadrances are central.
// The quadrance is a Dual value: Q(a, b) = Q(a) + Q(b). Its real part only
// sees the complex cores of the four Infra components, so every element
// whose coordinates 0, 1, 8 and 9 vanish is a zero divisor.

use crate::cayley_dickson::CayleyDickson;
use crate::display::Named;
use crate::flavor::Elliptic;
use crate::octonion::Supra;

pub type Ultra = CayleyDickson<Supra, Elliptic>;

impl Named for Ultra {
    const NAME: &'static str = "Ultra";
    const SYMBOLS: &'static [&'static str] = &[
        "", "i", "β", "γ", "ε", "εi", "εβ", "εγ", "m", "mi", "mβ", "mγ", "mε", "mεi", "mεβ",
        "mεγ",
    ];
}
