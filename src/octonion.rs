// src/octonion.rs
// Level 3: 8-dimensional algebras.
//
// Twisted doublings of an associative level-2 algebra. These lose
// associativity but stay alternative: (xx)y = x(xy) and (xy)y = x(yy).
//   Cayley       Hamilton ⊕ Hamilton·m,  m² = -1   (octonions)
//   Zorn         Hamilton ⊕ Hamilton·r,  r² = +1   (split octonions)
//   InfraCockle  Cockle ⊕ Cockle·β,       β² =  0
//
// Central doublings of a level-2 algebra. These stay associative and carry a
// non-rational quadrance.
//   BiCockle  Cockle ⊗ Complex,  h² = -1,  quadrance in Complex
//   Supra     Infra ⊗ Dual,      ε² =  0,  quadrance in Dual

use crate::cayley_dickson::CayleyDickson;
use crate::display::Named;
use crate::flavor::{Elliptic, Hyperbolic, Parabolic};
use crate::quaternion::{Cockle, Hamilton, Infra};
use crate::tensor::Tensor;

pub type Cayley = CayleyDickson<Hamilton, Elliptic>;
pub type Zorn = CayleyDickson<Hamilton, Hyperbolic>;
pub type InfraCockle = CayleyDickson<Cockle, Parabolic>;

pub type BiCockle = Tensor<Cockle, Elliptic>;
pub type Supra = Tensor<Infra, Parabolic>;

impl Named for Cayley {
    const NAME: &'static str = "Cayley";
    const SYMBOLS: &'static [&'static str] = &["", "i", "j", "k", "m", "n", "p", "q"];
}

impl Named for Zorn {
    const NAME: &'static str = "Zorn";
    const SYMBOLS: &'static [&'static str] = &["", "i", "j", "k", "r", "s", "t", "u"];
}

impl Named for InfraCockle {
    const NAME: &'static str = "InfraCockle";
    const SYMBOLS: &'static [&'static str] = &["", "i", "t", "u", "β", "γ", "δ", "ε"];
}

impl Named for BiCockle {
    const NAME: &'static str = "BiCockle";
    const SYMBOLS: &'static [&'static str] = &["", "i", "t", "u", "h", "hi", "ht", "hu"];
}

impl Named for Supra {
    const NAME: &'static str = "Supra";
    const SYMBOLS: &'static [&'static str] = &["", "i", "β", "γ", "ε", "εi", "εβ", "εγ"];
}
