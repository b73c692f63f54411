// src/quaternion.rs
// Level 2: 4-dimensional algebras over a level-1 base.
//
// Twisted (Cayley-Dickson) doublings of Complex, non-commutative but
// associative, with a rational quadrance:
//   Hamilton  i² = j² = k² = -1,  ij = k,  jk = i,  ki = j
//   Cockle    i² = -1, t² = u² = +1,  it = u,  tu = -i,  ui = t
//   Infra     i² = -1, β² = γ² = 0,   iβ = γ,  βi = -γ
//
// Central (tensor) doublings, commutative and associative, with a quadrance
// in the level-1 algebra of the adjoined unit:
//   Hyper        Complex ⊗ Complex,  h² = -1
//   BiPerplex    Perplex ⊗ Perplex,  h² = +1
//   DualComplex  Complex ⊗ Dual,     ε² =  0

use crate::cayley_dickson::CayleyDickson;
use crate::complex::{Complex, Perplex};
use crate::display::Named;
use crate::flavor::{Elliptic, Hyperbolic, Parabolic};
use crate::tensor::Tensor;

pub type Hamilton = CayleyDickson<Complex, Elliptic>;
pub type Cockle = CayleyDickson<Complex, Hyperbolic>;
pub type Infra = CayleyDickson<Complex, Parabolic>;

pub type Hyper = Tensor<Complex, Elliptic>;
pub type BiPerplex = Tensor<Perplex, Hyperbolic>;
pub type DualComplex = Tensor<Complex, Parabolic>;

impl Named for Hamilton {
    const NAME: &'static str = "Hamilton";
    const SYMBOLS: &'static [&'static str] = &["", "i", "j", "k"];
}

impl Named for Cockle {
    const NAME: &'static str = "Cockle";
    const SYMBOLS: &'static [&'static str] = &["", "i", "t", "u"];
}

impl Named for Infra {
    const NAME: &'static str = "Infra";
    const SYMBOLS: &'static [&'static str] = &["", "i", "β", "γ"];
}

impl Named for Hyper {
    const NAME: &'static str = "Hyper";
    const SYMBOLS: &'static [&'static str] = &["", "i", "h", "ih"];
}

impl Named for BiPerplex {
    const NAME: &'static str = "BiPerplex";
    const SYMBOLS: &'static [&'static str] = &["", "s", "h", "sh"];
}

impl Named for DualComplex {
    const NAME: &'static str = "DualComplex";
    const SYMBOLS: &'static [&'static str] = &["", "i", "ε", "iε"];
}
