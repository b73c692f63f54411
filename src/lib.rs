// src/lib.rs
// Exact hypercomplex algebras over the rationals, built by repeated doubling:
// Rational -> {Complex, Perplex, Dual} -> {Hamilton, Cockle, Infra, ...}
// -> {Cayley, Zorn, BiCockle, Supra, ...} -> Ultra.

pub mod algebra;
pub mod cayley_dickson;
pub mod complex;
pub mod display;
pub mod error;
pub mod flavor;
pub mod laurent;
pub mod octonion;
pub mod operators;
pub mod products;
pub mod projective;
pub mod quaternion;
pub mod rational;
pub mod sample;
pub mod sedenion;
pub mod tensor;
pub mod verify;

pub use algebra::{Algebra, Quadratic, Scalar};
pub use complex::{Complex, Dual, Perplex};
pub use error::{AlgebraError, Result};
pub use octonion::{BiCockle, Cayley, InfraCockle, Supra, Zorn};
pub use quaternion::{BiPerplex, Cockle, DualComplex, Hamilton, Hyper, Infra};
pub use rational::{int, rat, Rational};
pub use sedenion::Ultra;

pub mod prelude {
    pub use crate::algebra::{Algebra, Quadratic, Scalar};
    pub use crate::complex::{Complex, Dual, Perplex};
    pub use crate::display::Named;
    pub use crate::error::{AlgebraError, Result};
    pub use crate::laurent::Laurent;
    pub use crate::octonion::{BiCockle, Cayley, InfraCockle, Supra, Zorn};
    pub use crate::products::{associator, commutator};
    pub use crate::projective::{
        cross_ratio, cross_ratio_l, cross_ratio_r, mobius, mobius_l, mobius_r,
    };
    pub use crate::quaternion::{BiPerplex, Cockle, DualComplex, Hamilton, Hyper, Infra};
    pub use crate::rational::{int, rat, try_rat, Rational};
    pub use crate::sedenion::Ultra;
}
