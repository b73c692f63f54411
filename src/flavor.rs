// src/flavor.rs
// Doubling flavors: the square of the unit adjoined at a level.
// Elliptic u² = -1, Parabolic u² = 0, Hyperbolic u² = +1.

use std::fmt::Debug;
use std::hash::Hash;

use crate::algebra::Algebra;

pub trait Flavor: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static {
    const UNIT_SQUARE: i8;

    /// `γ·x` for `γ = UNIT_SQUARE`.
    fn twist<A: Algebra>(x: &A) -> A {
        match Self::UNIT_SQUARE {
            -1 => x.neg(),
            0 => A::zero(),
            _ => x.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Elliptic;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parabolic;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hyperbolic;

impl Flavor for Elliptic {
    const UNIT_SQUARE: i8 = -1;
}

impl Flavor for Parabolic {
    const UNIT_SQUARE: i8 = 0;
}

impl Flavor for Hyperbolic {
    const UNIT_SQUARE: i8 = 1;
}
