// src/sample.rs
// Random elements for identity checks. Numerator and denominator magnitudes
// are Weibull-distributed so small values dominate, and a fixed share of
// coordinates is forced to zero so degenerate elements keep showing up.

use num_bigint::BigInt;
use rand::prelude::*;
use rand_distr::{Distribution, Weibull};

use crate::algebra::{Algebra, Quadratic};
use crate::error::{AlgebraError, Result};
use crate::rational::{int, Rational};

// ============================================================================
// CONFIGURATION
// ============================================================================
pub const DEFAULT_SCALE: f64 = 6.0; // Typical coordinate magnitude
pub const DEFAULT_SHAPE: f64 = 0.9; // < 1 gives a heavier tail
pub const DEFAULT_ZERO_BIAS: f64 = 0.15; // Share of coordinates pinned at 0
pub const MAX_MAGNITUDE: i64 = 1 << 20;
pub const MAX_ATTEMPTS: usize = 64; // Retries when an invertible element is needed

#[derive(Clone, Debug)]
pub struct Sampler {
    magnitude: Weibull<f64>,
    zero_bias: f64,
}

impl Sampler {
    pub fn new(scale: f64, shape: f64, zero_bias: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&zero_bias) {
            return Err(AlgebraError::Sampler(format!(
                "zero bias {zero_bias} is not a probability"
            )));
        }
        let magnitude =
            Weibull::new(scale, shape).map_err(|e| AlgebraError::Sampler(e.to_string()))?;
        Ok(Sampler {
            magnitude,
            zero_bias,
        })
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        (self.magnitude.sample(rng).round() as i64).min(MAX_MAGNITUDE)
    }

    /// `±n / (1 + m)` with `n`, `m` Weibull draws. The denominator is never 0.
    pub fn rational<R: Rng + ?Sized>(&self, rng: &mut R) -> Rational {
        if rng.gen_bool(self.zero_bias) {
            return int(0);
        }
        let numer = self.draw(rng);
        let numer = if rng.gen::<bool>() { -numer } else { numer };
        let denom = 1 + self.draw(rng);
        Rational::new(BigInt::from(numer), BigInt::from(denom))
    }

    pub fn element<A: Algebra, R: Rng + ?Sized>(&self, rng: &mut R) -> A {
        let coords: Vec<Rational> = (0..A::DIM).map(|_| self.rational(rng)).collect();
        A::from_slice(&coords)
    }

    /// An element that is not a zero divisor, or `None` if every attempt
    /// came up singular.
    pub fn invertible<A: Quadratic, R: Rng + ?Sized>(&self, rng: &mut R) -> Option<A> {
        (0..MAX_ATTEMPTS)
            .map(|_| self.element::<A, R>(rng))
            .find(|x| !x.is_zero_divisor())
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler::new(DEFAULT_SCALE, DEFAULT_SHAPE, DEFAULT_ZERO_BIAS)
            .expect("default sampler parameters are valid")
    }
}
