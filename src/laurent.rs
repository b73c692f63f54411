// src/laurent.rs
// Laurent polynomials with rational coefficients, evaluated at a point of an
// algebra by accumulating powers of y and Inv(y) one multiplication at a
// time. Every algebra in the tower is power-associative, so y^n is well
// defined without bracketing.

use std::collections::BTreeMap;

use crate::algebra::{Algebra, Quadratic};
use crate::error::Result;
use crate::rational::Rational;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Laurent {
    terms: BTreeMap<i64, Rational>,
}

impl Laurent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coeff · y^exp`, merging with any existing term of that degree.
    pub fn term(mut self, exp: i64, coeff: Rational) -> Self {
        let entry = self.terms.entry(exp).or_insert_with(Rational::zero);
        *entry = entry.add(&coeff);
        self
    }

    pub fn coefficient(&self, exp: i64) -> Option<&Rational> {
        self.terms.get(&exp)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn has_negative_powers(&self) -> bool {
        self.terms.keys().next().map_or(false, |&e| e < 0)
    }

    pub fn eval<A: Quadratic>(&self, y: &A) -> Result<A> {
        let mut acc = A::zero();

        // Non-negative powers, ascending.
        let mut power = A::one();
        let mut degree = 0;
        for (&exp, coeff) in self.terms.range(0..) {
            while degree < exp {
                power = power.mul(y);
                degree += 1;
            }
            acc = acc.add(&power.scale(coeff));
        }

        if !self.has_negative_powers() {
            return Ok(acc);
        }

        // Negative powers, descending from -1.
        let y_inv = y.inv()?;
        let mut power = A::one();
        let mut degree = 0;
        for (&exp, coeff) in self.terms.range(..0).rev() {
            while degree > exp {
                power = power.mul(&y_inv);
                degree -= 1;
            }
            acc = acc.add(&power.scale(coeff));
        }

        Ok(acc)
    }
}

impl FromIterator<(i64, Rational)> for Laurent {
    fn from_iter<I: IntoIterator<Item = (i64, Rational)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Laurent::new(), |p, (exp, coeff)| p.term(exp, coeff))
    }
}
