// src/display.rs
// Canonical text form "(a+bi-cj+dk)". Presentation only; nothing in the
// arithmetic reads these tables.

use std::fmt;

use num_traits::Signed;

use crate::algebra::Algebra;
use crate::cayley_dickson::CayleyDickson;
use crate::flavor::Flavor;
use crate::rational::Rational;
use crate::tensor::Tensor;

/// Name and basis symbols of a concrete algebra. `SYMBOLS[0]` belongs to the
/// real unit and is empty.
pub trait Named {
    const NAME: &'static str;
    const SYMBOLS: &'static [&'static str];
}

pub fn render(coords: &[Rational], symbols: &[&str]) -> String {
    let mut out = String::from("(");
    for (i, (c, sym)) in coords.iter().zip(symbols).enumerate() {
        if i == 0 {
            out.push_str(&c.to_string());
        } else if c.is_negative() {
            out.push('-');
            out.push_str(&c.abs().to_string());
        } else {
            out.push('+');
            out.push_str(&c.to_string());
        }
        out.push_str(sym);
    }
    out.push(')');
    out
}

impl<A: Algebra, F: Flavor> fmt::Display for CayleyDickson<A, F>
where
    Self: Named,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.coords(), Self::SYMBOLS))
    }
}

impl<A: Algebra, F: Flavor> fmt::Display for Tensor<A, F>
where
    Self: Named,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.coords(), Self::SYMBOLS))
    }
}
