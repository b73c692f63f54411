// src/verify.rs
// Batch identity checking over random samples. Each sample draws from its own
// seeded generator, so the batch is a plain parallel map with no shared state
// and any failure can be replayed from (seed, index).

use p3_maybe_rayon::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::algebra::{Algebra, Quadratic};
use crate::products::{associator, commutator};
use crate::sample::Sampler;

// ============================================================================
// CONFIGURATION
// ============================================================================
pub const DEFAULT_SAMPLES: u64 = 128;
pub const DEFAULT_SEED: u64 = 0x5EDE_0F1A_CA11_0001;

#[derive(Clone, Debug)]
pub struct Harness {
    pub samples: u64,
    pub seed: u64,
    pub sampler: Sampler,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub property: String,
    pub samples: u64,
    pub holding: u64,
    pub first_failure: Option<u64>, // Sample index, replay with seed + index
}

impl Report {
    /// The identity held on every sample.
    pub fn always(&self) -> bool {
        self.holding == self.samples
    }

    /// The property held on at least one sample.
    pub fn ever(&self) -> bool {
        self.holding > 0
    }
}

impl Default for Harness {
    fn default() -> Self {
        Harness::new(DEFAULT_SAMPLES, DEFAULT_SEED)
    }
}

impl Harness {
    pub fn new(samples: u64, seed: u64) -> Self {
        Harness {
            samples,
            seed,
            sampler: Sampler::default(),
        }
    }

    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn rng_for(&self, index: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(index))
    }

    pub fn run<P>(&self, property: &str, check: P) -> Report
    where
        P: Fn(&Sampler, &mut StdRng) -> bool + Send + Sync,
    {
        let outcomes: Vec<bool> = (0..self.samples)
            .into_par_iter()
            .map(|i| check(&self.sampler, &mut self.rng_for(i)))
            .collect();

        let holding = outcomes.iter().filter(|&&ok| ok).count() as u64;
        let first_failure = outcomes.iter().position(|&ok| !ok).map(|i| i as u64);
        debug!(property, samples = self.samples, holding, "batch complete");

        Report {
            property: property.to_string(),
            samples: self.samples,
            holding,
            first_failure,
        }
    }

    /// Like `run`, but logs a warning when the identity fails anywhere.
    pub fn expect_identity<P>(&self, property: &str, check: P) -> Report
    where
        P: Fn(&Sampler, &mut StdRng) -> bool + Send + Sync,
    {
        let report = self.run(property, check);
        if let Some(index) = report.first_failure {
            warn!(
                property,
                seed = self.seed,
                index,
                failures = report.samples - report.holding,
                "identity failed"
            );
        }
        report
    }
}

// ============================================================================
// PROFILES
// ============================================================================

/// Sampled structural properties of an algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub dim: usize,
    pub commutative: bool,
    pub associative: bool,
    pub alternative: bool,
    pub composition: bool, // Q(xy) = Q(x)Q(y)
}

pub fn profile<A: Quadratic>(harness: &Harness) -> Profile {
    let commutative = harness
        .run("commutative", |s, rng| {
            let (x, y): (A, A) = (s.element(rng), s.element(rng));
            commutator(&x, &y) == A::zero()
        })
        .always();

    let associative = harness
        .run("associative", |s, rng| {
            let (x, y, z): (A, A, A) = (s.element(rng), s.element(rng), s.element(rng));
            associator(&x, &y, &z) == A::zero()
        })
        .always();

    let alternative = harness
        .run("alternative", |s, rng| {
            let (x, y): (A, A) = (s.element(rng), s.element(rng));
            associator(&x, &x, &y) == A::zero() && associator(&x, &y, &y) == A::zero()
        })
        .always();

    let composition = harness
        .run("composition", |s, rng| {
            let (x, y): (A, A) = (s.element(rng), s.element(rng));
            x.mul(&y).quad() == x.quad().mul(&y.quad())
        })
        .always();

    Profile {
        dim: A::DIM,
        commutative,
        associative,
        alternative,
        composition,
    }
}
