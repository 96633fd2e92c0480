//! Deterministic planner RNG.
//!
//! Forecast jitter and the waste-generation simulation are the only
//! stochastic parts of the planner.  Both draw from one `PlannerRng` seeded
//! from `PlannerConfig::seed`, so a run is reproducible end to end.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Planner-level RNG.
///
/// Used only from the single planner thread.  If parallel randomness is ever
/// needed, derive one child per worker with [`child`](Self::child).
#[derive(Debug)]
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    pub fn new(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `PlannerRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> PlannerRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        PlannerRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Symmetric integer jitter in `-bound..=bound`.
    #[inline]
    pub fn jitter(&mut self, bound: u8) -> i32 {
        let bound = i32::from(bound);
        self.0.gen_range(-bound..=bound)
    }
}
