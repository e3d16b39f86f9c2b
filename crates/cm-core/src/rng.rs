//! Seeded randomness for price and rate rolls.
//!
//! One root `SimRng` is seeded from `GameConfig::seed`.  The builder hands
//! each rolling subsystem (bank, market, exchange, secretary, birthday) its
//! own stream via [`SimRng::child`], so a subsystem that draws more or fewer
//! numbers never shifts what the others see.  Tests seed a single subsystem
//! directly with [`SimRng::new`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio multiplier spreading stream labels across the seed space.
const STREAM_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// A reproducible random stream.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off the stream labelled `stream`.  Advances `self` by one draw.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ stream.wrapping_mul(STREAM_MIX);
        SimRng::new(seed)
    }

    /// Uniform draw from `range` (half-open or inclusive).
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
