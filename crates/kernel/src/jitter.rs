//! Injectable randomness for impulse jitter.

/// Source of per-axis impulse jitter.
pub trait JitterSource: std::fmt::Debug {
    /// Next jitter value in `[-range, range]`.
    fn sample(&mut self, range: f32) -> f32;
}

/// Uniform jitter from a `fastrand` generator.
///
/// Seeded instances reproduce the same sequence across runs.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: fastrand::Rng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Generator seeded from ambient entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample(&mut self, range: f32) -> f32 {
        (self.rng.f32() * 2.0 - 1.0) * range
    }
}

/// Jitter that is always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _range: f32) -> f32 {
        0.0
    }
}
