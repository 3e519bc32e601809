//! Random source used by estimators for parameter initialization and
//! sample shuffling.
//!
//! Every [`rand::Rng`] is a [`Sampler`], so production code passes a
//! seeded or entropy-backed `StdRng` while tests can supply a scripted
//! implementation that returns fixed draws.

use rand::Rng;

pub trait Sampler {
    /// Uniform index in `[0, upper)`. Callers guarantee `upper > 0`.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform real in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> Sampler for R {
    fn index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }

    fn unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}
