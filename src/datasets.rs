use ndarray_rand::RandomExt;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;

use crate::{Error, Result, Vector};

/// Draws `n_samples` inputs uniformly from `[low, high)` and pairs each with
/// `weight * x + bias`, perturbed by uniform noise in `[-noise, noise]`.
pub fn make_line<R: Rng + ?Sized>(
    n_samples: usize,
    weight: f64,
    bias: f64,
    noise: f64,
    (low, high): (f64, f64),
    rng: &mut R,
) -> Result<(Vector, Vector)> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(Error::invalid(format!(
            "input range must be finite with low < high, got [{low}, {high})"
        )));
    }
    if !noise.is_finite() || noise < 0.0 {
        return Err(Error::invalid(format!(
            "noise must be a non-negative finite number, got {noise}"
        )));
    }

    let inputs = Vector::random_using(n_samples, Uniform::new(low, high), rng);
    let mut targets = inputs.mapv(|x| weight * x + bias);

    if noise > 0.0 {
        targets += &Vector::random_using(n_samples, Uniform::new_inclusive(-noise, noise), rng);
    }

    Ok((inputs, targets))
}
