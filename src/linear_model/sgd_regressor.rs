use std::io::{self, Write};

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::display::general;
use crate::random::Sampler;
use crate::{Error, Result, Vector};

/// Step used by `predict_range` callers that have no preference.
pub const DEFAULT_STEP: f64 = 1.0;

const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Predictions with a smaller magnitude are displayed as `0`.
const ZERO_SNAP: f64 = 0.01;

/// Upper bound on the number of entries a single `predict_range` call writes.
pub const MAX_RANGE_ENTRIES: usize = 10_000_000;

/// Single-feature linear regression `y = weight * x + bias`, trained by
/// per-sample stochastic gradient descent on squared error.
///
/// `bias` and then `weight` start as uniform draws in `[0, 1)` from the
/// model's sampler. Each training epoch visits the stored samples in a freshly
/// shuffled order.
#[derive(Clone, Debug)]
pub struct SgdRegressor<S: Sampler = StdRng> {
    inputs: Vector,
    targets: Vector,
    order: Vec<usize>,
    weight: f64,
    bias: f64,
    sampler: S,
}

impl SgdRegressor<StdRng> {
    pub fn new() -> Self {
        Self::with_sampler(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_sampler(StdRng::seed_from_u64(seed))
    }

    pub fn from_training_data(inputs: &[f64], targets: &[f64]) -> Self {
        Self::new().with_training_data(inputs, targets)
    }
}

impl<S: Sampler> SgdRegressor<S> {
    pub fn with_sampler(mut sampler: S) -> Self {
        let bias = sampler.unit();
        let weight = sampler.unit();

        Self {
            inputs: Vector::zeros(0),
            targets: Vector::zeros(0),
            order: Vec::new(),
            weight,
            bias,
            sampler,
        }
    }

    pub fn with_training_data(mut self, inputs: &[f64], targets: &[f64]) -> Self {
        self.set_training_data(inputs, targets);
        self
    }

    /// Replaces the training data. Both sequences are truncated to the
    /// shorter length and the traversal order is reset to identity.
    /// The learned parameters are kept.
    pub fn set_training_data(&mut self, inputs: &[f64], targets: &[f64]) {
        let n_samples = inputs.len().min(targets.len());
        if inputs.len() != targets.len() {
            debug!(
                "truncating training data to {n_samples} samples: inputs={} targets={}",
                inputs.len(),
                targets.len()
            );
        }

        self.inputs = Vector::from(inputs[..n_samples].to_vec());
        self.targets = Vector::from(targets[..n_samples].to_vec());
        self.order = (0..n_samples).collect();
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn n_samples(&self) -> usize {
        self.order.len()
    }

    pub fn inputs(&self) -> &Vector {
        &self.inputs
    }

    pub fn targets(&self) -> &Vector {
        &self.targets
    }

    /// Traversal order used by the most recent epoch.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn predict(&self, input: f64) -> f64 {
        self.weight * input + self.bias
    }

    pub fn predict_batch(&self, inputs: &Vector) -> Vector {
        inputs.mapv(|x| self.predict(x))
    }

    pub fn score(&self, inputs: &Vector, targets: &Vector) -> Result<f64> {
        let predictions = self.predict_batch(inputs);
        crate::metrics::r2_score(targets, &predictions)
    }

    /// Mean squared error over the stored training samples.
    pub fn training_loss(&self) -> Result<f64> {
        if self.n_samples() == 0 {
            return Err(Error::EmptyInput("no training data loaded"));
        }
        let predictions = self.predict_batch(&self.inputs);
        crate::metrics::mean_squared_error(&self.targets, &predictions)
    }

    pub fn train(&mut self, num_epochs: usize, learning_rate: f64) {
        debug!(
            "training: epochs={num_epochs} learning_rate={learning_rate} samples={}",
            self.n_samples()
        );

        for epoch in 0..num_epochs {
            self.shuffle();

            for j in 0..self.order.len() {
                let k = self.order[j];
                self.optimize(self.inputs[k], self.targets[k], learning_rate);
            }

            if log::log_enabled!(log::Level::Trace) {
                if let Ok(loss) = self.training_loss() {
                    trace!("epoch {epoch}: loss={loss}");
                }
            }
        }

        debug!("trained: weight={} bias={}", self.weight, self.bias);
    }

    /// Writes the prediction for every input in `min, min + step, ...` up to
    /// and including `max`, framed by separator lines.
    ///
    /// `step` must be positive, all bounds finite and the range no longer
    /// than [`MAX_RANGE_ENTRIES`] entries; anything else is rejected before
    /// output is written. Every written input is `<= max`.
    pub fn predict_range<W: Write + ?Sized>(
        &self,
        min: f64,
        max: f64,
        step: f64,
        sink: &mut W,
    ) -> Result<()> {
        let count = range_len(min, max, step)?;

        writeln!(sink, "{SEPARATOR}")?;
        for k in 0..count {
            let input = min + k as f64 * step;
            let prediction = self.predict(input);

            writeln!(sink, "Input: {}", general(input))?;
            if prediction > -ZERO_SNAP && prediction < ZERO_SNAP {
                writeln!(sink, "Predicted output: 0")?;
            } else {
                writeln!(sink, "Predicted output: {}", general(prediction))?;
            }

            if k + 1 < count {
                writeln!(sink)?;
            }
        }
        writeln!(sink, "{SEPARATOR}\n")?;

        Ok(())
    }

    pub fn print_range(&self, min: f64, max: f64, step: f64) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.predict_range(min, max, step, &mut handle)?;
        handle.flush()?;
        Ok(())
    }

    fn optimize(&mut self, input: f64, reference: f64, learning_rate: f64) {
        let prediction = self.predict(input);
        let deviation = reference - prediction;
        let delta = deviation * learning_rate;

        self.bias += delta;
        self.weight += delta * input;
    }

    // Partners are drawn from the whole range on every step rather than the
    // unvisited suffix, so the resulting permutations are not uniformly
    // distributed.
    fn shuffle(&mut self) {
        let n_samples = self.order.len();
        if n_samples == 0 {
            return;
        }

        for i in 0..n_samples {
            let r = self.sampler.index(n_samples);
            self.order.swap(i, r);
        }
    }
}

/// Number of inputs `min + k * step` with `k = 0, 1, ...` that do not exceed
/// `max`. Counting up front avoids accumulating `step` in floating point.
fn range_len(min: f64, max: f64, step: f64) -> Result<usize> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::invalid(format!(
            "range bounds must be finite, got [{min}, {max}]"
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::invalid(format!(
            "step must be a positive finite number, got {step}"
        )));
    }
    if max < min {
        return Ok(0);
    }

    let steps = ((max - min) / step).floor();
    if !steps.is_finite() || steps >= MAX_RANGE_ENTRIES as f64 {
        return Err(Error::invalid(format!(
            "range [{min}, {max}] with step {step} exceeds {MAX_RANGE_ENTRIES} entries"
        )));
    }

    let mut count = (steps as usize)
        .checked_add(1)
        .ok_or_else(|| Error::invalid("range entry count overflows"))?;

    // The division can round either way; settle on the entries themselves.
    let entry = |k: usize| min + k as f64 * step;
    if count < MAX_RANGE_ENTRIES && entry(count) <= max {
        count += 1;
    }
    while count > 0 && entry(count - 1) > max {
        count -= 1;
    }

    Ok(count)
}

impl Default for SgdRegressor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}
