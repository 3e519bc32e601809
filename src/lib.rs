pub use ndarray::{Array1, ArrayView1};

pub mod datasets;
mod display;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod random;

pub use error::{Error, Result};
pub use linear_model::{DEFAULT_STEP, SgdRegressor};
pub use random::Sampler;

pub type Vector = Array1<f64>;

