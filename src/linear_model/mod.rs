//! Linear models for regression.
//!
//! This module provides:
//! - `SgdRegressor`: single-feature linear regression fitted by stochastic
//!   gradient descent, one sample at a time in shuffled order
//!
//! # Examples
//!
//! ```rust
//! use linefit::SgdRegressor;
//!
//! let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
//! let y = [-6.0, -4.0, -2.0, 0.0, 2.0];
//!
//! let mut model = SgdRegressor::seeded(42).with_training_data(&x, &y);
//! model.train(100, 0.1);
//!
//! assert!((model.weight() - 2.0).abs() < 0.1);
//! assert!((model.bias() + 2.0).abs() < 0.1);
//!
//! let mut out = Vec::new();
//! model.predict_range(-5.0, 5.0, 0.5, &mut out).unwrap();
//! ```

mod sgd_regressor;

pub use sgd_regressor::{DEFAULT_STEP, MAX_RANGE_ENTRIES, SgdRegressor};
