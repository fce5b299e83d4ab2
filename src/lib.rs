//! Discrete probability mass distributions over real-valued outcomes.

mod approx;
pub mod defs;
mod dist;
mod ops;
pub mod prelude;

pub use approx::Approx;
pub use dist::{Distribution, Error, Iter, Result};

const APPROX_MAX_SAMPLE_SIZE: u32 = 50_000_000;
const APPROX_MIN_SAMPLE_SIZE: u32 = 1_000_000;
const APPROX_ACCURACY: f64 = 1e-9;
