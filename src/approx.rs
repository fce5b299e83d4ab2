use bon::Builder;
use rand::rngs::ThreadRng;
use rand::{thread_rng, RngCore};

use crate::{Distribution, APPROX_ACCURACY, APPROX_MAX_SAMPLE_SIZE, APPROX_MIN_SAMPLE_SIZE};

#[derive(Debug, Builder)]
pub struct Approx<G = ThreadRng>
where
    G: RngCore,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = APPROX_ACCURACY)]
    accuracy: f64,
    #[builder(default = APPROX_MIN_SAMPLE_SIZE)]
    min_sample_size: u32,
    #[builder(default = APPROX_MAX_SAMPLE_SIZE)]
    max_sample_size: u32,
}

impl Default for Approx<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl<G> Approx<G>
where
    G: RngCore,
{
    /// Draws outcomes from `op` until the running mean moves by less than
    /// `accuracy` (staying between the configured sample bounds) and builds
    /// the empirical distribution of the draws.
    #[must_use]
    pub fn approximate<F>(&mut self, mut op: F) -> Distribution
    where
        F: FnMut(&mut G) -> f64,
    {
        let mut samples = Vec::with_capacity(self.min_sample_size as usize);
        let mut sum = 0.0;

        for _ in 0..self.min_sample_size {
            let x = op(&mut self.rng);
            sum += x;
            samples.push(x);
        }

        for i in self.min_sample_size..self.max_sample_size {
            let x = op(&mut self.rng);
            let previous = sum / f64::from(i);
            sum += x;
            samples.push(x);
            let current = sum / f64::from(i + 1);
            if (previous - current).abs() < self.accuracy {
                break;
            }
        }

        Distribution::uniform(samples)
    }
}
