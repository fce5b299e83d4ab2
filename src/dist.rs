use std::iter::{Copied, Zip};
use std::slice;

use itertools::Itertools;
use once_cell::sync::OnceCell;
use rand::{thread_rng, Rng, RngCore};
use thiserror::Error;

/// Discrete probability mass distribution over real-valued outcomes.
///
/// Outcomes are kept sorted ascending alongside their masses. The cumulative
/// masses are derived on first use and cached; no method mutates an existing
/// instance, every transformation returns a new one.
#[derive(Debug, Clone)]
pub struct Distribution {
    outcomes: Vec<f64>,
    masses: Vec<f64>,
    cumulative: OnceCell<Vec<f64>>,
}

pub type Iter<'a> = Zip<Copied<slice::Iter<'a, f64>>, Copied<slice::Iter<'a, f64>>>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("empty support")]
    EmptySupport,
    #[error("cutoff {0} outside [0, 0.5]")]
    CutoffOutOfRange(f64),
}

pub type Result<T> = core::result::Result<T, Error>;

enum Scan {
    SeekingLow,
    SeekingHigh,
    Done,
}

impl Distribution {
    /// Builds a distribution from (outcome, mass) pairs, summing the masses
    /// of equal outcomes. Masses are stored as supplied: nothing checks that
    /// they are non-negative or sum to one.
    pub fn from_mass<I>(mass: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (outcomes, masses): (Vec<f64>, Vec<f64>) = mass
            .into_iter()
            .sorted_by(|(x, _), (y, _)| x.total_cmp(y))
            .coalesce(|(x, mx), (y, my)| {
                if x == y {
                    Ok((x, mx + my))
                } else {
                    Err(((x, mx), (y, my)))
                }
            })
            .unzip();
        Self {
            outcomes,
            masses,
            cumulative: OnceCell::new(),
        }
    }

    /// Every occurrence of a value contributes `1 / values.len()` mass, so
    /// duplicates accumulate. An empty `values` yields the empty
    /// distribution.
    pub fn uniform<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().collect();
        let mass = 1.0 / values.len() as f64;
        Self::from_mass(values.into_iter().map(|value| (value, mass)))
    }

    pub fn scalar(value: f64) -> Self {
        Self::from_mass([(value, 1.0)])
    }

    /// Fair die with faces `1..=sides`.
    pub fn die(sides: u32) -> Self {
        Self::uniform((1..=sides).map(f64::from))
    }

    pub fn outcomes(&self) -> &[f64] {
        &self.outcomes
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn support_edges(&self) -> Option<(f64, f64)> {
        Some((*self.outcomes.first()?, *self.outcomes.last()?))
    }

    pub fn iter(&self) -> Iter<'_> {
        self.outcomes.iter().copied().zip(self.masses.iter().copied())
    }

    pub fn map<F>(&self, op: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::from_mass(self.iter().map(|(value, mass)| (op(value), mass)))
    }

    pub fn combine_with<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut pairs = Vec::with_capacity(self.len() * other.len());
        for (v1, m1) in self.iter() {
            for (v2, m2) in other.iter() {
                pairs.push((op(v1, v2), m1 * m2));
            }
        }
        Self::from_mass(pairs)
    }

    /// Distribution of the sum of two independent variables.
    pub fn convolve(&self, other: &Self) -> Self {
        self.combine_with(other, |x, y| x + y)
    }

    /// `count`-fold self-convolution; `count < 2` returns a clone.
    pub fn repeat(&self, count: usize) -> Self {
        let mut result = self.clone();
        if count < 2 {
            return result;
        }
        for _ in 1..count {
            result = result.convolve(self);
        }
        result
    }

    pub fn mean(&self) -> f64 {
        self.iter().fold(0.0, |acc, (value, mass)| acc + value * mass)
    }

    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.iter()
            .fold(0.0, |acc, (value, mass)| acc + (value - mean).powi(2) * mass)
    }

    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Outcomes carrying the largest mass.
    pub fn modes(&self) -> Vec<f64> {
        self.iter()
            .max_set_by(|(_, m1), (_, m2)| m1.total_cmp(m2))
            .into_iter()
            .map(|(value, _)| value)
            .collect()
    }

    /// Smallest central interval holding at least `1 - 2 * cutoff` mass:
    /// `low` is the first outcome whose cumulative mass reaches `cutoff`,
    /// `high` the first to reach `1 - cutoff`, scanning the support
    /// ascending exactly once.
    pub fn bracket(&self, cutoff: f64) -> Result<(f64, f64)> {
        if !(0.0..=0.5).contains(&cutoff) {
            return Err(Error::CutoffOutOfRange(cutoff));
        }
        let (_, right_edge) = self.support_edges().ok_or(Error::EmptySupport)?;

        let mut state = Scan::SeekingLow;
        let mut low = None;
        let mut high = None;
        for (value, cumulative) in self.outcomes.iter().zip(self.cumulative()) {
            match state {
                Scan::SeekingLow if *cumulative >= cutoff => {
                    low = Some(*value);
                    state = Scan::SeekingHigh;
                }
                Scan::SeekingHigh if *cumulative >= 1.0 - cutoff => {
                    high = Some(*value);
                    state = Scan::Done;
                }
                _ => {}
            }
            if matches!(state, Scan::Done) {
                break;
            }
        }

        // Accumulated rounding (or non-normalized input) can leave a
        // threshold unreached; the right edge stands in.
        Ok((low.unwrap_or(right_edge), high.unwrap_or(right_edge)))
    }

    pub fn sample_rng<G>(&self, rng: &mut G) -> Result<f64>
    where
        G: RngCore,
    {
        let (_, right_edge) = self.support_edges().ok_or(Error::EmptySupport)?;
        let x: f64 = rng.gen();
        let mut position = 0.0;
        for (value, mass) in self.iter() {
            position += mass;
            if x < position {
                return Ok(value);
            }
        }
        // Total mass short of the variate; the largest outcome stands in.
        Ok(right_edge)
    }

    pub fn sample(&self) -> Result<f64> {
        let mut rng = thread_rng();
        self.sample_rng(&mut rng)
    }

    pub fn sample_many(&self, n: usize) -> Result<Vec<f64>> {
        let mut rng = thread_rng();
        (0..n).map(|_| self.sample_rng(&mut rng)).collect()
    }

    fn cumulative(&self) -> &[f64] {
        self.cumulative.get_or_init(|| {
            let mut acc = 0.0;
            self.masses
                .iter()
                .map(|mass| {
                    acc += mass;
                    acc
                })
                .collect()
        })
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (f64, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn d(sides: u32) -> Distribution {
        Distribution::die(sides)
    }

    #[test]
    fn uniform_normalizes() {
        let die = d(6);
        assert_abs_diff_eq!(die.masses().iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn uniform_accumulates_duplicates() {
        let pool = Distribution::uniform([1.0, 2.0, 2.0, 1.0]);
        assert_eq!(pool.outcomes(), [1.0, 2.0]);
        assert_eq!(pool.masses(), [0.5, 0.5]);
    }

    #[test]
    fn uniform_of_nothing_is_empty() {
        let pool = Distribution::uniform([]);
        assert!(pool.is_empty());
        assert_eq!(pool.support_edges(), None);
    }

    #[test]
    fn from_mass_round_trips() {
        let pool = Distribution::from_mass([(1.0, 0.25), (2.0, 0.5), (3.0, 0.25)]);
        assert_eq!(pool.outcomes(), [1.0, 2.0, 3.0]);
        assert_eq!(pool.masses(), [0.25, 0.5, 0.25]);
    }

    #[test]
    fn scalar_is_certain() {
        let pool = Distribution::scalar(7.0);
        assert_eq!(pool.outcomes(), [7.0]);
        assert_eq!(pool.masses(), [1.0]);
        assert_eq!(pool.mean(), 7.0);
    }

    #[test]
    fn convolution_conserves_mass() {
        let pool = d(6).convolve(&d(8));
        assert_abs_diff_eq!(pool.masses().iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn convolution_of_empty_is_empty() {
        let pool = d(6).convolve(&Distribution::from_mass([]));
        assert!(pool.is_empty());
    }

    #[test]
    fn map_accumulates_collisions() {
        let squares = Distribution::uniform([-1.0, 0.0, 1.0]).map(|x| x * x);
        assert_eq!(squares.outcomes(), [0.0, 1.0]);
        assert_abs_diff_eq!(squares.masses()[0], 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(squares.masses()[1], 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_of_d6() {
        assert_abs_diff_eq!(d(6).mean(), 3.5, epsilon = 1e-9);
    }

    #[test]
    fn mean_of_two_d4() {
        assert_abs_diff_eq!(d(4).convolve(&d(4)).mean(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(Distribution::from_mass([]).mean(), 0.0);
    }

    #[test]
    fn mean_is_stable_across_calls() {
        let pool = d(6).convolve(&d(4));
        let first = pool.mean();
        pool.bracket(0.25).unwrap();
        assert_eq!(first, pool.mean());
    }

    #[test]
    fn variance_of_d6() {
        assert_abs_diff_eq!(d(6).variance(), 35.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn modes_of_two_d6() {
        assert_eq!(d(6).convolve(&d(6)).modes(), [7.0]);
    }

    #[test]
    fn modes_of_a_fair_die_are_all_faces() {
        assert_eq!(d(4).modes(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn bracket_of_two_d4() {
        let pool = d(4).convolve(&d(4));
        assert_eq!(pool.bracket(0.25).unwrap(), (4.0, 6.0));
    }

    #[test]
    fn bracket_with_small_cutoff_spans_the_support() {
        let pool = Distribution::uniform([1.0, 2.0, 2.0, 1.0]).convolve(&d(4));
        assert_eq!(pool.bracket(0.05).unwrap(), (2.0, 6.0));
    }

    #[test]
    fn bracket_falls_back_to_the_right_edge() {
        // Six sixths accumulate to just under one, so no cumulative mass
        // ever reaches the 1.0 threshold.
        assert_eq!(d(6).bracket(0.0).unwrap(), (1.0, 6.0));
    }

    #[test]
    fn bracket_of_a_single_outcome() {
        assert_eq!(Distribution::scalar(7.0).bracket(0.25).unwrap(), (7.0, 7.0));
    }

    #[test]
    fn bracket_rejects_out_of_range_cutoffs() {
        let die = d(6);
        assert_eq!(die.bracket(0.75), Err(Error::CutoffOutOfRange(0.75)));
        assert_eq!(die.bracket(-0.1), Err(Error::CutoffOutOfRange(-0.1)));
    }

    #[test]
    fn bracket_rejects_an_empty_support() {
        let empty = Distribution::from_mass([]);
        assert_eq!(empty.bracket(0.25), Err(Error::EmptySupport));
    }

    #[test]
    fn repeat_of_three_d6() {
        let pool = d(6).repeat(3);
        assert_eq!(pool.support_edges(), Some((3.0, 18.0)));
        assert_abs_diff_eq!(pool.mean(), 10.5, epsilon = 1e-9);
    }

    #[test]
    fn samples_stay_in_the_support() {
        let mut rng = StdRng::seed_from_u64(7);
        let die = d(6);
        for _ in 0..100 {
            let value = die.sample_rng(&mut rng).unwrap();
            assert!(die.outcomes().contains(&value));
        }
    }

    #[test]
    fn sampling_an_empty_support_fails() {
        let empty = Distribution::from_mass([]);
        assert_eq!(empty.sample(), Err(Error::EmptySupport));
    }
}
