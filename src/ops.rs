use std::ops::{Add, Mul, Sub};

use crate::Distribution;

impl Distribution {
    pub fn max(&self, rhs: &Self) -> Self {
        self.combine_with(rhs, f64::max)
    }

    pub fn min(&self, rhs: &Self) -> Self {
        self.combine_with(rhs, f64::min)
    }
}

impl Add<Distribution> for Distribution {
    type Output = Distribution;

    fn add(self, rhs: Distribution) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl Add<&Distribution> for Distribution {
    type Output = Distribution;

    fn add(self, rhs: &Distribution) -> Self::Output {
        self.convolve(rhs)
    }
}

impl Add<Distribution> for &Distribution {
    type Output = Distribution;

    fn add(self, rhs: Distribution) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl Add<&Distribution> for &Distribution {
    type Output = Distribution;

    fn add(self, rhs: &Distribution) -> Self::Output {
        self.convolve(rhs)
    }
}

impl Add<f64> for Distribution {
    type Output = Distribution;

    fn add(self, rhs: f64) -> Self::Output {
        self.map(|x| x + rhs)
    }
}

impl Sub<Distribution> for Distribution {
    type Output = Distribution;

    fn sub(self, rhs: Distribution) -> Self::Output {
        self.combine_with(&rhs, |x, y| x - y)
    }
}

impl Sub<&Distribution> for Distribution {
    type Output = Distribution;

    fn sub(self, rhs: &Distribution) -> Self::Output {
        self.combine_with(rhs, |x, y| x - y)
    }
}

impl Sub<Distribution> for &Distribution {
    type Output = Distribution;

    fn sub(self, rhs: Distribution) -> Self::Output {
        self.combine_with(&rhs, |x, y| x - y)
    }
}

impl Sub<&Distribution> for &Distribution {
    type Output = Distribution;

    fn sub(self, rhs: &Distribution) -> Self::Output {
        self.combine_with(rhs, |x, y| x - y)
    }
}

impl Sub<f64> for Distribution {
    type Output = Distribution;

    fn sub(self, rhs: f64) -> Self::Output {
        self.map(|x| x - rhs)
    }
}

impl Mul<usize> for Distribution {
    type Output = Distribution;

    fn mul(self, rhs: usize) -> Self::Output {
        self.repeat(rhs)
    }
}

impl Mul<usize> for &Distribution {
    type Output = Distribution;

    fn mul(self, rhs: usize) -> Self::Output {
        self.repeat(rhs)
    }
}
