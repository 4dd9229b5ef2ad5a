//! Test-only representations.

use crate::contract::{Register, Scalar};
use crate::dense::Dense;
use crate::error::{NumericError, Result};

/// Minimal f64 scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct T64(pub f64);

impl Scalar for T64 {
    fn zero() -> Self {
        T64(0.0)
    }

    fn one() -> Self {
        T64(1.0)
    }

    fn add(&self, rhs: &Self) -> Self {
        T64(self.0 + rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        T64(self.0 - rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        T64(self.0 * rhs.0)
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumericError::division_by_zero("T64 division"));
        }
        Ok(T64(self.0 / rhs.0))
    }

    fn neg(&self) -> Self {
        T64(-self.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn to_f64(&self) -> f64 {
        self.0
    }

    fn from_f64(value: f64) -> Result<Self> {
        Ok(T64(value))
    }
}

pub fn dense(values: &[f64]) -> Dense<T64> {
    Dense::from_vec(values.iter().map(|&v| T64(v)).collect())
}

/// Plain f64 running mean.
#[derive(Debug, Default)]
pub struct SumMean {
    sum: f64,
    count: u64,
    mean: f64,
}

impl Register for SumMean {
    type Value = f64;

    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn update(&mut self) -> Result<()> {
        if self.count == 0 {
            return Err(NumericError::empty_register());
        }
        self.mean = self.sum / self.count as f64;
        Ok(())
    }

    fn value(&self) -> f64 {
        self.mean
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
