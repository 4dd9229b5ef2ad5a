//! Integer running mean.

use maths_core::{NumericError, Register, Result, SharedRegister};

/// Running mean over `i64` contributions.
///
/// The mean is integer division of the sum by the count, truncated toward
/// zero. The sum wraps on overflow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeanI64 {
    mean: i64,
    sum: i64,
    count: u64,
}

impl MeanI64 {
    /// Sum of every contribution since the last clear.
    pub fn sum(&self) -> i64 {
        self.sum
    }
}

impl Register for MeanI64 {
    type Value = i64;

    fn add(&mut self, value: i64) {
        self.sum = self.sum.wrapping_add(value);
        self.count += 1;
    }

    fn update(&mut self) -> Result<()> {
        if self.count == 0 {
            return Err(NumericError::empty_register());
        }
        self.mean = self.sum / self.count as i64;
        Ok(())
    }

    fn value(&self) -> i64 {
        self.mean
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lock-guarded integer running mean.
pub type IntRegister = SharedRegister<MeanI64>;

/// Truncated mean of `values`, failing on an empty slice.
pub fn average(values: &[i64]) -> Result<i64> {
    let register = IntRegister::new();
    register.accumulate(values.iter().copied());
    register.compute()
}

const _: fn() = || {
    fn register<R: Register>() {}
    register::<MeanI64>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        assert_eq!(average(&[2, 4, 6]).unwrap(), 4);
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(average(&[1, 2]).unwrap(), 1);
        assert_eq!(average(&[-1, -2]).unwrap(), -1);
    }

    #[test]
    fn test_empty_average_fails() {
        let err = average(&[]).unwrap_err();
        assert_eq!(err, NumericError::empty_register());
    }

    #[test]
    fn test_clear() {
        let mut reg = MeanI64::default();
        reg.add(7);
        reg.update().unwrap();
        assert_eq!(reg.sum(), 7);
        reg.clear();
        assert_eq!(reg, MeanI64::default());
    }
}
