//! Arbitrary-precision decimal representations
//!
//! Backed by [`bigdecimal::BigDecimal`]. Addition, subtraction and
//! multiplication are exact; division rounds to the crate's default
//! precision. Spherical interpolation still computes its two blend weights in
//! `f64`, so only those weights lose precision.
//!
//! Enable with the `big` feature (on by default):
//! ```toml
//! [dependencies]
//! maths-repr = { version = "0.1", features = ["big"] }
//! ```

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use maths_core::{Dense, NumericError, Register, Result, Scalar, SharedRegister, SharedVector};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

// ============================================================
// BigScalar
// ============================================================

/// An arbitrary-precision decimal scalar.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigScalar(pub BigDecimal);

impl BigScalar {
    /// Round to `digits` significant digits.
    #[must_use]
    pub fn with_prec(&self, digits: u64) -> Self {
        Self(self.0.with_prec(digits))
    }

    /// The underlying decimal.
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl Scalar for BigScalar {
    fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    fn one() -> Self {
        Self(BigDecimal::one())
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(&self.0 - &rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self(&self.0 * &rhs.0)
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumericError::division_by_zero("decimal division"));
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    fn neg(&self) -> Self {
        Self(-self.0.clone())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn to_f64(&self) -> f64 {
        // NaN makes slerp weights unrepresentable, so slerp fails instead.
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(NumericError::not_representable(value));
        }
        BigDecimal::from_f64(value)
            .map(Self)
            .ok_or_else(|| NumericError::not_representable(value))
    }
}

impl From<i64> for BigScalar {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for BigScalar {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl FromStr for BigScalar {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self> {
        BigDecimal::from_str(s)
            .map(Self)
            .map_err(|_| NumericError::NotRepresentable {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for BigScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lock-guarded arbitrary-precision vector.
pub type BigVector = SharedVector<Dense<BigScalar>>;

/// Build a [`BigVector`] from integers.
pub fn big_vector(values: &[i64]) -> BigVector {
    SharedVector::from_scalars(values.iter().map(|&v| BigScalar::from(v)))
}

// ============================================================
// MeanBig
// ============================================================

/// Running mean over decimal contributions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeanBig {
    mean: BigDecimal,
    sum: BigDecimal,
    count: u64,
}

impl Register for MeanBig {
    type Value = BigScalar;

    fn add(&mut self, value: BigScalar) {
        self.sum += value.0;
        self.count += 1;
    }

    fn update(&mut self) -> Result<()> {
        if self.count == 0 {
            return Err(NumericError::empty_register());
        }
        self.mean = &self.sum / &BigDecimal::from(self.count);
        Ok(())
    }

    fn value(&self) -> BigScalar {
        BigScalar(self.mean.clone())
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lock-guarded decimal running mean.
pub type BigRegister = SharedRegister<MeanBig>;

const _: fn() = || {
    fn scalar<S: Scalar>() {}
    fn vector<V: maths_core::Vector>() {}
    fn register<R: Register>() {}
    scalar::<BigScalar>();
    vector::<Dense<BigScalar>>();
    register::<MeanBig>();
};
