//! Native floating-point representations
//!
//! [`Lanes32`] stores packed `f32` values and overrides every elementwise
//! contract method with native arithmetic, so results are bit-identical to
//! plain `f32` code. [`MeanF64`] is a running-mean register over `f64`.

use std::fmt;

use maths_core::{NumericError, Register, Result, Scalar, SharedRegister, SharedVector, Vector};

// ============================================================
// Scalar32
// ============================================================

/// A native 32-bit float scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Scalar32(pub f32);

impl Scalar for Scalar32 {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumericError::division_by_zero("f32 division"));
        }
        Ok(Self(self.0 / rhs.0))
    }

    fn neg(&self) -> Self {
        Self(-self.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn to_f64(&self) -> f64 {
        f64::from(self.0)
    }

    fn from_f64(value: f64) -> Result<Self> {
        Ok(Self(value as f32))
    }
}

impl From<f32> for Scalar32 {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Scalar32> for f32 {
    fn from(value: Scalar32) -> Self {
        value.0
    }
}

impl fmt::Display for Scalar32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================
// Lanes32
// ============================================================

/// Packed `f32` vector storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lanes32 {
    data: Vec<f32>,
}

impl Lanes32 {
    /// Create from a slice.
    pub fn from_slice(slice: &[f32]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Slice view of the elements.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl From<Vec<f32>> for Lanes32 {
    fn from(data: Vec<f32>) -> Self {
        Self { data }
    }
}

impl Vector for Lanes32 {
    type Scalar = Scalar32;

    fn new(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    fn duplicate(&self) -> Self {
        self.clone()
    }

    fn get(&self, i: usize) -> Scalar32 {
        Scalar32(self.data[i])
    }

    fn set(&mut self, i: usize, value: Scalar32) {
        self.data[i] = value.0;
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn add_at(&mut self, i: usize, other: &Self) {
        self.data[i] += other.data[i];
    }

    fn sub_at(&mut self, i: usize, other: &Self) {
        self.data[i] -= other.data[i];
    }

    fn mul_at(&mut self, i: usize, other: &Self) {
        self.data[i] *= other.data[i];
    }

    fn div_at(&mut self, i: usize, other: &Self) -> Result<()> {
        let divisor = other.data[i];
        if divisor == 0.0 {
            return Err(NumericError::division_by_zero("f32 vector division"));
        }
        self.data[i] /= divisor;
        Ok(())
    }

    fn mul_scalar_at(&mut self, i: usize, t: &Scalar32) {
        self.data[i] *= t.0;
    }

    fn div_scalar_at(&mut self, i: usize, t: &Scalar32) -> Result<()> {
        if t.is_zero() {
            return Err(NumericError::division_by_zero("f32 vector/scalar division"));
        }
        self.data[i] /= t.0;
        Ok(())
    }

    fn negate_at(&mut self, i: usize) {
        self.data[i] = -self.data[i];
    }
}

/// Lock-guarded `f32` vector.
pub type Vector32 = SharedVector<Lanes32>;

/// Build a [`Vector32`] from raw values.
pub fn vector32(values: &[f32]) -> Vector32 {
    SharedVector::from_repr(Lanes32::from_slice(values))
}

/// Snapshot a [`Vector32`] as raw values.
pub fn values32(vector: &Vector32) -> Vec<f32> {
    vector.with_repr(|lanes| lanes.as_slice().to_vec())
}

// ============================================================
// MeanF64
// ============================================================

/// Running mean over `f64` contributions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeanF64 {
    mean: f64,
    sum: f64,
    count: u64,
}

impl Register for MeanF64 {
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

/// Lock-guarded `f64` running mean.
pub type FloatRegister = SharedRegister<MeanF64>;

/// Mean of `values`, failing on an empty slice.
pub fn average(values: &[f64]) -> Result<f64> {
    let register = FloatRegister::new();
    register.accumulate(values.iter().copied());
    register.compute()
}

// Compile-time contract checks.
const _: fn() = || {
    fn scalar<S: Scalar>() {}
    fn vector<V: Vector>() {}
    fn register<R: Register>() {}
    scalar::<Scalar32>();
    vector::<Lanes32>();
    register::<MeanF64>();
};
