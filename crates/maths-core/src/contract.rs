//! Capability contracts
//!
//! The generic algorithms in [`crate::algebra`] and [`crate::accumulate`] are
//! written purely against these three traits. A representation becomes usable
//! by implementing them; no algorithm ever names a concrete type.
//!
//! # Locking
//!
//! Mutating methods take `&mut self`. Representations are therefore plain,
//! unsynchronized storage; exclusive access is granted by
//! [`SharedVector`](crate::SharedVector) and
//! [`SharedRegister`](crate::SharedRegister), which hold the lock for the
//! duration of each algorithm call.

use std::fmt;

use crate::error::Result;

// ============================================================
// Scalar Contract
// ============================================================

/// An immutable numeric value of one representation.
///
/// Arithmetic returns new values. Conversion to and from `f64` exists only
/// for transcendental math (spherical interpolation weights) and may lose
/// precision.
pub trait Scalar: Clone + fmt::Debug + Send + Sync + 'static {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// `self + rhs`
    fn add(&self, rhs: &Self) -> Self;

    /// `self - rhs`
    fn sub(&self, rhs: &Self) -> Self;

    /// `self * rhs`
    fn mul(&self, rhs: &Self) -> Self;

    /// `self / rhs`, failing with
    /// [`NumericError::DivisionByZero`](crate::NumericError::DivisionByZero)
    /// when `rhs` is zero.
    fn div(&self, rhs: &Self) -> Result<Self>;

    /// `-self`
    fn neg(&self) -> Self;

    /// Returns true if this value equals the representation's zero.
    fn is_zero(&self) -> bool;

    /// Lossy conversion to a 64-bit float.
    fn to_f64(&self) -> f64;

    /// Conversion from a 64-bit float.
    ///
    /// Representations without NaN or infinities reject those values with
    /// [`NumericError::NotRepresentable`](crate::NumericError::NotRepresentable).
    fn from_f64(value: f64) -> Result<Self>;
}

// ============================================================
// Vector Contract
// ============================================================

/// A fixed-length sequence of scalars of one representation.
///
/// Every index-taking method requires `i < self.len()`. Violations are
/// programming errors and panic; checked access lives on
/// [`SharedVector`](crate::SharedVector).
///
/// The elementwise methods have default bodies expressed through
/// [`get`](Vector::get) and [`set`](Vector::set). Representations with a
/// cheaper native path override them.
pub trait Vector: Sized + Send + 'static {
    /// Element representation.
    type Scalar: Scalar;

    /// Create a zero-filled vector of dimension `dim`.
    fn new(dim: usize) -> Self;

    /// Independent copy with its own storage.
    fn duplicate(&self) -> Self;

    /// Element at `i`.
    fn get(&self, i: usize) -> Self::Scalar;

    /// Overwrite the element at `i`.
    fn set(&mut self, i: usize, value: Self::Scalar);

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns true for a zero-dimension vector.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the common prefix shared with `other`.
    fn min_len(&self, other: &Self) -> usize {
        self.len().min(other.len())
    }

    /// `self[i] += other[i]`
    fn add_at(&mut self, i: usize, other: &Self) {
        let v = self.get(i).add(&other.get(i));
        self.set(i, v);
    }

    /// `self[i] -= other[i]`
    fn sub_at(&mut self, i: usize, other: &Self) {
        let v = self.get(i).sub(&other.get(i));
        self.set(i, v);
    }

    /// `self[i] *= other[i]`
    fn mul_at(&mut self, i: usize, other: &Self) {
        let v = self.get(i).mul(&other.get(i));
        self.set(i, v);
    }

    /// `self[i] /= other[i]`
    fn div_at(&mut self, i: usize, other: &Self) -> Result<()> {
        let v = self.get(i).div(&other.get(i))?;
        self.set(i, v);
        Ok(())
    }

    /// `self[i] *= t`
    fn mul_scalar_at(&mut self, i: usize, t: &Self::Scalar) {
        let v = self.get(i).mul(t);
        self.set(i, v);
    }

    /// `self[i] /= t`
    fn div_scalar_at(&mut self, i: usize, t: &Self::Scalar) -> Result<()> {
        let v = self.get(i).div(t)?;
        self.set(i, v);
        Ok(())
    }

    /// `self[i] = -self[i]`
    fn negate_at(&mut self, i: usize) {
        let v = self.get(i).neg();
        self.set(i, v);
    }
}

// ============================================================
// Register Contract
// ============================================================

/// A running accumulator deriving a statistic (the mean) from its inputs.
pub trait Register: Send + 'static {
    /// Input and statistic representation.
    type Value: Clone;

    /// Ingest one value, incrementing the contribution count.
    fn add(&mut self, value: Self::Value);

    /// Recompute the derived statistic from the accumulated state.
    ///
    /// Fails with
    /// [`NumericError::DivisionByZero`](crate::NumericError::DivisionByZero)
    /// when nothing has been added since the last clear.
    fn update(&mut self) -> Result<()>;

    /// The statistic as of the last successful [`update`](Register::update).
    fn value(&self) -> Self::Value;

    /// Number of contributions since the last clear.
    fn count(&self) -> u64;

    /// Reset sum, count and statistic to zero.
    fn clear(&mut self);
}
