//! Generic numeric core
//!
//! Capability contracts and the algorithms written against them.
//!
//! # Architecture
//!
//! One implementation of each algorithm serves every numeric representation:
//!
//! | Layer | Items |
//! |-------|-------|
//! | Contracts | [`Scalar`], [`Vector`], [`Register`] |
//! | Vector algorithms | [`algebra::modify`], [`algebra::modify_scalar`], [`algebra::negate`], [`algebra::dot`], [`algebra::lerp`], [`algebra::slerp`] |
//! | Accumulator algorithms | [`accumulate::accumulate`], [`accumulate::compute`], [`accumulate::reset`] |
//! | Locking wrappers | [`SharedVector`], [`SharedRegister`] |
//!
//! Representations (native floats, arbitrary precision, integer registers)
//! live outside this crate and plug in by implementing the contracts. The
//! stock [`Dense`] storage turns any [`Scalar`] into a [`Vector`].
//!
//! # Example
//!
//! ```ignore
//! use maths_core::{Dense, SharedVector};
//!
//! let a: SharedVector<Dense<MyScalar>> = SharedVector::from_scalars(xs);
//! let b = SharedVector::from_scalars(ys);
//! a.add(&[&b])?.mul_scalar(&half)?;
//! let d = a.dot(&b);
//! ```
//!
//! # What does NOT belong here
//!
//! - Concrete scalar types (see `maths-repr`)
//! - Matrices, decompositions, SIMD kernels

#![warn(missing_docs)]

pub mod accumulate;
pub mod algebra;
pub mod config;
pub mod contract;
pub mod dense;
pub mod error;
pub mod shared;

#[cfg(test)]
mod testing;

pub use algebra::{ElementOp, ScalarOp};
pub use config::SlerpConfig;
pub use contract::{Register, Scalar, Vector};
pub use dense::Dense;
pub use error::{NumericError, Result};
pub use shared::{RegisterState, SharedRegister, SharedVector, VectorId};
