//! Concrete representations for `maths-core`
//!
//! Each module plugs a numeric representation into the core contracts:
//!
//! | Module | Scalar | Vector | Register |
//! |--------|--------|--------|----------|
//! | [`floats`] | [`floats::Scalar32`] | [`floats::Vector32`] | [`floats::FloatRegister`] |
//! | [`ints`] | - | - | [`ints::IntRegister`] |
//! | `big` | `BigScalar` | `BigVector` | `BigRegister` |
//!
//! The `big` module requires the `big` feature, which is on by default.
//!
//! None of these types carry algorithm code of their own. Every vector and
//! register operation is the single generic implementation in `maths-core`.

#![warn(missing_docs)]

#[cfg(feature = "big")]
pub mod big;
pub mod floats;
pub mod ints;

/// Named element positions.
pub mod axis {
    /// First component.
    pub const X: usize = 0;
    /// Second component.
    pub const Y: usize = 1;
    /// Third component.
    pub const Z: usize = 2;
    /// Fourth component.
    pub const W: usize = 3;
}

pub use maths_core::{NumericError, RegisterState, Result, SlerpConfig};
