//! Representation-independent vector algebra
//!
//! Every routine here is written against the [`Vector`] and [`Scalar`]
//! contracts only. Callers normally reach them through
//! [`SharedVector`](crate::SharedVector), which acquires the locks first.
//!
//! # Length policy
//!
//! Elementwise operations between vectors of different dimension operate on
//! the common prefix `0..min(result.len(), operand.len())`. Elements past the
//! shorter length are left untouched; this is not an error.
//!
//! # Division policy
//!
//! Division fails with [`NumericError::DivisionByZero`] on the first zero
//! divisor. The passes run on a staged copy that replaces the result only on
//! success, so a failed call leaves the result vector exactly as it was.

use tracing::{debug, trace};

use crate::config::SlerpConfig;
use crate::contract::{Scalar, Vector};
use crate::error::{NumericError, Result};

// ============================================================
// Operation Selectors
// ============================================================

/// Elementwise vector/vector operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementOp {
    /// `result[i] += operand[i]`
    Add,
    /// `result[i] -= operand[i]`
    Sub,
    /// `result[i] *= operand[i]`
    Mul,
    /// `result[i] /= operand[i]`
    Div,
}

/// Vector/scalar broadcast operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    /// `result[i] *= t`
    Mul,
    /// `result[i] /= t`
    Div,
}

/// An operand of [`modify`].
///
/// `Receiver` stands for the result vector itself, which cannot be borrowed
/// immutably while it is being written. It is read as the receiver's state at
/// the start of its pass, so `a += a` doubles every element.
#[derive(Debug)]
pub enum Operand<'a, V> {
    /// A vector distinct from the result.
    Other(&'a V),
    /// The result vector itself.
    Receiver,
}

impl<V> Clone for Operand<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Operand<'_, V> {}

// ============================================================
// Elementwise Modification
// ============================================================

/// Apply `op` between `result` and each operand in turn, in place.
///
/// For each operand only the first `result.min_len(operand)` elements are
/// touched. [`ElementOp::Div`] runs every pass on a staged copy and writes it
/// back only when all passes succeed, so a zero divisor leaves `result`
/// unchanged.
pub fn modify<V: Vector>(
    result: &mut V,
    op: ElementOp,
    operands: &[Operand<'_, V>],
) -> Result<()> {
    trace!(?op, dim = result.len(), operands = operands.len(), "modify");

    if op != ElementOp::Div {
        return apply_all(result, op, operands);
    }

    for operand in operands {
        if let Operand::Other(v) = operand {
            check_divisors(result, v)?;
        }
    }

    // A receiver divisor is only known once the earlier passes have run.
    let mut staged = result.duplicate();
    apply_all(&mut staged, op, operands).map_err(|err| {
        debug!(%err, "division rejected, result left unchanged");
        err
    })?;
    *result = staged;
    Ok(())
}

fn apply_all<V: Vector>(
    result: &mut V,
    op: ElementOp,
    operands: &[Operand<'_, V>],
) -> Result<()> {
    for operand in operands {
        match operand {
            Operand::Other(v) => apply(result, op, v)?,
            Operand::Receiver => {
                let snapshot = result.duplicate();
                apply(result, op, &snapshot)?;
            }
        }
    }
    Ok(())
}

/// Fail if any element of `divisor` within the common prefix is zero.
fn check_divisors<V: Vector>(result: &V, divisor: &V) -> Result<()> {
    let n = result.min_len(divisor);
    match (0..n).find(|&i| divisor.get(i).is_zero()) {
        Some(i) => {
            debug!(index = i, "zero divisor rejected");
            Err(NumericError::division_by_zero("vector division"))
        }
        None => Ok(()),
    }
}

fn apply<V: Vector>(result: &mut V, op: ElementOp, operand: &V) -> Result<()> {
    let n = result.min_len(operand);
    for i in 0..n {
        match op {
            ElementOp::Add => result.add_at(i, operand),
            ElementOp::Sub => result.sub_at(i, operand),
            ElementOp::Mul => result.mul_at(i, operand),
            ElementOp::Div => result.div_at(i, operand)?,
        }
    }
    Ok(())
}

/// Multiply or divide every element of `result` by `t`, in place.
///
/// Division by a zero `t` fails before any element is mutated.
pub fn modify_scalar<V: Vector>(result: &mut V, op: ScalarOp, t: &V::Scalar) -> Result<()> {
    trace!(?op, dim = result.len(), "modify_scalar");

    match op {
        ScalarOp::Mul => {
            for i in 0..result.len() {
                result.mul_scalar_at(i, t);
            }
        }
        ScalarOp::Div => {
            if t.is_zero() {
                debug!("zero scalar divisor rejected");
                return Err(NumericError::division_by_zero("vector/scalar division"));
            }
            for i in 0..result.len() {
                result.div_scalar_at(i, t)?;
            }
        }
    }
    Ok(())
}

/// Negate every element of `result` in place.
pub fn negate<V: Vector>(result: &mut V) {
    for i in 0..result.len() {
        result.negate_at(i);
    }
}

// ============================================================
// Reductions
// ============================================================

/// Dot product over the common prefix of `a` and `b`.
///
/// Starts from [`Scalar::zero`], so vectors with no common prefix give zero.
pub fn dot<V: Vector>(a: &V, b: &V) -> V::Scalar {
    let n = a.min_len(b);
    (0..n).fold(V::Scalar::zero(), |acc, i| acc.add(&a.get(i).mul(&b.get(i))))
}

// ============================================================
// Interpolation
// ============================================================

/// Linear interpolation `a + (b - a) * t` into a new vector.
///
/// Neither input is modified. The result has `b`'s dimension; elements past
/// `a`'s length keep `b`'s values scaled by `t`.
pub fn lerp<V: Vector>(a: &V, b: &V, t: &V::Scalar) -> V {
    trace!(dim = a.min_len(b), "lerp");

    let mut out = b.duplicate();
    for i in 0..out.min_len(a) {
        out.sub_at(i, a);
    }
    for i in 0..out.len() {
        out.mul_scalar_at(i, t);
    }
    for i in 0..out.min_len(a) {
        out.add_at(i, a);
    }
    out
}

/// Spherical interpolation between `a` and `b` using the default
/// [`SlerpConfig`].
pub fn slerp<V: Vector>(a: &V, b: &V, t: &V::Scalar) -> Result<V> {
    slerp_with(a, b, t, &SlerpConfig::default())
}

/// Spherical interpolation between `a` and `b` into a new vector.
///
/// The blend weights are computed in `f64` because they need `acos` and
/// `sin`; everything else stays in the vector's own representation. When
/// `dot(a, b)` reaches `config.colinear_threshold` the weights fall back to
/// `1 - t` and `t`.
///
/// Both inputs are copied before scaling and are never modified. The result
/// has `a`'s dimension; `b` contributes only over the common prefix.
pub fn slerp_with<V: Vector>(
    a: &V,
    b: &V,
    t: &V::Scalar,
    config: &SlerpConfig,
) -> Result<V> {
    let cos_angle = dot(a, b).to_f64();
    let (scale0, scale1) = slerp_weights(cos_angle, t.to_f64(), config);

    let s0 = V::Scalar::from_f64(scale0)?;
    let s1 = V::Scalar::from_f64(scale1)?;

    let mut out = a.duplicate();
    modify_scalar(&mut out, ScalarOp::Mul, &s0)?;
    let mut tail = b.duplicate();
    modify_scalar(&mut tail, ScalarOp::Mul, &s1)?;
    modify(&mut out, ElementOp::Add, &[Operand::Other(&tail)])?;
    Ok(out)
}

/// Blend weights `(scale0, scale1)` for interpolation factor `t`.
pub fn slerp_weights(cos_angle: f64, t: f64, config: &SlerpConfig) -> (f64, f64) {
    if config.is_colinear(cos_angle) {
        trace!(cos_angle, "slerp colinear fallback");
        return (1.0 - t, t);
    }

    // Non-unit inputs can push the cosine below -1.
    let angle = cos_angle.clamp(-1.0, 1.0).acos();
    let recip_sin = 1.0 / angle.sin();
    trace!(cos_angle, angle, "slerp");
    (
        ((1.0 - t) * angle).sin() * recip_sin,
        (t * angle).sin() * recip_sin,
    )
}
