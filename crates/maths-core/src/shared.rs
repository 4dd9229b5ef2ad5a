//! Lock-guarded instances
//!
//! [`SharedVector`] and [`SharedRegister`] are the public face of every
//! representation. Each owns a single [`parking_lot::Mutex`] and exposes the
//! vector and register operations as `&self` methods, so instances can be
//! shared across threads behind an `Arc`.
//!
//! # Multi-instance locking
//!
//! Operations over several vectors (`add`/`sub`/`mul`/`div`, `dot`, `lerp`,
//! `slerp`) lock *every* distinct participant, not just the receiver, in
//! ascending [`VectorId`] order. A vector named more than once is locked once.
//! Two threads issuing `a.add(&[&b])` and `b.add(&[&a])` therefore acquire
//! the same locks in the same order and cannot deadlock.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};
use rustc_hash::FxHashMap;

use crate::accumulate;
use crate::algebra::{self, ElementOp, Operand, ScalarOp};
use crate::config::SlerpConfig;
use crate::contract::{Register, Vector};
use crate::error::{check_index, Result};

// ============================================================================
// Vector Identity
// ============================================================================

/// Stable, process-unique identity of a [`SharedVector`], used as the lock
/// ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VectorId(u64);

impl VectorId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

// ============================================================================
// SharedVector
// ============================================================================

/// A vector representation behind its own exclusive lock.
pub struct SharedVector<V> {
    id: VectorId,
    inner: Mutex<V>,
}

type Guards<'a, V> = FxHashMap<VectorId, MutexGuard<'a, V>>;

impl<V: Vector> SharedVector<V> {
    /// Create a zero-filled vector of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Self::from_repr(V::new(dim))
    }

    /// Wrap an existing representation.
    pub fn from_repr(repr: V) -> Self {
        Self {
            id: VectorId::next(),
            inner: Mutex::new(repr),
        }
    }

    /// Build a vector from a sequence of scalars.
    pub fn from_scalars<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V::Scalar>,
    {
        let values: Vec<V::Scalar> = values.into_iter().collect();
        let mut repr = V::new(values.len());
        for (i, value) in values.into_iter().enumerate() {
            repr.set(i, value);
        }
        Self::from_repr(repr)
    }

    /// This instance's lock ordering key.
    #[must_use]
    pub fn id(&self) -> VectorId {
        self.id
    }

    /// Independent copy with a fresh identity.
    pub fn copy(&self) -> Self {
        let repr = self.inner.lock().duplicate();
        Self::from_repr(repr)
    }

    /// Dimension.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true for a zero-dimension vector.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<V::Scalar> {
        let guard = self.inner.lock();
        check_index(index, guard.len())?;
        Ok(guard.get(index))
    }

    /// Overwrite the element at `index`.
    pub fn set(&self, index: usize, value: V::Scalar) -> Result<()> {
        let mut guard = self.inner.lock();
        check_index(index, guard.len())?;
        guard.set(index, value);
        Ok(())
    }

    /// Snapshot of all elements.
    pub fn to_vec(&self) -> Vec<V::Scalar> {
        let guard = self.inner.lock();
        (0..guard.len()).map(|i| guard.get(i)).collect()
    }

    /// Consume the wrapper and return the representation.
    pub fn into_inner(self) -> V {
        self.inner.into_inner()
    }

    /// Run `f` with read access to the representation, holding the lock.
    ///
    /// Raw contract methods called inside `f` are unchecked and panic on a
    /// bad index. Calling into another `SharedVector` from `f` takes its lock
    /// outside the id ordering and can deadlock against a concurrent
    /// multi-vector operation.
    pub fn with_repr<T>(&self, f: impl FnOnce(&V) -> T) -> T {
        f(&*self.inner.lock())
    }

    // ------------------------------------------------------------------------
    // Elementwise operations
    // ------------------------------------------------------------------------

    /// Add each operand to `self`, over the common prefix.
    pub fn add(&self, operands: &[&Self]) -> Result<&Self> {
        self.modify(ElementOp::Add, operands)
    }

    /// Subtract each operand from `self`, over the common prefix.
    pub fn sub(&self, operands: &[&Self]) -> Result<&Self> {
        self.modify(ElementOp::Sub, operands)
    }

    /// Multiply `self` by each operand elementwise, over the common prefix.
    pub fn mul(&self, operands: &[&Self]) -> Result<&Self> {
        self.modify(ElementOp::Mul, operands)
    }

    /// Divide `self` by each operand elementwise, over the common prefix.
    ///
    /// A zero divisor anywhere in a common prefix fails the whole call and
    /// leaves `self` unchanged.
    pub fn div(&self, operands: &[&Self]) -> Result<&Self> {
        self.modify(ElementOp::Div, operands)
    }

    /// Multiply every element by `t`.
    pub fn mul_scalar(&self, t: &V::Scalar) -> Result<&Self> {
        algebra::modify_scalar(&mut *self.inner.lock(), ScalarOp::Mul, t)?;
        Ok(self)
    }

    /// Divide every element by `t`; a zero `t` fails without mutating.
    pub fn div_scalar(&self, t: &V::Scalar) -> Result<&Self> {
        algebra::modify_scalar(&mut *self.inner.lock(), ScalarOp::Div, t)?;
        Ok(self)
    }

    /// Negate every element.
    pub fn negate(&self) -> &Self {
        algebra::negate(&mut *self.inner.lock());
        self
    }

    fn modify(&self, op: ElementOp, operands: &[&Self]) -> Result<&Self> {
        let (mut receiver, guards) = self.lock_with(operands);
        let sources: Vec<Operand<'_, V>> = operands
            .iter()
            .map(|operand| {
                if operand.id == self.id {
                    Operand::Receiver
                } else {
                    Operand::Other(&*guards[&operand.id])
                }
            })
            .collect();
        algebra::modify(&mut *receiver, op, &sources)?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Reductions and interpolation
    // ------------------------------------------------------------------------

    /// Dot product over the common prefix.
    pub fn dot(&self, other: &Self) -> V::Scalar {
        let (receiver, guards) = self.lock_with(&[other]);
        algebra::dot(&*receiver, self.peer(&receiver, &guards, other))
    }

    /// Linear interpolation toward `other` by `t`, as a new vector.
    pub fn lerp(&self, other: &Self, t: &V::Scalar) -> Self {
        let (receiver, guards) = self.lock_with(&[other]);
        let out = algebra::lerp(&*receiver, self.peer(&receiver, &guards, other), t);
        Self::from_repr(out)
    }

    /// Spherical interpolation toward `other` by `t`, as a new vector.
    pub fn slerp(&self, other: &Self, t: &V::Scalar) -> Result<Self> {
        self.slerp_with(other, t, &SlerpConfig::default())
    }

    /// Spherical interpolation with explicit settings.
    pub fn slerp_with(
        &self,
        other: &Self,
        t: &V::Scalar,
        config: &SlerpConfig,
    ) -> Result<Self> {
        let (receiver, guards) = self.lock_with(&[other]);
        let out = algebra::slerp_with(
            &*receiver,
            self.peer(&receiver, &guards, other),
            t,
            config,
        )?;
        Ok(Self::from_repr(out))
    }

    // ------------------------------------------------------------------------
    // Lock protocol
    // ------------------------------------------------------------------------

    /// Lock `self` and every distinct operand in ascending id order.
    ///
    /// Operands equal to `self` are not locked again; the receiver guard is
    /// returned separately so it can be borrowed mutably.
    fn lock_with<'a>(
        &'a self,
        operands: &[&'a Self],
    ) -> (MutexGuard<'a, V>, Guards<'a, V>) {
        let mut ordered: Vec<&Self> = operands
            .iter()
            .copied()
            .filter(|operand| operand.id != self.id)
            .collect();
        ordered.sort_by_key(|operand| operand.id);
        ordered.dedup_by_key(|operand| operand.id);

        let split = ordered.partition_point(|operand| operand.id < self.id);
        let mut guards = Guards::default();
        for operand in &ordered[..split] {
            guards.insert(operand.id, operand.inner.lock());
        }
        let receiver = self.inner.lock();
        for operand in &ordered[split..] {
            guards.insert(operand.id, operand.inner.lock());
        }
        (receiver, guards)
    }

    /// Resolve `other` to its locked representation.
    fn peer<'g>(
        &self,
        receiver: &'g MutexGuard<'_, V>,
        guards: &'g Guards<'_, V>,
        other: &Self,
    ) -> &'g V {
        if other.id == self.id {
            receiver
        } else {
            &guards[&other.id]
        }
    }
}

impl<V: Vector> Clone for SharedVector<V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<V: Vector + fmt::Debug> fmt::Debug for SharedVector<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedVector")
            .field("id", &self.id.0)
            .field("repr", &*self.inner.lock())
            .finish()
    }
}

// ============================================================================
// SharedRegister
// ============================================================================

/// Lifecycle of a register's derived statistic.
///
/// ```text
///            add             compute
/// +-------+ ----> +--------------+ ----> +----------+
/// | Empty |       | Accumulating |       | Computed |
/// +-------+ <---- +--------------+ <---- +----------+
///    ^      reset                   add       |
///    +----------------------------------------+
///                      reset
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterState {
    /// No contributions since construction or the last reset.
    Empty,
    /// Contributions exist; the statistic is stale.
    Accumulating,
    /// The statistic reflects every contribution so far.
    Computed,
}

struct Tracked<R> {
    register: R,
    state: RegisterState,
}

/// A register representation behind its own exclusive lock.
pub struct SharedRegister<R> {
    inner: Mutex<Tracked<R>>,
}

impl<R: Register + Default> SharedRegister<R> {
    /// Create an empty register.
    pub fn new() -> Self {
        Self::from_register(R::default())
    }
}

impl<R: Register + Default> Default for SharedRegister<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Register> SharedRegister<R> {
    /// Wrap an existing register.
    pub fn from_register(register: R) -> Self {
        let state = if register.count() == 0 {
            RegisterState::Empty
        } else {
            RegisterState::Accumulating
        };
        Self {
            inner: Mutex::new(Tracked { register, state }),
        }
    }

    /// Add every value and return the contribution count.
    pub fn accumulate<I>(&self, values: I) -> u64
    where
        I: IntoIterator<Item = R::Value>,
    {
        let mut tracked = self.inner.lock();
        let before = tracked.register.count();
        let count = accumulate::accumulate(&mut tracked.register, values);
        if count != before {
            tracked.state = RegisterState::Accumulating;
        }
        count
    }

    /// Recompute and return the mean.
    ///
    /// Fails with a division-by-zero error if nothing has been added since
    /// construction or the last reset.
    pub fn compute(&self) -> Result<R::Value> {
        let mut tracked = self.inner.lock();
        let value = accumulate::compute(&mut tracked.register)?;
        tracked.state = RegisterState::Computed;
        Ok(value)
    }

    /// Clear the register and return the prior contribution count.
    pub fn reset(&self) -> u64 {
        let mut tracked = self.inner.lock();
        tracked.state = RegisterState::Empty;
        accumulate::reset(&mut tracked.register)
    }

    /// Current contribution count.
    pub fn count(&self) -> u64 {
        self.inner.lock().register.count()
    }

    /// The statistic from the last successful compute.
    pub fn value(&self) -> R::Value {
        self.inner.lock().register.value()
    }

    /// Where the register is in its lifecycle.
    pub fn state(&self) -> RegisterState {
        self.inner.lock().state
    }

    /// Consume the wrapper and return the register.
    pub fn into_inner(self) -> R {
        self.inner.into_inner().register
    }
}

impl<R: Register + fmt::Debug> fmt::Debug for SharedRegister<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tracked = self.inner.lock();
        f.debug_struct("SharedRegister")
            .field("register", &tracked.register)
            .field("state", &tracked.state)
            .finish()
    }
}
