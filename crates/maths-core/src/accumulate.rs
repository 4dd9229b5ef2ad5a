//! Representation-independent accumulator routines.
//!
//! These drive any [`Register`] through its contract. Locking and state
//! tracking are layered on top by [`SharedRegister`](crate::SharedRegister).

use tracing::{debug, trace};

use crate::contract::Register;
use crate::error::Result;

/// Feed every value into `register` and return the resulting count.
///
/// An empty input leaves the register untouched.
pub fn accumulate<R, I>(register: &mut R, values: I) -> u64
where
    R: Register,
    I: IntoIterator<Item = R::Value>,
{
    for value in values {
        register.add(value);
    }
    let count = register.count();
    trace!(count, "accumulate");
    count
}

/// Recompute the register's statistic and return it.
///
/// Fails with a division-by-zero error when the register is empty.
pub fn compute<R: Register>(register: &mut R) -> Result<R::Value> {
    if let Err(err) = register.update() {
        debug!(%err, "compute on empty register");
        return Err(err);
    }
    Ok(register.value())
}

/// Clear the register, returning the number of contributions it held.
///
/// The return value is the prior *count*, not the prior mean.
pub fn reset<R: Register>(register: &mut R) -> u64 {
    let prior = register.count();
    register.clear();
    trace!(prior, "reset");
    prior
}
