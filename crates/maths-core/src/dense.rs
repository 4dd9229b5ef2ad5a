//! Stock vector storage for any scalar representation.
//!
//! [`Dense<S>`] implements [`Vector`] using only the [`Scalar`] contract, so a
//! new scalar type gets a working vector without writing any element code.

use std::fmt;
use std::ops::Index;

use crate::contract::{Scalar, Vector};

/// A contiguous vector of scalar values.
#[derive(Clone, PartialEq)]
pub struct Dense<S> {
    data: Vec<S>,
}

impl<S> Dense<S> {
    /// Wrap an existing `Vec`.
    pub fn from_vec(data: Vec<S>) -> Self {
        Self { data }
    }

    /// Slice view of the elements.
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Convert into the underlying `Vec`.
    pub fn into_vec(self) -> Vec<S> {
        self.data
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.data.iter()
    }
}

impl<S: Scalar> Vector for Dense<S> {
    type Scalar = S;

    fn new(dim: usize) -> Self {
        Self {
            data: vec![S::zero(); dim],
        }
    }

    fn duplicate(&self) -> Self {
        self.clone()
    }

    fn get(&self, i: usize) -> S {
        self.data[i].clone()
    }

    fn set(&mut self, i: usize, value: S) {
        self.data[i] = value;
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<S> From<Vec<S>> for Dense<S> {
    fn from(data: Vec<S>) -> Self {
        Self::from_vec(data)
    }
}

impl<S> Index<usize> for Dense<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<S: fmt::Debug> fmt::Debug for Dense<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dense({:?})", self.data)
    }
}
