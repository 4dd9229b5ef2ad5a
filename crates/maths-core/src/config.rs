//! Tunables for the interpolation algorithms.

use serde::{Deserialize, Serialize};

/// Cosine above which two vectors are treated as colinear by
/// [`slerp`](crate::algebra::slerp).
pub const DEFAULT_COLINEAR_THRESHOLD: f64 = 0.999;

/// Spherical interpolation settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlerpConfig {
    /// When `dot(a, b) >= colinear_threshold`, slerp blends linearly
    /// instead of dividing by `sin(angle)`, which is unstable near zero.
    pub colinear_threshold: f64,
}

impl Default for SlerpConfig {
    fn default() -> Self {
        Self {
            colinear_threshold: DEFAULT_COLINEAR_THRESHOLD,
        }
    }
}

impl SlerpConfig {
    /// Set the colinearity cutoff.
    #[must_use]
    pub const fn with_colinear_threshold(mut self, threshold: f64) -> Self {
        self.colinear_threshold = threshold;
        self
    }

    /// Returns true if a cosine this large takes the linear fallback.
    #[must_use]
    pub fn is_colinear(&self, cos_angle: f64) -> bool {
        cos_angle >= self.colinear_threshold
    }
}
