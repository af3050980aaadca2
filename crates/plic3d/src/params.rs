//! Run configuration for the grid drivers.

use serde::{Deserialize, Serialize};

/// Driver parameters.
///
/// Deserializes with defaults for any missing field, so a solver can keep
/// these next to its own settings and only override what it needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VofParams {
    /// Sweep k-planes on the rayon pool instead of serially.
    pub parallel: bool,
    /// Fractions within this distance of 0 or 1 count as pure cells during
    /// reconstruction.
    pub mixed_tolerance: f64,
}

impl Default for VofParams {
    fn default() -> Self {
        Self {
            parallel: true,
            mixed_tolerance: 1e-8,
        }
    }
}

impl VofParams {
    /// Serial sweep, otherwise default.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// True if `c` is a mixed (interface) cell under this tolerance.
    #[inline]
    pub fn is_mixed(&self, c: f64) -> bool {
        c > self.mixed_tolerance && c < 1.0 - self.mixed_tolerance
    }
}
