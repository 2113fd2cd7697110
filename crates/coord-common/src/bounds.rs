//! Per-axis validation bounds.

use serde::{Deserialize, Serialize};

use crate::Axis;

/// Closed value ranges for the two axes of a coordinate tuple.
///
/// For geographic systems the values are degrees, for projected systems metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub axis0_min: f64,
    pub axis0_max: f64,
    pub axis1_min: f64,
    pub axis1_max: f64,
}

impl AxisBounds {
    /// No restriction on either axis.
    pub const UNRESTRICTED: AxisBounds = AxisBounds {
        axis0_min: f64::NEG_INFINITY,
        axis0_max: f64::INFINITY,
        axis1_min: f64::NEG_INFINITY,
        axis1_max: f64::INFINITY,
    };

    pub fn new(axis0_min: f64, axis0_max: f64, axis1_min: f64, axis1_max: f64) -> Self {
        Self {
            axis0_min,
            axis0_max,
            axis1_min,
            axis1_max,
        }
    }

    /// The `(min, max)` range for one axis.
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Axis0 => (self.axis0_min, self.axis0_max),
            Axis::Axis1 => (self.axis1_min, self.axis1_max),
        }
    }

    /// Check whether `value` lies inside the closed range of `axis`.
    pub fn contains(&self, axis: Axis, value: f64) -> bool {
        let (min, max) = self.range(axis);
        value >= min && value <= max
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::UNRESTRICTED
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::UNRESTRICTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = AxisBounds::new(-90.0, 90.0, -180.0, 180.0);
        assert!(bounds.contains(Axis::Axis0, 90.0));
        assert!(bounds.contains(Axis::Axis0, -90.0));
        assert!(!bounds.contains(Axis::Axis0, 90.000001));
        assert!(bounds.contains(Axis::Axis1, 180.0));
        assert!(!bounds.contains(Axis::Axis1, -180.5));
    }

    #[test]
    fn test_unrestricted() {
        let bounds = AxisBounds::UNRESTRICTED;
        assert!(bounds.is_unrestricted());
        assert!(bounds.contains(Axis::Axis0, 1e300));
        assert!(bounds.contains(Axis::Axis1, -1e300));
        assert!(!bounds.contains(Axis::Axis0, f64::NAN));
    }
}
