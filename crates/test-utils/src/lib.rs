//! Test doubles and fixtures for exercising the `showCoord` decoder.
//!
//! The [`mocks`] module stands in for the map application: a view that
//! records every center it is given, a locator that hands that view out,
//! and a highlighter and feedback logger that keep their calls for later
//! inspection. It also scripts the reprojection step with transformers
//! that shift, fail or never finish.
//!
//! [`fixtures`] holds the raw parameter values the tests share, and the
//! macros below compare floating point coordinates with a tolerance.
//!
//! Pull it in as a dev-dependency by path and import what a test needs:
//!
//! ```ignore
//! use test_utils::{fixtures::inputs, RecordingView};
//! ```

pub mod fixtures;
pub mod mocks;

pub use mocks::*;

/// Assert that two numbers differ by no more than `epsilon`.
///
/// Operands are widened to `f64`. A NaN on either side always fails.
///
/// ```ignore
/// assert_approx_eq!(52.00001, 52.0, 1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        let diff = (left - right).abs();
        assert!(
            diff <= epsilon,
            "assertion failed: {} is not within {} of {} (off by {})",
            left,
            epsilon,
            right,
            diff
        );
    }};
}

/// Assert that two `(axis0, axis1)` pairs match within `epsilon` on both axes.
///
/// ```ignore
/// assert_coords_approx_eq!(to_mercator(0.0, 0.0), (0.0, 0.0), 1e-6);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left0, left1) = $left;
        let (right0, right1) = $right;
        $crate::assert_approx_eq!(left0, right0, $epsilon);
        $crate::assert_approx_eq!(left1, right1, $epsilon);
    }};
}

/// Assert that a center's axes match `(axis0, axis1)` within `epsilon`.
///
/// ```ignore
/// assert_center_approx_eq!(center, (52.0, 7.5), 1e-9);
/// ```
#[macro_export]
macro_rules! assert_center_approx_eq {
    ($center:expr, $expected:expr, $epsilon:expr) => {{
        let center = $center;
        $crate::assert_coords_approx_eq!((center.axis0, center.axis1), $expected, $epsilon);
    }};
}
