//! Error types for the `showCoord` pipeline.

use std::time::Duration;
use thiserror::Error;

use crate::point::Axis;
use crate::wkid::Wkid;

/// Result type alias using CoordinateError.
pub type CoordinateResult<T> = Result<T, CoordinateError>;

/// Every way a decode invocation can fail. All variants are terminal.
#[derive(Debug, Error)]
pub enum CoordinateError {
    // === Structural Errors ===
    #[error("showCoord was passed but the value is empty")]
    EmptyCoordinates,

    #[error("showCoord was passed but the coordinate tuple is malformed")]
    MalformedCoordinates,

    // === Value Errors ===
    #[error("{axis} value '{value}' cannot be read as a number")]
    CoordinateNotANumber { axis: Axis, value: String },

    #[error("{axis} value {value} exceeds the limits of [{min}, {max}]")]
    AxisOutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("WKID '{0}' cannot be read as a number")]
    ReferenceSystemNotANumber(String),

    #[error("WKID '{0}' is too short")]
    ReferenceSystemTooShort(String),

    #[error("WKID '{0}' is too long")]
    ReferenceSystemTooLong(String),

    // === Map Application Errors ===
    #[error("Transform from WKID {from} to WKID {to} failed: {source}")]
    TransformFailed {
        from: Wkid,
        to: Wkid,
        #[source]
        source: TransformError,
    },

    #[error("Map view unavailable: {0}")]
    ViewUnavailable(String),
}

/// Catalog key for a [`CoordinateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyCoordinates,
    MalformedCoordinates,
    MissingWkid,
    CoordinateNotANumber,
    Axis0OutOfRange,
    Axis1OutOfRange,
    ReferenceSystemNotANumber,
    ReferenceSystemTooShort,
    ReferenceSystemTooLong,
    TransformFailed,
    ViewUnavailable,
}

impl ErrorKind {
    /// Stable label used for metrics and structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyCoordinates => "empty_coordinates",
            ErrorKind::MalformedCoordinates => "malformed_coordinates",
            ErrorKind::MissingWkid => "missing_wkid",
            ErrorKind::CoordinateNotANumber => "coordinate_nan",
            ErrorKind::Axis0OutOfRange => "axis0_out_of_range",
            ErrorKind::Axis1OutOfRange => "axis1_out_of_range",
            ErrorKind::ReferenceSystemNotANumber => "wkid_nan",
            ErrorKind::ReferenceSystemTooShort => "wkid_too_short",
            ErrorKind::ReferenceSystemTooLong => "wkid_too_long",
            ErrorKind::TransformFailed => "transform_failed",
            ErrorKind::ViewUnavailable => "view_unavailable",
        }
    }
}

impl CoordinateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoordinateError::EmptyCoordinates => ErrorKind::EmptyCoordinates,
            CoordinateError::MalformedCoordinates => ErrorKind::MalformedCoordinates,
            CoordinateError::CoordinateNotANumber { .. } => ErrorKind::CoordinateNotANumber,
            CoordinateError::AxisOutOfRange { axis: Axis::Axis0, .. } => ErrorKind::Axis0OutOfRange,
            CoordinateError::AxisOutOfRange { axis: Axis::Axis1, .. } => ErrorKind::Axis1OutOfRange,
            CoordinateError::ReferenceSystemNotANumber(_) => ErrorKind::ReferenceSystemNotANumber,
            CoordinateError::ReferenceSystemTooShort(_) => ErrorKind::ReferenceSystemTooShort,
            CoordinateError::ReferenceSystemTooLong(_) => ErrorKind::ReferenceSystemTooLong,
            CoordinateError::TransformFailed { .. } => ErrorKind::TransformFailed,
            CoordinateError::ViewUnavailable(_) => ErrorKind::ViewUnavailable,
        }
    }
}

/// Failure reported by a [`crate::CoordinateTransformer`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransformError {
    #[error("no transformation from WKID {from} to WKID {to}")]
    Unsupported { from: Wkid, to: Wkid },

    #[error("transform timed out after {0:?}")]
    TimedOut(Duration),

    #[error("transform provider error: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_kind_distinguishes_axis() {
        let axis0 = CoordinateError::AxisOutOfRange {
            axis: Axis::Axis0,
            value: 95.0,
            min: -90.0,
            max: 90.0,
        };
        let axis1 = CoordinateError::AxisOutOfRange {
            axis: Axis::Axis1,
            value: 200.0,
            min: -180.0,
            max: 180.0,
        };
        assert_eq!(axis0.kind(), ErrorKind::Axis0OutOfRange);
        assert_eq!(axis1.kind(), ErrorKind::Axis1OutOfRange);
        assert_eq!(axis0.to_string(), "axis0 value 95 exceeds the limits of [-90, 90]");
    }

    #[test]
    fn test_transform_failed_keeps_source() {
        let err = CoordinateError::TransformFailed {
            from: Wkid::WGS84,
            to: Wkid::ETRS89_UTM33N,
            source: TransformError::Provider("offline".to_string()),
        };
        assert_eq!(err.kind().as_str(), "transform_failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
