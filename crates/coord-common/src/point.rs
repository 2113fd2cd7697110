//! Map center point produced by the `showCoord` pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wkid::{AxisInterpretation, Wkid};

/// Which component of a coordinate tuple a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Axis0,
    Axis1,
}

impl Axis {
    pub fn index(&self) -> usize {
        match self {
            Axis::Axis0 => 0,
            Axis::Axis1 => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis{}", self.index())
    }
}

/// A point in a given reference system, ready to become the view center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenterPoint {
    pub axis0: f64,
    pub axis1: f64,
    pub wkid: Wkid,
    pub interpretation: AxisInterpretation,
}

impl MapCenterPoint {
    /// A latitude/longitude point.
    pub fn geographic(latitude: f64, longitude: f64, wkid: Wkid) -> Self {
        Self {
            axis0: latitude,
            axis1: longitude,
            wkid,
            interpretation: AxisInterpretation::Geographic,
        }
    }

    /// A projected x/y point.
    pub fn projected(x: f64, y: f64, wkid: Wkid) -> Self {
        Self {
            axis0: x,
            axis1: y,
            wkid,
            interpretation: AxisInterpretation::Projected,
        }
    }

    pub fn is_geographic(&self) -> bool {
        self.interpretation == AxisInterpretation::Geographic
    }

    pub fn latitude(&self) -> Option<f64> {
        self.is_geographic().then_some(self.axis0)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.is_geographic().then_some(self.axis1)
    }

    pub fn x(&self) -> Option<f64> {
        (!self.is_geographic()).then_some(self.axis0)
    }

    pub fn y(&self) -> Option<f64> {
        (!self.is_geographic()).then_some(self.axis1)
    }
}

impl fmt::Display for MapCenterPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.interpretation {
            AxisInterpretation::Geographic => write!(
                f,
                "lat={} lon={} (wkid {})",
                self.axis0, self.axis1, self.wkid
            ),
            AxisInterpretation::Projected => {
                write!(f, "x={} y={} (wkid {})", self.axis0, self.axis1, self.wkid)
            }
        }
    }
}
