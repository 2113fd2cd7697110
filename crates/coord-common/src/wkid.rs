//! Well-known reference system identifiers and the per-system policy table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::bounds::AxisBounds;

/// A well-known identifier (WKID) naming a coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wkid(pub u32);

impl Wkid {
    /// WGS84 geographic (degrees)
    pub const WGS84: Wkid = Wkid(4326);
    /// Web Mercator (metres)
    pub const WEB_MERCATOR: Wkid = Wkid(3857);
    /// ETRS89 / UTM zone 33N (metres)
    pub const ETRS89_UTM33N: Wkid = Wkid(25833);
}

impl fmt::Display for Wkid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the two axes of a coordinate tuple are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisInterpretation {
    /// axis0 = latitude, axis1 = longitude
    #[default]
    Geographic,
    /// axis0 = x (easting), axis1 = y (northing)
    Projected,
}

/// Validation bounds and axis interpretation for one reference system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSystemPolicy {
    pub bounds: AxisBounds,
    #[serde(default)]
    pub interpretation: AxisInterpretation,
}

impl ReferenceSystemPolicy {
    /// Policy applied to identifiers missing from the table.
    pub const UNKNOWN: ReferenceSystemPolicy = ReferenceSystemPolicy {
        bounds: AxisBounds::UNRESTRICTED,
        interpretation: AxisInterpretation::Geographic,
    };

    pub fn new(bounds: AxisBounds, interpretation: AxisInterpretation) -> Self {
        Self {
            bounds,
            interpretation,
        }
    }
}

/// Lookup from WKID to its [`ReferenceSystemPolicy`].
///
/// New reference systems are added here rather than in the validators.
/// Note that the 4326 entry keeps axis0 in [-90, 90] and axis1 in
/// [-180, 180]; axis0 is read as latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSystemTable {
    entries: HashMap<Wkid, ReferenceSystemPolicy>,
}

impl Default for ReferenceSystemTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            Wkid::WGS84,
            ReferenceSystemPolicy::new(
                AxisBounds::new(-90.0, 90.0, -180.0, 180.0),
                AxisInterpretation::Geographic,
            ),
        );
        entries.insert(
            Wkid::ETRS89_UTM33N,
            ReferenceSystemPolicy::new(
                AxisBounds::new(-2_465_144.80, 4_102_893.55, 776_625.76, 9_408_555.22),
                AxisInterpretation::Projected,
            ),
        );
        Self { entries }
    }
}

impl ReferenceSystemTable {
    /// A table with no entries; every identifier resolves to [`ReferenceSystemPolicy::UNKNOWN`].
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace the policy for `wkid`. Returns the previous policy, if any.
    pub fn insert(
        &mut self,
        wkid: Wkid,
        policy: ReferenceSystemPolicy,
    ) -> Option<ReferenceSystemPolicy> {
        self.entries.insert(wkid, policy)
    }

    pub fn get(&self, wkid: Wkid) -> Option<&ReferenceSystemPolicy> {
        self.entries.get(&wkid)
    }

    /// Resolve the policy for an optional identifier. Absent or unknown
    /// identifiers get unrestricted bounds and a geographic reading.
    pub fn resolve(&self, wkid: Option<Wkid>) -> ReferenceSystemPolicy {
        wkid.and_then(|w| self.entries.get(&w).copied())
            .unwrap_or(ReferenceSystemPolicy::UNKNOWN)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<(Wkid, ReferenceSystemPolicy)> for ReferenceSystemTable {
    fn extend<T: IntoIterator<Item = (Wkid, ReferenceSystemPolicy)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_entries() {
        let table = ReferenceSystemTable::default();
        assert_eq!(table.len(), 2);

        let wgs84 = table.get(Wkid::WGS84).unwrap();
        assert_eq!(wgs84.interpretation, AxisInterpretation::Geographic);
        assert_eq!(wgs84.bounds.axis0_min, -90.0);
        assert_eq!(wgs84.bounds.axis1_max, 180.0);

        let utm = table.get(Wkid::ETRS89_UTM33N).unwrap();
        assert_eq!(utm.interpretation, AxisInterpretation::Projected);
        assert_eq!(utm.bounds.axis1_min, 776_625.76);
    }

    #[test]
    fn test_resolve_unknown_is_unrestricted() {
        let table = ReferenceSystemTable::default();
        assert_eq!(table.resolve(Some(Wkid(3857))), ReferenceSystemPolicy::UNKNOWN);
        assert_eq!(table.resolve(None), ReferenceSystemPolicy::UNKNOWN);
    }

    #[test]
    fn test_wkid_serde_transparent() {
        let wkid: Wkid = serde_json::from_str("25833").unwrap();
        assert_eq!(wkid, Wkid::ETRS89_UTM33N);
        assert_eq!(serde_json::to_string(&Wkid::WGS84).unwrap(), "4326");
    }
}
