//! Common `showCoord` inputs for tests.

/// Raw parameter values.
pub mod inputs {
    /// Münster, WGS84 latitude/longitude without WKID
    pub const PLAIN_PAIR: &str = "52.0,7.5";

    /// Same point with explicit WKID
    pub const PLAIN_TRIPLE: &str = "52.0,7.5,4326";

    /// Same point, decorated for readability
    pub const VERBOSE_TRIPLE: &str = "(x: 52.0°) , (y: 7.5°) , WKID: 4326";

    /// Equals-sign label variant
    pub const VERBOSE_EQUALS: &str = "x=52.0,y=7.5,WKID=4326";

    /// Same point with stray spaces and degree signs, left in place when
    /// verbose input is off
    pub const SPACED_TRIPLE: &str = "52.0, 7.5, 4326";
    pub const DEGREE_TRIPLE: &str = "52.0°,7.5°,4326";
    pub const TRAILING_SPACE_TRIPLE: &str = "52.0,7.5,4326 ";

    /// Projected ETRS89 / UTM 33N coordinate
    pub const UTM33N: &str = "500000,6000000,25833";

    /// Latitude outside [-90, 90]
    pub const LATITUDE_OUT_OF_RANGE: &str = "95.0,10.0,4326";

    /// Longitude outside [-180, 180]
    pub const LONGITUDE_OUT_OF_RANGE: &str = "45.0,190.0,4326";

    pub const EMPTY: &str = "";
    pub const MALFORMED: &str = "abc";
    pub const NOT_A_NUMBER: &str = "north,7.5,4326";
    pub const WKID_NOT_A_NUMBER: &str = "52.0,7.5,EPSG";
    pub const WKID_TOO_SHORT: &str = "1.0,2.0,123";
    pub const WKID_TOO_LONG: &str = "1.0,2.0,123456";
}

/// URL parameter maps as a host would hand them over.
pub mod params {
    use std::collections::HashMap;

    /// Build a parameter map from key/value pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// A map holding only `showCoord`.
    pub fn show_coord(value: &str) -> HashMap<String, String> {
        from_pairs(&[("showCoord", value)])
    }
}
