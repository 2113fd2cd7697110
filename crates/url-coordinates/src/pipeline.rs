//! The synchronous part of a decode: raw value to map center.

use coord_common::{CoordinateResult, MapCenterPoint};

use crate::builder::build_center;
use crate::config::UrlCoordinatesConfig;
use crate::parse::{clean_input, tokenize};
use crate::validate::{check_structure, validate_values};

/// A map center decoded from a `showCoord` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedCenter {
    pub center: MapCenterPoint,
    /// The reference system came from `defaultWKID`, not from the input.
    pub wkid_defaulted: bool,
}

/// Clean, tokenize, validate and build the center for `raw`.
///
/// Pure: the same input and configuration always give the same result.
pub fn decode_center(raw: &str, config: &UrlCoordinatesConfig) -> CoordinateResult<DecodedCenter> {
    let table = config.reference_system_table();

    let cleaned = clean_input(raw, config.verbose_input);
    let default_wkid = config.use_default_wkid.then_some(config.default_wkid);
    let tokens = check_structure(tokenize(&cleaned), default_wkid)?;

    if config.validate_input {
        validate_values(&tokens, &table)?;
    }

    let center = build_center(&tokens, &table, config.default_wkid)?;
    Ok(DecodedCenter {
        center,
        wkid_defaulted: tokens.wkid_defaulted,
    })
}
