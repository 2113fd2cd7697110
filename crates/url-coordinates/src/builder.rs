//! Builds the map center from validated tokens.

use coord_common::{
    Axis, AxisInterpretation, CoordinateError, CoordinateResult, MapCenterPoint,
    ReferenceSystemTable, Wkid,
};

use crate::validate::{parse_coordinate, read_wkid, CoordinateTokens};

/// Turn tokens into a [`MapCenterPoint`].
///
/// The reference system's table entry decides whether the axes are read as
/// latitude/longitude or projected x/y. Without a WKID token the point is
/// placed in `default_wkid`. Range checks are not repeated here.
pub fn build_center(
    tokens: &CoordinateTokens,
    table: &ReferenceSystemTable,
    default_wkid: Wkid,
) -> CoordinateResult<MapCenterPoint> {
    let axis0 = parse_coordinate(&tokens.axis0, Axis::Axis0)?;
    let axis1 = parse_coordinate(&tokens.axis1, Axis::Axis1)?;

    let wkid = match tokens.wkid.as_deref() {
        Some(token) => read_wkid(token)
            .ok_or_else(|| CoordinateError::ReferenceSystemNotANumber(token.to_string()))?,
        None => default_wkid,
    };

    let center = match table.resolve(Some(wkid)).interpretation {
        AxisInterpretation::Projected => MapCenterPoint::projected(axis0, axis1, wkid),
        AxisInterpretation::Geographic => MapCenterPoint::geographic(axis0, axis1, wkid),
    };
    Ok(center)
}
