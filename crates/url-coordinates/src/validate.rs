//! Structural and value checks on the tokenized coordinate tuple.

use coord_common::{Axis, CoordinateError, CoordinateResult, ReferenceSystemTable, Wkid};

use crate::number::{leading_float, leading_integer};

/// Minimum length of a WKID token.
pub const WKID_MIN_DIGITS: usize = 4;
/// Maximum length of a WKID token.
pub const WKID_MAX_DIGITS: usize = 5;

/// Tokens of a structurally valid tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateTokens {
    pub axis0: String,
    pub axis1: String,
    /// Reference system token, absent when the input had none and no default was applied.
    pub wkid: Option<String>,
    /// The reference system was substituted from configuration.
    pub wkid_defaulted: bool,
}

impl CoordinateTokens {
    pub fn axis(&self, axis: Axis) -> &str {
        match axis {
            Axis::Axis0 => &self.axis0,
            Axis::Axis1 => &self.axis1,
        }
    }

    /// The reference system token read as an identifier, if it is one.
    pub fn parsed_wkid(&self) -> Option<Wkid> {
        self.wkid.as_deref().and_then(read_wkid)
    }
}

/// Check the token count and fill in the default reference system.
///
/// A single token is rejected; tokens past the third are ignored.
pub fn check_structure(
    mut tokens: Vec<String>,
    default_wkid: Option<Wkid>,
) -> CoordinateResult<CoordinateTokens> {
    if tokens.len() <= 1 {
        return match tokens.first().map(String::as_str) {
            None | Some("") => Err(CoordinateError::EmptyCoordinates),
            Some(_) => Err(CoordinateError::MalformedCoordinates),
        };
    }

    tokens.truncate(3);
    let mut iter = tokens.into_iter();
    let axis0 = iter.next().unwrap_or_default();
    let axis1 = iter.next().unwrap_or_default();

    let (wkid, wkid_defaulted) = match iter.next() {
        Some(token) => (Some(token), false),
        None => match default_wkid {
            Some(default) => (Some(default.to_string()), true),
            None => (None, false),
        },
    };

    Ok(CoordinateTokens {
        axis0,
        axis1,
        wkid,
        wkid_defaulted,
    })
}

/// Validate both coordinates and the reference system token, in that order.
pub fn validate_values(
    tokens: &CoordinateTokens,
    table: &ReferenceSystemTable,
) -> CoordinateResult<()> {
    let bounds = table.resolve(tokens.parsed_wkid()).bounds;

    for axis in [Axis::Axis0, Axis::Axis1] {
        let value = parse_coordinate(tokens.axis(axis), axis)?;
        if !bounds.contains(axis, value) {
            let (min, max) = bounds.range(axis);
            return Err(CoordinateError::AxisOutOfRange {
                axis,
                value,
                min,
                max,
            });
        }
    }

    if let Some(token) = tokens.wkid.as_deref() {
        parse_wkid(token)?;
    }

    Ok(())
}

/// Parse a coordinate value from its leading number.
///
/// Trailing characters are ignored; a token without a finite leading number
/// is not a number.
pub fn parse_coordinate(token: &str, axis: Axis) -> CoordinateResult<f64> {
    leading_float(token).ok_or_else(|| CoordinateError::CoordinateNotANumber {
        axis,
        value: token.to_string(),
    })
}

/// Read the identifier at the start of a WKID token, without length checks.
///
/// Negative values are not identifiers.
pub fn read_wkid(token: &str) -> Option<Wkid> {
    leading_integer(token)
        .and_then(|value| u32::try_from(value).ok())
        .map(Wkid)
}

/// Parse a WKID token, enforcing the 4 to 5 character length.
///
/// The length is taken from the whole token, so `"4326 "` passes while
/// `"4326  "` is too long.
pub fn parse_wkid(token: &str) -> CoordinateResult<Wkid> {
    let not_a_number = || CoordinateError::ReferenceSystemNotANumber(token.to_string());
    let value = leading_integer(token).ok_or_else(not_a_number)?;

    let length = token.chars().count();
    if length < WKID_MIN_DIGITS {
        return Err(CoordinateError::ReferenceSystemTooShort(token.to_string()));
    }
    if length > WKID_MAX_DIGITS {
        return Err(CoordinateError::ReferenceSystemTooLong(token.to_string()));
    }

    u32::try_from(value).map(Wkid).map_err(|_| not_a_number())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_token_errors() {
        assert!(matches!(
            check_structure(tokens(&[""]), Some(Wkid::WGS84)),
            Err(CoordinateError::EmptyCoordinates)
        ));
        assert!(matches!(
            check_structure(tokens(&["abc"]), Some(Wkid::WGS84)),
            Err(CoordinateError::MalformedCoordinates)
        ));
    }

    #[test]
    fn test_two_tokens_get_default() {
        let t = check_structure(tokens(&["52.0", "7.5"]), Some(Wkid::ETRS89_UTM33N)).unwrap();
        assert_eq!(t.wkid.as_deref(), Some("25833"));
        assert!(t.wkid_defaulted);
    }

    #[test]
    fn test_two_tokens_without_default() {
        let t = check_structure(tokens(&["52.0", "7.5"]), None).unwrap();
        assert_eq!(t.wkid, None);
        assert!(!t.wkid_defaulted);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let t = check_structure(tokens(&["1", "2", "4326", "junk", ""]), None).unwrap();
        assert_eq!(t.axis0, "1");
        assert_eq!(t.axis1, "2");
        assert_eq!(t.wkid.as_deref(), Some("4326"));
    }

    #[test]
    fn test_parse_wkid_lengths() {
        assert_eq!(parse_wkid("4326").unwrap(), Wkid::WGS84);
        assert_eq!(parse_wkid("25833").unwrap(), Wkid::ETRS89_UTM33N);
        assert!(matches!(parse_wkid("123"), Err(CoordinateError::ReferenceSystemTooShort(_))));
        assert!(matches!(parse_wkid("123456"), Err(CoordinateError::ReferenceSystemTooLong(_))));
        assert!(matches!(
            parse_wkid("123456789012345678901234"),
            Err(CoordinateError::ReferenceSystemTooLong(_))
        ));
        assert!(matches!(parse_wkid("abcd"), Err(CoordinateError::ReferenceSystemNotANumber(_))));
        assert!(matches!(parse_wkid(""), Err(CoordinateError::ReferenceSystemNotANumber(_))));
        assert!(matches!(parse_wkid("-4326"), Err(CoordinateError::ReferenceSystemNotANumber(_))));
    }

    #[test]
    fn test_parse_wkid_reads_leading_digits() {
        assert_eq!(parse_wkid("4326 ").unwrap(), Wkid::WGS84);
        assert_eq!(parse_wkid(" 4326").unwrap(), Wkid::WGS84);
        assert_eq!(parse_wkid("43ab").unwrap(), Wkid(43));
        assert!(matches!(parse_wkid("4326  "), Err(CoordinateError::ReferenceSystemTooLong(_))));
        assert!(matches!(parse_wkid("12 "), Err(CoordinateError::ReferenceSystemTooShort(_))));
        assert!(matches!(parse_wkid("EPSG:4326"), Err(CoordinateError::ReferenceSystemNotANumber(_))));
    }

    #[test]
    fn test_read_wkid() {
        assert_eq!(read_wkid("25833"), Some(Wkid::ETRS89_UTM33N));
        assert_eq!(read_wkid("4326 "), Some(Wkid::WGS84));
        assert_eq!(read_wkid("-4326"), None);
        assert_eq!(read_wkid("EPSG"), None);
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("-12.5", Axis::Axis0).unwrap(), -12.5);
        assert_eq!(parse_coordinate("1e3", Axis::Axis1).unwrap(), 1000.0);
        assert_eq!(parse_coordinate(" 7.5", Axis::Axis1).unwrap(), 7.5);
        assert_eq!(parse_coordinate("52.0°", Axis::Axis0).unwrap(), 52.0);
        assert_eq!(parse_coordinate("1.0abc", Axis::Axis0).unwrap(), 1.0);
        for bad in ["", "abc", "NaN", "inf", "°52.0"] {
            assert!(matches!(
                parse_coordinate(bad, Axis::Axis1),
                Err(CoordinateError::CoordinateNotANumber { axis: Axis::Axis1, .. })
            ));
        }
    }

    #[test]
    fn test_coordinate_checked_before_wkid() {
        let t = check_structure(tokens(&["abc", "7.5", "12"]), None).unwrap();
        let err = validate_values(&t, &ReferenceSystemTable::default()).unwrap_err();
        assert!(matches!(err, CoordinateError::CoordinateNotANumber { axis: Axis::Axis0, .. }));
    }

    #[test]
    fn test_axis1_out_of_range_for_wgs84() {
        let t = check_structure(tokens(&["45", "181", "4326"]), None).unwrap();
        let err = validate_values(&t, &ReferenceSystemTable::default()).unwrap_err();
        match err {
            CoordinateError::AxisOutOfRange { axis, min, max, .. } => {
                assert_eq!(axis, Axis::Axis1);
                assert_eq!((min, max), (-180.0, 180.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bounds_follow_padded_wkid() {
        let t = check_structure(tokens(&["95", "10", "4326 "]), None).unwrap();
        let err = validate_values(&t, &ReferenceSystemTable::default()).unwrap_err();
        assert!(matches!(err, CoordinateError::AxisOutOfRange { axis: Axis::Axis0, .. }));
    }

    #[test]
    fn test_unknown_wkid_is_unrestricted() {
        let t = check_structure(tokens(&["1000000", "-5000000", "3857"]), None).unwrap();
        assert!(validate_values(&t, &ReferenceSystemTable::default()).is_ok());
    }
}
