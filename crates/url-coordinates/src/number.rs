//! Lenient number reading for coordinate and WKID tokens.
//!
//! Leading whitespace is skipped and the longest numeric prefix is read.
//! Anything after it (a trailing space, a `°`, a unit) is ignored, so
//! `" 7.5"` and `"52.0°"` both read as numbers. A token without a numeric
//! prefix reads as `None`.

/// Read the leading decimal number of `token`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Results that are not finite read as `None`.
pub fn leading_float(token: &str) -> Option<f64> {
    let s = token.trim_start();
    let bytes = s.as_bytes();

    let mut end = sign_len(bytes);
    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits + frac_digits == 0 {
            return None;
        }
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digit_run(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Read the leading decimal integer of `token`.
///
/// Values beyond the `i64` range saturate.
pub fn leading_integer(token: &str) -> Option<i64> {
    let s = token.trim_start();
    let bytes = s.as_bytes();

    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }

    let negative = bytes.first() == Some(&b'-');
    let saturated = if negative { i64::MIN } else { i64::MAX };
    Some(s[..sign + digits].parse::<i64>().unwrap_or(saturated))
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_float_plain_values() {
        assert_eq!(leading_float("52.0"), Some(52.0));
        assert_eq!(leading_float("-12.5"), Some(-12.5));
        assert_eq!(leading_float("+2"), Some(2.0));
        assert_eq!(leading_float("1e3"), Some(1000.0));
        assert_eq!(leading_float("2.5E-1"), Some(0.25));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("5."), Some(5.0));
    }

    #[test]
    fn test_leading_float_ignores_surroundings() {
        assert_eq!(leading_float(" 7.5"), Some(7.5));
        assert_eq!(leading_float("\t7.5 "), Some(7.5));
        assert_eq!(leading_float("52.0°"), Some(52.0));
        assert_eq!(leading_float("1.0abc"), Some(1.0));
        assert_eq!(leading_float("1e"), Some(1.0));
        assert_eq!(leading_float("1e+"), Some(1.0));
        assert_eq!(leading_float("3.5.1"), Some(3.5));
    }

    #[test]
    fn test_leading_float_without_number() {
        for token in ["", " ", "abc", "-", ".", "-.", "e5", "x:52.0", "NaN", "Infinity", "inf"] {
            assert_eq!(leading_float(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_leading_float_overflow_is_not_a_number() {
        assert_eq!(leading_float("1e400"), None);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("4326"), Some(4326));
        assert_eq!(leading_integer(" 4326"), Some(4326));
        assert_eq!(leading_integer("4326 "), Some(4326));
        assert_eq!(leading_integer("43ab"), Some(43));
        assert_eq!(leading_integer("25833.7"), Some(25833));
        assert_eq!(leading_integer("-4326"), Some(-4326));
        assert_eq!(leading_integer("EPSG"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn test_leading_integer_saturates() {
        assert_eq!(leading_integer("123456789012345678901234"), Some(i64::MAX));
        assert_eq!(leading_integer("-123456789012345678901234"), Some(i64::MIN));
    }
}
