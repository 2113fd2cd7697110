//! Input cleaning and tokenizing for the raw `showCoord` value.

use std::borrow::Cow;

/// Decorations removed from verbose input. None of them overlap, so the
/// order of removal does not change the result.
const DECORATIONS: [&str; 10] = [
    "(", ")", "°", " ", "x:", "x=", "y:", "y=", "WKID=", "WKID:",
];

/// Strip readability decorations from `raw` when verbose input is allowed.
///
/// Labels are case-sensitive: `X:` or `wkid=` are left in place.
pub fn clean_input(raw: &str, verbose_input: bool) -> Cow<'_, str> {
    if !verbose_input {
        return Cow::Borrowed(raw);
    }

    let mut cleaned = Cow::Borrowed(raw);
    for decoration in DECORATIONS {
        if cleaned.contains(decoration) {
            cleaned = Cow::Owned(cleaned.replace(decoration, ""));
        }
    }
    cleaned
}

/// Split a cleaned value on `,`. Empty tokens are kept.
pub fn tokenize(cleaned: &str) -> Vec<String> {
    cleaned.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_disabled_returns_input() {
        let raw = "(x: 52.0°), (y: 7.5°)";
        assert!(matches!(clean_input(raw, false), Cow::Borrowed(s) if s == raw));
    }

    #[test]
    fn test_clean_plain_input_is_borrowed() {
        assert!(matches!(clean_input("52.0,7.5", true), Cow::Borrowed(_)));
    }

    #[test]
    fn test_clean_labels_and_decorations() {
        assert_eq!(
            clean_input("(x: 52.0°) , (y: 7.5°) , WKID: 4326", true),
            "52.0,7.5,4326"
        );
        assert_eq!(clean_input("x=1.5,y=2.5,WKID=25833", true), "1.5,2.5,25833");
    }

    #[test]
    fn test_clean_is_case_sensitive() {
        assert_eq!(clean_input("X:1,Y:2,wkid:4326", true), "X:1,Y:2,wkid:4326");
    }

    #[test]
    fn test_tokenize_keeps_empty_tokens() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("1,,2"), vec!["1", "", "2"]);
        assert_eq!(tokenize("1,2,"), vec!["1", "2", ""]);
    }
}
