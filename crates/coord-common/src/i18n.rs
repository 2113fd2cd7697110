//! Localized user-facing messages for decode failures.

use serde::{Deserialize, Serialize};

use crate::error::{CoordinateError, ErrorKind};

/// Prefix put in front of every message sent to a feedback logger.
pub const FEEDBACK_PREFIX: &str = "URL-Coordinates: ";

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "de" | "de-de" => Ok(Locale::De),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Maps error kinds to human-readable text for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::for_locale(Locale::En)
    }
}

impl MessageCatalog {
    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn message(&self, kind: ErrorKind) -> &'static str {
        match self.locale {
            Locale::En => english(kind),
            Locale::De => german(kind),
        }
    }

    /// Full message for an error. Range violations carry the violated limits.
    pub fn describe(&self, error: &CoordinateError) -> String {
        let base = self.message(error.kind());
        match error {
            CoordinateError::AxisOutOfRange { min, max, .. } => {
                format!("{} [{}, {}].", base, min, max)
            }
            CoordinateError::TransformFailed { source, .. } => format!("{} ({})", base, source),
            _ => base.to_string(),
        }
    }

    /// Message as sent to a feedback logger.
    pub fn feedback(&self, error: &CoordinateError) -> String {
        format!("{}{}", FEEDBACK_PREFIX, self.describe(error))
    }

    /// Feedback line for a substituted default reference system.
    pub fn missing_wkid_feedback(&self) -> String {
        format!("{}{}", FEEDBACK_PREFIX, self.message(ErrorKind::MissingWkid))
    }
}

fn english(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::EmptyCoordinates => {
            "Parameter Error: showCoord was passed as URL parameter but the value is empty."
        }
        ErrorKind::MalformedCoordinates => {
            "Parameter Error: showCoord was passed as URL parameter but the coordinate tuple is malformed."
        }
        ErrorKind::MissingWkid => {
            "Parameter Warning: showCoord was passed as URL parameter but the WKID is missing. Applying default."
        }
        ErrorKind::CoordinateNotANumber => {
            "Value Error: A provided coordinate value cannot be read as number."
        }
        ErrorKind::Axis0OutOfRange => "Value Error: The provided x value exceeds the limits of",
        ErrorKind::Axis1OutOfRange => "Value Error: The provided y value exceeds the limits of",
        ErrorKind::ReferenceSystemNotANumber => {
            "Value Error: The provided WKID value cannot be read as number."
        }
        ErrorKind::ReferenceSystemTooShort => "Value Error: The provided WKID is too short.",
        ErrorKind::ReferenceSystemTooLong => "Value Error: The provided WKID is too long.",
        ErrorKind::TransformFailed => {
            "Map Error: The coordinate could not be transformed into the reference system of the map."
        }
        ErrorKind::ViewUnavailable => "Map Error: No map view became available.",
    }
}

fn german(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::EmptyCoordinates => {
            "Parameter Error: showCoord wurde als URL Parameter angegeben, aber der Wert ist leer."
        }
        ErrorKind::MalformedCoordinates => {
            "Parameter Error: showCoord wurde als URL Parameter angegeben, aber das Koordinaten-Tupel ist inkorrekt formatiert."
        }
        ErrorKind::MissingWkid => {
            "Parameter Warning: showCoord wurde als URL Parameter angegeben, aber es konnte keine WKID gefunden werden. Nutze Standardwert."
        }
        ErrorKind::CoordinateNotANumber => {
            "Value Error: Eine der angegebenen Koordinaten kann nicht als Zahl interpretiert werden."
        }
        ErrorKind::Axis0OutOfRange => {
            "Value Error: Der angegebene x Wert liegt nicht im Wertebereich von"
        }
        ErrorKind::Axis1OutOfRange => {
            "Value Error: Der angegebene y Wert liegt nicht im Wertebereich von"
        }
        ErrorKind::ReferenceSystemNotANumber => {
            "Value Error: Die angegebene WKID kann nicht als Zahl interpretiert werden."
        }
        ErrorKind::ReferenceSystemTooShort => "Value Error: Die angegebene WKID ist zu kurz.",
        ErrorKind::ReferenceSystemTooLong => "Value Error: Die angegebene WKID ist zu lang.",
        ErrorKind::TransformFailed => {
            "Map Error: Die Koordinate konnte nicht in das Bezugssystem der Karte transformiert werden."
        }
        ErrorKind::ViewUnavailable => "Map Error: Es wurde keine Kartenansicht verfügbar.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Axis;

    #[test]
    fn test_describe_appends_range() {
        let err = CoordinateError::AxisOutOfRange {
            axis: Axis::Axis0,
            value: 95.0,
            min: -90.0,
            max: 90.0,
        };
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.feedback(&err),
            "URL-Coordinates: Value Error: The provided x value exceeds the limits of [-90, 90]."
        );
    }

    #[test]
    fn test_german_catalog() {
        let catalog = MessageCatalog::for_locale(Locale::De);
        assert_eq!(
            catalog.message(ErrorKind::ReferenceSystemTooLong),
            "Value Error: Die angegebene WKID ist zu lang."
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("DE".parse::<Locale>().unwrap(), Locale::De);
        assert!("fr".parse::<Locale>().is_err());
    }
}
