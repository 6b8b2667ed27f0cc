//! Bound picker values and their normalization.

use alloc::string::String;

use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::format::Pattern;

/// The externally bound value of a picker.
///
/// Hosts bind values in whichever shape they have on hand: nothing yet, an
/// epoch-milliseconds timestamp, a structured datetime, or preformatted
/// text. The controller normalizes every shape on read and hands the same
/// shape back on write; text that does not match the display pattern
/// normalizes to "no value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickerValue {
    /// No value bound. Displays as an empty string.
    #[default]
    Empty,
    /// Unix timestamp in milliseconds.
    Timestamp(i64),
    /// A structured date and time.
    DateTime(PrimitiveDateTime),
    /// A formatted string.
    Text(String),
}

impl PickerValue {
    /// Whether no value is bound.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Normalizes the bound value against the configured display pattern.
    #[must_use]
    pub fn normalize(&self, pattern: &Pattern) -> Option<PrimitiveDateTime> {
        match self {
            Self::Empty => None,
            Self::Timestamp(millis) => {
                let nanos = i128::from(*millis) * 1_000_000;
                let at = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;
                Some(PrimitiveDateTime::new(at.date(), at.time()))
            }
            Self::DateTime(value) => Some(*value),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    pattern.parse(text)
                }
            }
        }
    }
}

impl From<Date> for PickerValue {
    fn from(date: Date) -> Self {
        Self::DateTime(PrimitiveDateTime::new(date, Time::MIDNIGHT))
    }
}

impl From<PrimitiveDateTime> for PickerValue {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for PickerValue {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for PickerValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn pattern() -> Pattern {
        Pattern::default()
    }

    #[test]
    fn empty_normalizes_to_none() {
        assert_eq!(PickerValue::Empty.normalize(&pattern()), None);
        assert_eq!(PickerValue::from("").normalize(&pattern()), None);
    }

    #[test]
    fn timestamp_is_epoch_milliseconds() {
        let normalized = PickerValue::Timestamp(0).normalize(&pattern()).unwrap();
        assert_eq!(normalized.year(), 1970);
        assert_eq!(normalized.month(), Month::January);
        assert_eq!(normalized.day(), 1);

        // 2022-06-08T00:00:00Z
        let normalized = PickerValue::Timestamp(1_654_646_400_000)
            .normalize(&pattern())
            .unwrap();
        assert_eq!(
            normalized.date(),
            Date::from_calendar_date(2022, Month::June, 8).unwrap()
        );
    }

    #[test]
    fn text_parses_against_the_pattern() {
        let normalized = PickerValue::from("2024/06/08").normalize(&pattern()).unwrap();
        assert_eq!(
            normalized.date(),
            Date::from_calendar_date(2024, Month::June, 8).unwrap()
        );
        assert_eq!(normalized.time(), Time::MIDNIGHT);
    }

    #[test]
    fn malformed_text_is_no_value() {
        assert_eq!(PickerValue::from("soon").normalize(&pattern()), None);
        assert_eq!(PickerValue::from("2024-06-08").normalize(&pattern()), None);
    }

    #[test]
    fn date_conversion_lands_on_midnight() {
        let date = Date::from_calendar_date(2024, Month::June, 8).unwrap();
        let value = PickerValue::from(date);
        assert_eq!(
            value.normalize(&pattern()),
            Some(PrimitiveDateTime::new(date, Time::MIDNIGHT))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let value = PickerValue::from("2024/06/08");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(serde_json::from_str::<PickerValue>(&json).unwrap(), value);
    }
}
