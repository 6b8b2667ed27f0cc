//! Injected message lookup for user-visible strings.
//!
//! The engine never reads a global locale. A [`Messages`] implementation is
//! handed to the controller once and consulted for every user-visible
//! string; callers that skip localization get the built-in English table.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Key → localized string lookup.
pub trait Messages {
    /// Returns the message for `key`, or `None` when the table has no entry.
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// A map-backed [`Messages`] table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    entries: BTreeMap<String, String>,
}

impl MessageTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English messages.
    #[must_use]
    pub fn english() -> Self {
        let mut table = Self::new();
        for (key, text) in [
            ("date-picker.placeholder", "Select a date"),
            ("date-picker.confirm", "OK"),
            ("calendar.weekday.sunday", "Sun"),
            ("calendar.weekday.monday", "Mon"),
            ("calendar.weekday.tuesday", "Tue"),
            ("calendar.weekday.wednesday", "Wed"),
            ("calendar.weekday.thursday", "Thu"),
            ("calendar.weekday.friday", "Fri"),
            ("calendar.weekday.saturday", "Sat"),
        ] {
            table.insert(key, text);
        }
        table
    }

    /// Inserts a message, replacing any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Messages for MessageTable {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_table_covers_picker_strings() {
        let table = MessageTable::english();
        assert_eq!(table.lookup("date-picker.placeholder"), Some("Select a date"));
        assert_eq!(table.lookup("calendar.weekday.sunday"), Some("Sun"));
        assert_eq!(table.lookup("no.such.key"), None);
    }

    #[test]
    fn with_overrides_existing_entries() {
        let table = MessageTable::english().with("date-picker.placeholder", "请选择日期");
        assert_eq!(table.lookup("date-picker.placeholder"), Some("请选择日期"));
    }
}
