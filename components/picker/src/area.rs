//! Panel extension areas.
//!
//! Hosts extend the panel with extra actions: a column of shortcuts beside
//! the calendar ("a month ago") or a custom footer ("today"). An extension
//! is a plain strategy value the controller runs: a label plus a function
//! from the injected today reference to a new bound value.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use ripple_core::PickerValue;
use time::{Date, Duration};

/// A labeled action that produces a bound value from today's date.
pub struct Shortcut {
    label: String,
    resolve: Box<dyn Fn(Date) -> PickerValue + 'static>,
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut").field("label", &self.label).finish()
    }
}

impl Shortcut {
    /// Creates a shortcut from a label and a resolver.
    pub fn new(label: impl Into<String>, resolve: impl Fn(Date) -> PickerValue + 'static) -> Self {
        Self {
            label: label.into(),
            resolve: Box::new(resolve),
        }
    }

    /// A shortcut resolving to `days` before today.
    #[must_use]
    pub fn days_ago(label: impl Into<String>, days: i64) -> Self {
        Self::new(label, move |today| {
            today
                .checked_sub(Duration::days(days))
                .map_or(PickerValue::Empty, PickerValue::from)
        })
    }

    /// A shortcut resolving to today.
    #[must_use]
    pub fn today(label: impl Into<String>) -> Self {
        Self::new(label, PickerValue::from)
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolves the shortcut against the injected today reference.
    #[must_use]
    pub fn resolve(&self, today: Date) -> PickerValue {
        (self.resolve)(today)
    }
}
