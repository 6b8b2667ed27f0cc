//! Picker configuration.

use alloc::string::String;
use alloc::vec::Vec;

use ripple_calendar::range::{CalendarRange, DateLimits};
use ripple_core::format;
use time::Weekday;

use crate::area::Shortcut;

/// Presentation size of the picker input. Affects only how a surface
/// renders the input, never the engine's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PickerSize {
    /// Compact.
    Sm,
    /// Regular.
    #[default]
    Md,
    /// Large.
    Lg,
}

/// Configuration for a [`PickerController`](crate::PickerController).
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct PickerConfig {
    /// Display pattern applied to the bound value. Defaults to `y/MM/dd`.
    pub format: Option<String>,
    /// Placeholder shown while no value is bound. Defaults to the locale's
    /// `date-picker.placeholder` message.
    pub placeholder: Option<String>,
    /// Whether the panel offers time-of-day selection. When enabled, day
    /// clicks keep the panel open until the footer confirm action.
    pub show_time: bool,
    /// Presentation size.
    pub size: PickerSize,
    /// Explicit year span. Defaults to today's year plus the default
    /// padding on each side.
    pub calendar_range: Option<CalendarRange>,
    /// Inclusive limits on selectable dates.
    pub limit_date_range: Option<DateLimits>,
    /// First day of the week in the grid and header.
    pub first_weekday: Option<Weekday>,
    /// Shortcut actions rendered beside the calendar.
    pub right_area: Vec<Shortcut>,
    /// Extra footer actions next to the built-in confirm.
    pub footer: Vec<Shortcut>,
}

impl PickerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display pattern.
    #[must_use]
    pub fn format(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    /// Sets the placeholder text, overriding the locale lookup.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Enables time-of-day selection.
    #[must_use]
    pub const fn show_time(mut self, show_time: bool) -> Self {
        self.show_time = show_time;
        self
    }

    /// Sets the presentation size.
    #[must_use]
    pub const fn size(mut self, size: PickerSize) -> Self {
        self.size = size;
        self
    }

    /// Sets an explicit year span.
    #[must_use]
    pub const fn calendar_range(mut self, range: CalendarRange) -> Self {
        self.calendar_range = Some(range);
        self
    }

    /// Limits selectable dates to an inclusive range.
    #[must_use]
    pub const fn limit_date_range(mut self, limits: DateLimits) -> Self {
        self.limit_date_range = Some(limits);
        self
    }

    /// Sets the first day of the week.
    #[must_use]
    pub const fn first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = Some(weekday);
        self
    }

    /// Appends a shortcut to the right area.
    #[must_use]
    pub fn right_area(mut self, shortcut: Shortcut) -> Self {
        self.right_area.push(shortcut);
        self
    }

    /// Appends a footer action.
    #[must_use]
    pub fn footer(mut self, shortcut: Shortcut) -> Self {
        self.footer.push(shortcut);
        self
    }

    /// The effective display pattern string.
    #[must_use]
    pub fn format_pattern(&self) -> &str {
        self.format.as_deref().unwrap_or(format::DEFAULT_DATE_PATTERN)
    }

    /// The effective first day of the week.
    #[must_use]
    pub fn effective_first_weekday(&self) -> Weekday {
        self.first_weekday.unwrap_or(Weekday::Sunday)
    }
}
