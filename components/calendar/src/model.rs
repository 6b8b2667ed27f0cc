//! The calendar model: year groups, month addressing, and selection.
//!
//! The model owns the year span, the collapse/active state of the year
//! index, the current selection, and the optional date limits. Month grids
//! themselves are materialized on demand through [`CalendarModel::page`];
//! the window component decides which of them exist at any moment.

use alloc::vec::Vec;

use time::{Date, Month, Weekday};

use crate::grid::{self, MonthPage};
use crate::range::{CalendarRange, DateLimits, SelectionRange, is_within_limits};

/// Months per year group.
pub const MONTHS_PER_YEAR: usize = 12;

/// One year of the calendar plus its year-index state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearGroup {
    year: i32,
    collapsed: bool,
    active: bool,
}

impl YearGroup {
    /// The group's calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Whether the group's months are hidden in the year index.
    #[must_use]
    pub const fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether this group holds the currently displayed month. Exactly one
    /// group is active at a time.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }
}

/// One entry of the flattened year index shown beside the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearIndexEntry {
    /// A year row.
    Year {
        /// The year.
        year: i32,
        /// Whether this is the active year.
        active: bool,
        /// Whether the year's month entries are hidden.
        collapsed: bool,
    },
    /// A month row under an expanded year.
    Month {
        /// The year the month belongs to.
        year: i32,
        /// The month.
        month: Month,
        /// Whether this is the currently displayed month.
        active: bool,
    },
}

/// Calendar state for one open picker panel.
#[derive(Debug, Clone)]
pub struct CalendarModel {
    range: CalendarRange,
    years: Vec<YearGroup>,
    selection: SelectionRange,
    limits: Option<DateLimits>,
    today: Date,
    first_weekday: Weekday,
    active_month: usize,
}

impl CalendarModel {
    /// Creates a model spanning `range`, with no selection or limits, the
    /// week starting on Sunday, and today's month active (clamped into the
    /// range).
    #[must_use]
    pub fn new(range: CalendarRange, today: Date) -> Self {
        let years = range
            .years()
            .map(|year| YearGroup {
                year,
                collapsed: false,
                active: false,
            })
            .collect();
        let mut model = Self {
            range,
            years,
            selection: SelectionRange::Empty,
            limits: None,
            today,
            first_weekday: Weekday::Sunday,
            active_month: 0,
        };
        model.set_active_month(model.clamped_month_index(today));
        model
    }

    /// Creates a model over the default range around today's year.
    #[must_use]
    pub fn around_today(today: Date) -> Self {
        Self::new(CalendarRange::around(today.year()), today)
    }

    /// Replaces the date limits. Pages built afterwards reflect the change.
    pub fn set_limits(&mut self, limits: Option<DateLimits>) {
        self.limits = limits;
    }

    /// Replaces the first day of the week.
    pub fn set_first_weekday(&mut self, first_weekday: Weekday) {
        self.first_weekday = first_weekday;
    }

    /// Replaces the selection wholesale, bypassing the limits. Used when
    /// syncing from an externally bound value, which the host controls.
    pub fn set_selection(&mut self, selection: SelectionRange) {
        self.selection = selection;
    }

    /// The year span.
    #[must_use]
    pub const fn range(&self) -> CalendarRange {
        self.range
    }

    /// The injected "today" reference.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// The configured first day of the week.
    #[must_use]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionRange {
        &self.selection
    }

    /// The configured date limits, if any.
    #[must_use]
    pub const fn limits(&self) -> Option<&DateLimits> {
        self.limits.as_ref()
    }

    /// The year groups in order.
    #[must_use]
    pub fn years(&self) -> &[YearGroup] {
        &self.years
    }

    /// Total number of months across the range.
    #[must_use]
    pub fn month_count(&self) -> usize {
        self.years.len() * MONTHS_PER_YEAR
    }

    /// The year and month at a flattened month index.
    #[must_use]
    pub fn month_at(&self, index: usize) -> Option<(i32, Month)> {
        if index >= self.month_count() {
            return None;
        }
        let year = self.range.start_year() + (index / MONTHS_PER_YEAR) as i32;
        let month = Month::try_from((index % MONTHS_PER_YEAR) as u8 + 1).ok()?;
        Some((year, month))
    }

    /// The flattened month index of `date`, or `None` outside the range.
    #[must_use]
    pub fn month_index_of(&self, date: Date) -> Option<usize> {
        if !self.range.contains_year(date.year()) {
            return None;
        }
        let years = (date.year() - self.range.start_year()) as usize;
        Some(years * MONTHS_PER_YEAR + usize::from(u8::from(date.month())) - 1)
    }

    /// Like [`month_index_of`](Self::month_index_of), but clamping dates
    /// outside the range to the first or last month.
    #[must_use]
    pub fn clamped_month_index(&self, date: Date) -> usize {
        self.month_index_of(date).unwrap_or_else(|| {
            if date.year() < self.range.start_year() {
                0
            } else {
                self.month_count() - 1
            }
        })
    }

    /// Materializes the display grid for the month at `index`, classified
    /// against the current selection, limits, and today reference.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<MonthPage> {
        let (year, month) = self.month_at(index)?;
        Some(grid::build_month_page(
            year,
            month,
            &self.selection,
            self.limits.as_ref(),
            self.today,
            self.first_weekday,
        ))
    }

    /// Selects a single day.
    ///
    /// Returns `false` without touching any state when the day is disabled
    /// by the configured limits; a rejected selection is a no-op, not an
    /// error.
    pub fn select(&mut self, date: Date) -> bool {
        if !is_within_limits(date, self.limits.as_ref()) {
            return false;
        }
        self.selection = SelectionRange::single(date);
        true
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = SelectionRange::Empty;
    }

    /// Flips the collapse state of the given year's index entry. Does not
    /// affect selection or page contents.
    pub fn toggle_year_collapse(&mut self, year: i32) {
        if let Some(group) = self.years.iter_mut().find(|group| group.year == year) {
            group.collapsed = !group.collapsed;
        }
    }

    /// The flattened index of the currently displayed month.
    #[must_use]
    pub const fn active_month(&self) -> usize {
        self.active_month
    }

    /// The year containing the currently displayed month.
    #[must_use]
    pub fn active_year(&self) -> i32 {
        self.range.start_year() + (self.active_month / MONTHS_PER_YEAR) as i32
    }

    /// Marks the month at `index` (clamped) as the displayed one and moves
    /// the active flag to its year group.
    pub fn set_active_month(&mut self, index: usize) {
        self.active_month = index.min(self.month_count().saturating_sub(1));
        let active_year = self.active_year();
        for group in &mut self.years {
            group.active = group.year == active_year;
        }
    }

    /// The flattened year index: one entry per year, plus one entry per
    /// month for expanded years.
    #[must_use]
    pub fn year_index(&self) -> Vec<YearIndexEntry> {
        let mut entries = Vec::new();
        for group in &self.years {
            entries.push(YearIndexEntry::Year {
                year: group.year,
                active: group.active,
                collapsed: group.collapsed,
            });
            if group.collapsed {
                continue;
            }
            for index in 0..MONTHS_PER_YEAR {
                let Ok(month) = Month::try_from(index as u8 + 1) else {
                    continue;
                };
                let flattened =
                    (group.year - self.range.start_year()) as usize * MONTHS_PER_YEAR + index;
                entries.push(YearIndexEntry::Month {
                    year: group.year,
                    month,
                    active: flattened == self.active_month,
                });
            }
        }
        entries
    }
}
