//! Month-grid construction and day classification.
//!
//! A month page is the full display grid for one month: whole weeks only,
//! padded with the tail of the previous month and the head of the next one.
//! Every cell is classified for the render pass (in-month, today, selected,
//! disabled) when the page is built, so pages are plain immutable data.

use alloc::string::String;
use alloc::vec::Vec;

use ripple_core::Messages;
use time::{Date, Month, Weekday};

use crate::range::{DateLimits, SelectionRange, is_within_limits};

/// Week rows always hold exactly this many days.
pub const DAYS_PER_WEEK: usize = 7;

/// One classified day cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    date: Date,
    in_month: bool,
    is_today: bool,
    is_selected: bool,
    is_disabled: bool,
}

impl CalendarDay {
    /// The calendar date of this cell.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Day of month, `1..=31`.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// Day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whether the cell belongs to the page's month, as opposed to
    /// leading/trailing filler from adjacent months.
    #[must_use]
    pub const fn in_month(&self) -> bool {
        self.in_month
    }

    /// Whether the cell is the injected "today" reference.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    /// Whether the cell falls inside the current selection.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Whether the cell falls outside the configured date limits.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.is_disabled
    }
}

/// A single display week: exactly seven classified days.
pub type WeekRow = [CalendarDay; DAYS_PER_WEEK];

/// One month's full display grid, padded to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    year: i32,
    month: Month,
    weeks: Vec<WeekRow>,
}

impl MonthPage {
    /// The page's year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The page's month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The week rows of the grid.
    #[must_use]
    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Total number of cells (always a multiple of seven).
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// Whether the grid has no cells. Only true for a year outside the
    /// supported calendar span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterates all cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    /// The cell at a row-major index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&CalendarDay> {
        self.weeks
            .get(index / DAYS_PER_WEEK)?
            .get(index % DAYS_PER_WEEK)
    }

    /// Row-major index of the cell holding `date`, if present.
    #[must_use]
    pub fn position_of(&self, date: Date) -> Option<usize> {
        self.cells().position(|cell| cell.date() == date)
    }
}

/// Builds the display grid for one month.
///
/// The grid starts on the `first_weekday` on or before the first of the
/// month and ends on the last day of the week containing the last of the
/// month, so every row has seven cells. Classification is a pure function
/// of the inputs; inject a fixed `today` for deterministic output.
#[must_use]
pub fn build_month_page(
    year: i32,
    month: Month,
    selection: &SelectionRange,
    limits: Option<&DateLimits>,
    today: Date,
    first_weekday: Weekday,
) -> MonthPage {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        // Out-of-range years produce an empty page rather than failing.
        return MonthPage {
            year,
            month,
            weeks: Vec::new(),
        };
    };
    let last = last_of_month(first);

    let mut cursor = first;
    while cursor.weekday() != first_weekday {
        match cursor.previous_day() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    let mut weeks = Vec::with_capacity(6);
    loop {
        // At the supported calendar boundary the cursor cannot advance
        // past `Date::MAX`; stop after the row instead of spinning.
        let mut stalled = false;
        let row: WeekRow = core::array::from_fn(|_| {
            let day = CalendarDay {
                date: cursor,
                in_month: cursor.year() == year && cursor.month() == month,
                is_today: cursor == today,
                is_selected: selection.contains(cursor),
                is_disabled: !is_within_limits(cursor, limits),
            };
            match cursor.next_day() {
                Some(next) => cursor = next,
                None => stalled = true,
            }
            day
        });
        weeks.push(row);
        if stalled || cursor > last {
            break;
        }
    }

    MonthPage { year, month, weeks }
}

/// Seven weekday labels starting from `first_weekday`, localized through
/// `messages` with English fallbacks.
#[must_use]
pub fn week_header(first_weekday: Weekday, messages: &dyn Messages) -> [String; DAYS_PER_WEEK] {
    let mut weekday = first_weekday;
    core::array::from_fn(|_| {
        let label = messages
            .lookup(weekday_key(weekday))
            .unwrap_or(weekday_fallback(weekday));
        let label = String::from(label);
        weekday = weekday.next();
        label
    })
}

fn last_of_month(first: Date) -> Date {
    let (next_year, next_month) = match first.month() {
        Month::December => (first.year() + 1, Month::January),
        month => (first.year(), month.next()),
    };
    Date::from_calendar_date(next_year, next_month, 1)
        .ok()
        .and_then(Date::previous_day)
        .unwrap_or(Date::MAX)
}

const fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "calendar.weekday.sunday",
        Weekday::Monday => "calendar.weekday.monday",
        Weekday::Tuesday => "calendar.weekday.tuesday",
        Weekday::Wednesday => "calendar.weekday.wednesday",
        Weekday::Thursday => "calendar.weekday.thursday",
        Weekday::Friday => "calendar.weekday.friday",
        Weekday::Saturday => "calendar.weekday.saturday",
    }
}

const fn weekday_fallback(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::DateLimits;
    use ripple_core::MessageTable;
    use time::macros::date;

    fn page(year: i32, month: Month) -> MonthPage {
        build_month_page(
            year,
            month,
            &SelectionRange::Empty,
            None,
            date!(2024 - 06 - 15),
            Weekday::Sunday,
        )
    }

    #[test]
    fn grids_are_whole_weeks() {
        // June 2024 runs Sat..Sun, needing both leading and trailing fill.
        let june = page(2024, Month::June);
        assert_eq!(june.weeks().len(), 6);
        assert_eq!(june.len(), 42);
        for week in june.weeks() {
            assert_eq!(week.len(), DAYS_PER_WEEK);
        }
        assert_eq!(june.cell(0).unwrap().date(), date!(2024 - 05 - 26));
        assert_eq!(june.cell(41).unwrap().date(), date!(2024 - 07 - 06));
        assert!(!june.cell(0).unwrap().in_month());
        assert!(june.position_of(date!(2024 - 06 - 01)).is_some());
    }

    #[test]
    fn month_aligned_with_week_start_gets_no_padding() {
        // February 2026 starts on a Sunday and has exactly 28 days.
        let february = page(2026, Month::February);
        assert_eq!(february.weeks().len(), 4);
        assert!(february.cells().all(CalendarDay::in_month));
    }

    #[test]
    fn exactly_one_cell_is_today() {
        let june = page(2024, Month::June);
        let today_cells: Vec<_> = june.cells().filter(|cell| cell.is_today()).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date(), date!(2024 - 06 - 15));
        // 2024-06-15 sits in the third row, Saturday column.
        assert_eq!(june.position_of(date!(2024 - 06 - 15)), Some(20));
    }

    #[test]
    fn selection_and_limits_classify_cells() {
        let selection = SelectionRange::single(date!(2024 - 06 - 10));
        let limits = DateLimits::new(date!(2024 - 06 - 14), date!(2024 - 06 - 16));
        let june = build_month_page(
            2024,
            Month::June,
            &selection,
            Some(&limits),
            date!(2024 - 06 - 15),
            Weekday::Sunday,
        );
        let selected: Vec<_> = june.cells().filter(|cell| cell.is_selected()).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date(), date!(2024 - 06 - 10));
        assert!(selected[0].is_disabled());

        let enabled: Vec<_> = june.cells().filter(|cell| !cell.is_disabled()).collect();
        assert_eq!(enabled.len(), 3);
        assert!(enabled.iter().all(|cell| limits.contains(cell.date())));
    }

    #[test]
    fn first_weekday_is_configurable() {
        let june = build_month_page(
            2024,
            Month::June,
            &SelectionRange::Empty,
            None,
            date!(2024 - 06 - 15),
            Weekday::Monday,
        );
        assert_eq!(june.cell(0).unwrap().date(), date!(2024 - 05 - 27));
        assert_eq!(june.cell(0).unwrap().weekday(), Weekday::Monday);
        // Monday alignment fits June 2024 into five whole weeks.
        assert_eq!(june.weeks().len(), 5);
        assert_eq!(june.len(), 35);
    }

    #[test]
    fn week_header_has_seven_localized_labels() {
        let messages = MessageTable::english();
        let header = week_header(Weekday::Sunday, &messages);
        assert_eq!(header.len(), DAYS_PER_WEEK);
        assert_eq!(header[0], "Sun");
        assert_eq!(header[6], "Sat");

        let header = week_header(Weekday::Monday, &messages);
        assert_eq!(header[0], "Mon");
        assert_eq!(header[6], "Sun");

        // Missing table entries fall back to English.
        let header = week_header(Weekday::Sunday, &MessageTable::new());
        assert_eq!(header[0], "Sun");
    }

    #[test]
    fn out_of_range_year_yields_empty_page() {
        let page = page(10_000, Month::January);
        assert!(page.is_empty());
    }

    #[test]
    fn final_supported_month_terminates_in_whole_weeks() {
        let december = page(9999, Month::December);
        assert!(!december.is_empty());
        assert_eq!(december.len() % DAYS_PER_WEEK, 0);
    }
}
