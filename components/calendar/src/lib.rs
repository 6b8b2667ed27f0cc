#![no_std]

//! Calendar engine for the Ripple picker.
//!
//! Everything here is pure, synchronous state: month grids padded to whole
//! weeks ([`grid`]), the year/month model with selection and collapse state
//! ([`model`]), a fixed-size materialization window over the month sequence
//! ([`window`]), and time-of-day composition ([`time_of_day`]). The "today"
//! reference is always injected, so every computation is deterministic.
extern crate alloc;

pub mod grid;
pub use grid::{CalendarDay, MonthPage, WeekRow, build_month_page, week_header};

pub mod range;
pub use range::{CalendarRange, CalendarRangeError, DateLimits, SelectionRange};

pub mod model;
pub use model::{CalendarModel, YearGroup, YearIndexEntry};

pub mod window;
pub use window::MonthWindow;

pub mod time_of_day;
pub use time_of_day::{TimeOfDay, TimeOfDayError};
