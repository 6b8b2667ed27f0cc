#![cfg_attr(not(feature = "std"), no_std)]

//! A headless date picker engine.
//!
//! Ripple is the state behind a date picker input, with no rendering
//! attached: month grids padded to whole weeks, a virtualized window over
//! the full year span, optional time-of-day composition, and a
//! closed/open controller that emits plain events. A UI layer renders the
//! controller's state and forwards interactions back to it.
//!
//! ```
//! use ripple::prelude::*;
//!
//! let mut picker = date_picker(PickerConfig::new());
//! picker.subscribe(|event| println!("{event:?}"));
//! picker.focus();
//! picker.select(picker.today());
//! assert!(!picker.display_text().is_empty());
//! ```
extern crate alloc;

#[cfg(feature = "std")]
use alloc::boxed::Box;

pub use ripple_calendar as calendar;
pub use ripple_picker as picker;

pub use ripple_core::{MessageTable, Messages, Pattern, PickerValue, format, locale, value};

#[doc(inline)]
pub use ripple_calendar::{
    CalendarModel, CalendarRange, DateLimits, MonthPage, MonthWindow, SelectionRange, TimeOfDay,
};

#[doc(inline)]
pub use ripple_picker::{PickerConfig, PickerController, PickerEvent, PickerSize, Shortcut};

pub mod prelude {
    //! The commonly used types, importable in one `use`.
    pub use crate::calendar::range::{CalendarRange, DateLimits};
    pub use crate::calendar::time_of_day::TimeOfDay;
    pub use crate::picker::{
        PickerConfig, PickerController, PickerEvent, PickerSize, Shortcut,
    };
    pub use crate::{MessageTable, Messages, PickerValue};

    #[cfg(feature = "std")]
    pub use crate::{date_picker, today_utc};
}

/// Today's date in UTC, from the system clock.
#[cfg(feature = "std")]
#[must_use]
pub fn today_utc() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}

/// Creates a [`PickerController`] with English messages and the system
/// clock's today. For full control over locale and clock, use
/// [`PickerController::new`].
#[cfg(feature = "std")]
#[must_use]
pub fn date_picker(config: PickerConfig) -> PickerController {
    PickerController::new(config, Box::new(MessageTable::english()), today_utc())
}
