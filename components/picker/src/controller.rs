//! The picker state machine.
//!
//! Two states, `Closed` and `Open`. Opening builds a panel session (the
//! calendar model, the materialization window, and the pending time of
//! day) from the bound value; closing discards the session. The bound
//! value itself outlives sessions. All transitions are synchronous and
//! per-instance; failed interactions (a click on a disabled day, an
//! unparsable bound value) are silent no-ops, never errors.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use ripple_calendar::grid;
use ripple_calendar::model::{CalendarModel, YearIndexEntry};
use ripple_calendar::range::SelectionRange;
use ripple_calendar::time_of_day::{TimeOfDay, TimeOfDayError};
use ripple_calendar::window::MonthWindow;
use ripple_core::{Messages, Pattern, PickerValue};
use time::Date;
use tracing::{debug, trace};

use crate::config::PickerConfig;
use crate::event::{EventSinks, PickerEvent};

const FALLBACK_PLACEHOLDER: &str = "Select a date";
const FALLBACK_CONFIRM: &str = "OK";

/// Panel visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// The panel is not shown; only the bound value exists.
    #[default]
    Closed,
    /// The panel is shown and a session is live.
    Open,
}

/// The state backing one open panel: calendar model, month window, and the
/// pending time of day. Created on focus, discarded on close.
#[derive(Debug)]
pub struct PanelSession {
    model: CalendarModel,
    window: MonthWindow,
    time: TimeOfDay,
}

impl PanelSession {
    /// The calendar model.
    #[must_use]
    pub const fn model(&self) -> &CalendarModel {
        &self.model
    }

    /// The materialization window.
    #[must_use]
    pub const fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// The pending time of day.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }
}

/// The headless date picker.
///
/// A rendering surface forwards user interactions (`focus`, day clicks,
/// time picks, confirm, clear) and reads back display state; hosts observe
/// transitions through [`subscribe`](Self::subscribe).
pub struct PickerController {
    config: PickerConfig,
    messages: Box<dyn Messages>,
    pattern: Pattern,
    value: PickerValue,
    session: Option<PanelSession>,
    sinks: EventSinks,
    today: Date,
}

impl fmt::Debug for PickerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerController")
            .field("state", &self.state())
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl PickerController {
    /// Creates a closed picker with the given configuration, message
    /// table, and today reference. Inject a fixed `today` for
    /// deterministic behavior in tests.
    #[must_use]
    pub fn new(config: PickerConfig, messages: Box<dyn Messages>, today: Date) -> Self {
        let pattern = Pattern::compile(config.format_pattern());
        Self {
            config,
            messages,
            pattern,
            value: PickerValue::Empty,
            session: None,
            sinks: EventSinks::default(),
            today,
        }
    }

    /// Registers an observer for every subsequent event.
    pub fn subscribe(&mut self, sink: impl FnMut(&PickerEvent) + 'static) {
        self.sinks.subscribe(sink);
    }

    /// Current panel state.
    #[must_use]
    pub const fn state(&self) -> PanelState {
        if self.session.is_some() {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }

    /// Whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state(), PanelState::Open)
    }

    /// The bound value.
    #[must_use]
    pub const fn value(&self) -> &PickerValue {
        &self.value
    }

    /// The live panel session, if the panel is open.
    #[must_use]
    pub const fn session(&self) -> Option<&PanelSession> {
        self.session.as_ref()
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The injected today reference.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Opens the panel in response to the input gaining focus.
    ///
    /// Builds the session from the bound value (or today when none is
    /// bound), centers the window on its month, and emits
    /// `ToggleVisibility(true)` then `Focus`. A focus while already open
    /// is a no-op.
    pub fn focus(&mut self) {
        if self.session.is_some() {
            return;
        }
        debug!("opening picker panel");
        let mut model = match self.config.calendar_range {
            Some(range) => CalendarModel::new(range, self.today),
            None => CalendarModel::around_today(self.today),
        };
        model.set_limits(self.config.limit_date_range);
        model.set_first_weekday(self.config.effective_first_weekday());

        let normalized = self.value.normalize(&self.pattern);
        if let Some(datetime) = normalized {
            model.set_selection(SelectionRange::single(datetime.date()));
        }
        let anchor = normalized.map_or(self.today, |datetime| datetime.date());
        let index = model.clamped_month_index(anchor);
        model.set_active_month(index);

        let mut window = MonthWindow::new();
        window.scroll_to(&model, index);
        let time = normalized.map_or_else(TimeOfDay::default, |datetime| {
            TimeOfDay::from(datetime.time())
        });

        self.session = Some(PanelSession {
            model,
            window,
            time,
        });
        self.emit(PickerEvent::ToggleVisibility(true));
        self.emit(PickerEvent::Focus);
    }

    /// Selects a day.
    ///
    /// A disabled day is silently ignored. Otherwise the bound value
    /// updates; without time selection the choice commits immediately and
    /// the panel closes, with time selection the panel stays open until
    /// [`confirm`](Self::confirm).
    pub fn select(&mut self, date: Date) {
        let show_time = self.config.show_time;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.model.select(date) {
            trace!(%date, "ignoring click on disabled day");
            return;
        }
        session.window.refresh(&session.model);
        let composed = session.time.compose(date);
        if show_time {
            self.value = PickerValue::DateTime(composed);
        } else {
            self.value = PickerValue::from(date);
            self.commit();
        }
    }

    /// Selects the day shown in a window slot's cell, as a surface does
    /// when a grid cell is clicked. Out-of-range coordinates are ignored.
    pub fn click_cell(&mut self, slot: usize, cell: usize) {
        let clicked = self.session.as_ref().and_then(|session| {
            session
                .window
                .page(slot)?
                .cell(cell)
                .map(|day| day.date())
        });
        if let Some(date) = clicked {
            self.select(date);
        }
    }

    /// Picks an hour from the 24-entry wheel.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError::Hour`] for an out-of-domain value; the
    /// pending time and bound value are untouched.
    pub fn pick_hour(&mut self, hour: u8) -> Result<(), TimeOfDayError> {
        self.pick_time(|time| time.with_hour(hour))
    }

    /// Picks a minute from the 60-entry wheel.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError::Minute`] for an out-of-domain value.
    pub fn pick_minute(&mut self, minute: u8) -> Result<(), TimeOfDayError> {
        self.pick_time(|time| time.with_minute(minute))
    }

    /// Picks a second from the 60-entry wheel.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError::Second`] for an out-of-domain value.
    pub fn pick_second(&mut self, second: u8) -> Result<(), TimeOfDayError> {
        self.pick_time(|time| time.with_second(second))
    }

    fn pick_time(
        &mut self,
        update: impl FnOnce(TimeOfDay) -> Result<TimeOfDay, TimeOfDayError>,
    ) -> Result<(), TimeOfDayError> {
        if !self.config.show_time {
            return Ok(());
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        session.time = update(session.time)?;
        let composed = session
            .model
            .selection()
            .start()
            .map(|date| session.time.compose(date));
        if let Some(datetime) = composed {
            self.value = PickerValue::DateTime(datetime);
        }
        Ok(())
    }

    /// Commits the pending selection from the footer confirm action and
    /// closes the panel. A no-op while closed.
    pub fn confirm(&mut self) {
        if self.session.is_some() {
            debug!("confirming selection");
            self.commit();
        }
    }

    /// Closes the panel without confirming, as an outside click does. The
    /// bound value keeps whatever the session already wrote to it.
    pub fn dismiss(&mut self) {
        if self.session.take().is_some() {
            self.emit(PickerEvent::ToggleVisibility(false));
            self.emit(PickerEvent::Blur);
        }
    }

    /// Clears the bound value. Emits nothing and leaves the panel state
    /// as it is.
    pub fn clear(&mut self) {
        trace!("clearing bound value");
        self.value = PickerValue::Empty;
        if let Some(session) = self.session.as_mut() {
            session.model.clear_selection();
            session.window.refresh(&session.model);
            session.time = TimeOfDay::default();
        }
    }

    /// Replaces the bound value from outside the panel, e.g. a host
    /// binding write. An open session re-syncs its selection and scrolls
    /// to the new value's month; no events are emitted.
    pub fn set_value(&mut self, value: PickerValue) {
        self.value = value;
        self.sync_session();
    }

    /// Runs a right-area shortcut by index. The resolved value flows
    /// through the same path as [`set_value`](Self::set_value); panel
    /// visibility is unchanged.
    pub fn run_right_area(&mut self, index: usize) {
        let resolved = self
            .config
            .right_area
            .get(index)
            .map(|shortcut| shortcut.resolve(self.today));
        if let Some(value) = resolved {
            self.set_value(value);
        }
    }

    /// Runs a footer action by index.
    pub fn run_footer(&mut self, index: usize) {
        let resolved = self
            .config
            .footer
            .get(index)
            .map(|shortcut| shortcut.resolve(self.today));
        if let Some(value) = resolved {
            self.set_value(value);
        }
    }

    /// Scrolls the open panel to the next month.
    pub fn next_month(&mut self) {
        self.scroll_months(1);
    }

    /// Scrolls the open panel to the previous month.
    pub fn previous_month(&mut self) {
        self.scroll_months(-1);
    }

    fn scroll_months(&mut self, delta: i32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.window.scroll_by(&session.model, delta);
        let focused = session.window.focused();
        session.model.set_active_month(focused);
    }

    /// Scrolls the open panel to a flattened month index (clamped), as the
    /// year index does when an entry is picked.
    pub fn scroll_to_month(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.model.set_active_month(index);
        let active = session.model.active_month();
        session.window.scroll_to(&session.model, active);
    }

    /// Flips the year index collapse state for `year` in the open panel.
    pub fn toggle_year_collapse(&mut self, year: i32) {
        if let Some(session) = self.session.as_mut() {
            session.model.toggle_year_collapse(year);
        }
    }

    /// The open panel's year index entries, or empty while closed.
    #[must_use]
    pub fn year_index(&self) -> Vec<YearIndexEntry> {
        self.session
            .as_ref()
            .map_or_else(Vec::new, |session| session.model.year_index())
    }

    /// The seven localized week header labels.
    #[must_use]
    pub fn week_header(&self) -> [String; grid::DAYS_PER_WEEK] {
        grid::week_header(self.config.effective_first_weekday(), self.messages.as_ref())
    }

    /// The formatted bound value, or an empty string when no value is
    /// bound or the bound text does not parse.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.value
            .normalize(&self.pattern)
            .map_or_else(String::new, |datetime| self.pattern.render(datetime))
    }

    /// The placeholder: configuration override, then locale lookup, then
    /// the English fallback.
    #[must_use]
    pub fn placeholder(&self) -> String {
        if let Some(text) = &self.config.placeholder {
            return text.clone();
        }
        String::from(
            self.messages
                .lookup("date-picker.placeholder")
                .unwrap_or(FALLBACK_PLACEHOLDER),
        )
    }

    /// The footer confirm label.
    #[must_use]
    pub fn confirm_label(&self) -> String {
        String::from(
            self.messages
                .lookup("date-picker.confirm")
                .unwrap_or(FALLBACK_CONFIRM),
        )
    }

    fn commit(&mut self) {
        let value = self.value.clone();
        self.session = None;
        self.emit(PickerEvent::Confirm(value));
        self.emit(PickerEvent::ToggleVisibility(false));
        self.emit(PickerEvent::Blur);
    }

    fn sync_session(&mut self) {
        let normalized = self.value.normalize(&self.pattern);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match normalized {
            Some(datetime) => {
                session
                    .model
                    .set_selection(SelectionRange::single(datetime.date()));
                session.time = TimeOfDay::from(datetime.time());
                let index = session.model.clamped_month_index(datetime.date());
                session.model.set_active_month(index);
                session.window.scroll_to(&session.model, index);
            }
            None => {
                session.model.clear_selection();
                session.window.refresh(&session.model);
            }
        }
    }

    fn emit(&mut self, event: PickerEvent) {
        debug!(?event, "picker event");
        self.sinks.emit(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::MessageTable;
    use time::macros::date;

    fn controller() -> PickerController {
        PickerController::new(
            PickerConfig::new(),
            Box::new(MessageTable::english()),
            date!(2024 - 06 - 15),
        )
    }

    #[test]
    fn starts_closed_and_empty() {
        let picker = controller();
        assert_eq!(picker.state(), PanelState::Closed);
        assert!(picker.value().is_empty());
        assert_eq!(picker.display_text(), "");
        assert!(picker.session().is_none());
        assert!(picker.year_index().is_empty());
    }

    #[test]
    fn focus_while_open_is_a_no_op() {
        let mut picker = controller();
        picker.focus();
        let window_start = picker.session().unwrap().window().start();
        picker.focus();
        assert_eq!(picker.session().unwrap().window().start(), window_start);
    }

    #[test]
    fn interactions_while_closed_are_no_ops() {
        let mut picker = controller();
        picker.select(date!(2024 - 06 - 16));
        picker.click_cell(1, 20);
        picker.confirm();
        picker.dismiss();
        picker.next_month();
        assert!(picker.pick_hour(3).is_ok());
        assert_eq!(picker.state(), PanelState::Closed);
        assert!(picker.value().is_empty());
    }

    #[test]
    fn placeholder_prefers_config_then_locale() {
        let picker = controller();
        assert_eq!(picker.placeholder(), "Select a date");
        assert_eq!(picker.confirm_label(), "OK");

        let picker = PickerController::new(
            PickerConfig::new().placeholder("请选择日期"),
            Box::new(MessageTable::english()),
            date!(2024 - 06 - 15),
        );
        assert_eq!(picker.placeholder(), "请选择日期");

        let picker = PickerController::new(
            PickerConfig::new(),
            Box::new(MessageTable::new()),
            date!(2024 - 06 - 15),
        );
        assert_eq!(picker.placeholder(), "Select a date");
    }
}
