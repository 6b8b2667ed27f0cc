//! A fixed-size materialization window over the month sequence.
//!
//! A calendar range spans up to thousands of months; only a small
//! contiguous slice of grids exists at any moment. The window is an
//! explicit arena of built [`MonthPage`]s that slides over the flattened
//! month sequence, recentering on the focused month and clamping at the
//! ends of the range.

use alloc::vec::Vec;

use crate::grid::MonthPage;
use crate::model::CalendarModel;

/// Number of month pages materialized at a time.
pub const VISIBLE_PAGES: usize = 3;

/// The window slot the focused month occupies away from the range edges.
pub const CURRENT_SLOT: usize = VISIBLE_PAGES / 2;

/// A sliding window of materialized month grids.
#[derive(Debug, Clone, Default)]
pub struct MonthWindow {
    start: usize,
    focused: usize,
    pages: Vec<MonthPage>,
}

impl MonthWindow {
    /// Creates an empty window; call [`scroll_to`](Self::scroll_to) to
    /// materialize pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recenters the window on the month at `index`.
    ///
    /// In the steady state the focused month lands in slot
    /// [`CURRENT_SLOT`]; near the ends of the range the window clamps
    /// instead of running out of bounds, so use
    /// [`current_slot`](Self::current_slot) rather than assuming the
    /// middle slot.
    pub fn scroll_to(&mut self, model: &CalendarModel, index: usize) {
        let total = model.month_count();
        if total == 0 {
            self.start = 0;
            self.focused = 0;
            self.pages.clear();
            return;
        }
        let focused = index.min(total - 1);
        let start = focused
            .saturating_sub(CURRENT_SLOT)
            .min(total.saturating_sub(VISIBLE_PAGES));
        self.start = start;
        self.focused = focused;
        self.rebuild(model);
    }

    /// Moves the focus by `delta` months, clamped at the range edges.
    pub fn scroll_by(&mut self, model: &CalendarModel, delta: i32) {
        let focused = self.focused as i64 + i64::from(delta);
        self.scroll_to(model, usize::try_from(focused.max(0)).unwrap_or(0));
    }

    /// Rebuilds the materialized pages, picking up selection, limit, or
    /// collapse changes in the model.
    pub fn refresh(&mut self, model: &CalendarModel) {
        self.rebuild(model);
    }

    fn rebuild(&mut self, model: &CalendarModel) {
        let end = (self.start + VISIBLE_PAGES).min(model.month_count());
        self.pages.clear();
        for index in self.start..end {
            if let Some(page) = model.page(index) {
                self.pages.push(page);
            }
        }
    }

    /// Flattened index of the first materialized month.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Flattened index of the focused month.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// The slot of the focused month within the window.
    #[must_use]
    pub const fn current_slot(&self) -> usize {
        self.focused - self.start
    }

    /// The materialized pages, oldest month first.
    #[must_use]
    pub fn pages(&self) -> &[MonthPage] {
        &self.pages
    }

    /// The page at a window slot.
    #[must_use]
    pub fn page(&self, slot: usize) -> Option<&MonthPage> {
        self.pages.get(slot)
    }

    /// The focused month's page.
    #[must_use]
    pub fn current_page(&self) -> Option<&MonthPage> {
        self.page(self.current_slot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::CalendarRange;
    use time::Month;
    use time::macros::date;

    fn model() -> CalendarModel {
        CalendarModel::around_today(date!(2024 - 06 - 15))
    }

    #[test]
    fn steady_state_puts_the_focused_month_in_the_middle_slot() {
        let model = model();
        let mut window = MonthWindow::new();
        window.scroll_to(&model, 77);
        assert_eq!(window.pages().len(), VISIBLE_PAGES);
        assert_eq!(window.current_slot(), CURRENT_SLOT);
        let current = window.current_page().unwrap();
        assert_eq!((current.year(), current.month()), (2024, Month::June));
        assert_eq!(window.page(0).unwrap().month(), Month::May);
        assert_eq!(window.page(2).unwrap().month(), Month::July);
    }

    #[test]
    fn window_clamps_at_the_start_of_the_range() {
        let model = model();
        let mut window = MonthWindow::new();
        window.scroll_to(&model, 0);
        assert_eq!(window.start(), 0);
        assert_eq!(window.current_slot(), 0);
        assert_eq!(window.pages().len(), VISIBLE_PAGES);
        assert_eq!(
            (window.pages()[0].year(), window.pages()[0].month()),
            (2018, Month::January)
        );
    }

    #[test]
    fn window_clamps_at_the_end_of_the_range() {
        let model = model();
        let mut window = MonthWindow::new();
        window.scroll_to(&model, 200);
        assert_eq!(window.focused(), 155);
        assert_eq!(window.current_slot(), VISIBLE_PAGES - 1);
        let current = window.current_page().unwrap();
        assert_eq!((current.year(), current.month()), (2030, Month::December));
    }

    #[test]
    fn scroll_by_moves_relative_to_the_focus() {
        let model = model();
        let mut window = MonthWindow::new();
        window.scroll_to(&model, 77);
        window.scroll_by(&model, 1);
        assert_eq!(window.focused(), 78);
        assert_eq!(window.current_slot(), CURRENT_SLOT);
        window.scroll_by(&model, -200);
        assert_eq!(window.focused(), 0);
    }

    #[test]
    fn refresh_reflects_selection_changes() {
        let mut model = model();
        let mut window = MonthWindow::new();
        window.scroll_to(&model, 77);
        assert!(window.current_page().unwrap().cells().all(|cell| !cell.is_selected()));

        assert!(model.select(date!(2024 - 06 - 10)));
        window.refresh(&model);
        let selected = window
            .current_page()
            .unwrap()
            .cells()
            .filter(|cell| cell.is_selected())
            .count();
        assert_eq!(selected, 1);
    }

    #[test]
    fn short_ranges_still_fill_the_window() {
        let model = CalendarModel::new(
            CalendarRange::new(2024, 2024).unwrap(),
            date!(2024 - 01 - 15),
        );
        let mut window = MonthWindow::new();
        window.scroll_to(&model, 0);
        assert_eq!(window.pages().len(), VISIBLE_PAGES);
        assert_eq!(window.current_slot(), 0);
    }
}
