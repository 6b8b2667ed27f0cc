//! Picker events and observer registration.
//!
//! The host framework's reactive emit is replaced by a plain observer
//! list: callbacks registered on the controller, invoked synchronously in
//! registration order while an event is dispatched.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use ripple_core::PickerValue;

/// An observable side effect of a controller transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The panel opened (`true`) or closed (`false`).
    ToggleVisibility(bool),
    /// A selection was committed; carries the bound value at commit time.
    Confirm(PickerValue),
    /// The input gained focus.
    Focus,
    /// The input lost focus.
    Blur,
}

type BoxSink = Box<dyn FnMut(&PickerEvent) + 'static>;

/// The controller's observer list.
#[derive(Default)]
pub struct EventSinks {
    sinks: Vec<BoxSink>,
}

impl fmt::Debug for EventSinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSinks")
            .field("len", &self.sinks.len())
            .finish()
    }
}

impl EventSinks {
    /// Registers a callback for every subsequent event.
    pub fn subscribe(&mut self, sink: impl FnMut(&PickerEvent) + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Dispatches an event to every registered callback in order.
    pub fn emit(&mut self, event: &PickerEvent) {
        for sink in &mut self.sinks {
            sink(event);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn sinks_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = EventSinks::default();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            sinks.subscribe(move |event| {
                if matches!(event, PickerEvent::Focus) {
                    seen.borrow_mut().push(tag);
                }
            });
        }
        sinks.emit(&PickerEvent::Focus);
        sinks.emit(&PickerEvent::Blur);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }
}
