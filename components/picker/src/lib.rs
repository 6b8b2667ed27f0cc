#![no_std]

//! Headless date picker controller.
//!
//! [`PickerController`] is the state machine behind a date picker input:
//! closed/open panel state, day selection against the calendar engine,
//! optional time-of-day composition, value formatting, and event emission
//! toward the host. It owns no rendering; a surface reads the controller's
//! state and forwards user interactions to it.
extern crate alloc;

pub mod area;
pub use area::Shortcut;

pub mod config;
pub use config::{PickerConfig, PickerSize};

pub mod controller;
pub use controller::{PanelSession, PanelState, PickerController};

pub mod event;
pub use event::PickerEvent;
