#![no_std]

//! Foundation types for the Ripple picker engine.
//!
//! This crate carries the pieces every component shares: the bound value
//! model ([`PickerValue`]), the display-pattern language ([`Pattern`]), and
//! injected message lookup ([`Messages`]).
extern crate alloc;

pub mod format;
pub mod locale;
pub mod value;

pub use format::Pattern;
pub use locale::{MessageTable, Messages};
pub use value::PickerValue;
