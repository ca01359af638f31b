//! Operator-settings layer of a two-channel looping delay module.
//!
//! The module hides a system-settings mode behind a long hold of a button
//! chord. While the mode is active, the two three-position time switches
//! select between four configuration pages, the pots and buttons are
//! repurposed to write persistent device parameters, and the loop and ping
//! LEDs blink-code the gate/trigger configuration of the clock outputs.
//!
//! The crate is meant to be driven by a firmware binding running a
//! fixed-rate control loop:
//!
//! ```text
//! [Pots] [Switches] [Buttons]
//!    |       |       |
//!    V       V       V
//!   [ ControlLoop ]
//!         |
//!         | (Snapshot)
//!         V
//!     [ Store ] --(Save)--> [ Flash ]
//!         |
//!         | (DesiredOutput)
//!         V
//!      [ LEDs ]
//! ```
//!
//! Once per tick the binding refreshes peripheral state through
//! [`Store::apply_input_snapshot`] and invokes the three tick entry points
//! in order: [`Store::tick_mode_entry`], [`Store::tick_settings_dispatch`]
//! and [`Store::tick_led_sequence`].

#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod cache;
pub mod input;
pub mod output;
pub mod save;

mod entry;
mod led;
mod log;
mod page;
mod store;

pub use crate::store::{State, Store};
