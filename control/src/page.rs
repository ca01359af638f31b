//! Selection of the active settings page.

use crate::input::switch::Position;

/// One of the mutually exclusive configuration pages.
///
/// The page is a pure function of the ordered pair of time-switch
/// positions; no other state takes part in the selection. Pairs with no
/// page assigned land on [`Page::Neutral`], which performs no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Home position, the one to leave the switches in.
    Resume,
    /// 1V/oct tracking calibration from the level pots.
    Calibration,
    /// Gate/trigger selection of the clock outs, loop LED brightness.
    LoopClock,
    /// Global audio toggles.
    GlobalToggles,
    Neutral,
}

impl Page {
    pub fn from_switches(switch1: Position, switch2: Position) -> Self {
        match (switch1, switch2) {
            (Position::Up, Position::Up) => Self::Resume,
            (Position::Center, Position::Center) => Self::Calibration,
            (Position::Up, Position::Down) => Self::LoopClock,
            (Position::Down, Position::Up) => Self::GlobalToggles,
            _ => Self::Neutral,
        }
    }
}
