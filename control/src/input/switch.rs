//! Three-position switch reading.

/// Position of one of the time switches.
///
/// The switches are debounced by the caller; this is the settled reading
/// for the current control-loop tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    Up,
    Center,
    Down,
}

impl Default for Position {
    fn default() -> Self {
        Self::Center
    }
}
