//! Structures used to pass the current state of hardware peripherals.

use super::switch::Position;

/// The current state of all peripherals consumed by the settings layer.
///
/// `Snapshot` is meant to be passed from the hardware binding once per
/// control-loop tick. The data is expected to be pre-conditioned:
///
/// 1. Pot readings are smoothed by the caller, within 0..=16383.
/// 2. Switch and button debouncing is done by the caller.
/// 3. `entry_chord` is true while all buttons of the enter-settings chord
///    are pressed at once.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub level_pot: [u16; 2],
    pub regen_pot: [u16; 2],
    pub switch: [Position; 2],
    pub reverse: [bool; 2],
    pub infinite: [bool; 2],
    pub entry_chord: bool,
}
