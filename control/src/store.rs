//! The main store of the settings layer state machine.

use crate::cache::Cache;
use crate::entry::{EntryAction, EntryDetector};
use crate::input::changes::ControlChange;
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::input::store::Store as Input;
use crate::led::Sequencer;
use crate::log;
use crate::output::DesiredOutput;
use crate::page::Page;
use crate::save::Save;

/// The main store of peripheral abstractions and device configuration.
///
/// This struct is the central piece of the settings layer. It takes
/// `InputSnapshot` on its input, runs the mode-entry state machine, the
/// page dispatcher and the LED sequencer over it once per tick, and hands
/// save requests and the desired LED state back to the caller.
///
/// The caller is expected to invoke, in this order and once per
/// control-loop tick: [`Store::apply_input_snapshot`],
/// [`Store::tick_mode_entry`], [`Store::tick_settings_dispatch`] and
/// [`Store::tick_led_sequence`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    state: State,
    pub(crate) input: Input,
    /// Device configuration owned by the settings layer. To be read from
    /// the outside only.
    pub cache: Cache,
    entry: EntryDetector,
    sequencer: Sequencer,
    entry_feedback: bool,
}

/// The top-level mode the device is in.
///
/// Keeping the system-settings and calibration modes as variants of one
/// enum makes the two hidden modes mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Normal,
    SystemSettings,
    Calibrating,
}

#[allow(clippy::new_without_default)]
impl Store {
    /// Initialize the store with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Normal,
            input: Input::default(),
            cache: Cache::default(),
            entry: EntryDetector::default(),
            sequencer: Sequencer::default(),
            entry_feedback: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn apply_input_snapshot(&mut self, snapshot: InputSnapshot) {
        self.input.update(snapshot);
    }

    /// Advance the mode-entry state machine by one tick.
    ///
    /// Returns `Some` exactly when a second full chord hold completed; the
    /// returned [`Save`] is the caller's cue to invoke the persistence
    /// collaborator.
    pub fn tick_mode_entry(&mut self) -> Option<Save> {
        let active = self.state == State::SystemSettings;
        let action = self.entry.update(self.input.entry_chord, active);
        self.entry_feedback = action == EntryAction::Feedback;
        match action {
            EntryAction::Enter => {
                log::info!("Entering system settings");
                self.state = State::SystemSettings;
                None
            }
            EntryAction::SaveAndExit => {
                log::info!("Saving system settings and leaving");
                self.leave_system_settings();
                Some(self.cache.save())
            }
            EntryAction::Cancel => {
                log::info!("Leaving system settings without saving");
                self.leave_system_settings();
                None
            }
            EntryAction::Feedback | EntryAction::None => None,
        }
    }

    /// Apply the page selected by the time switches.
    ///
    /// Meaningful only while system settings are active; outside of the
    /// mode this is a no-op, so it is safe to invoke unconditionally.
    pub fn tick_settings_dispatch(&mut self) {
        if self.state != State::SystemSettings {
            return;
        }

        match Page::from_switches(self.input.switch[0], self.input.switch[1]) {
            Page::Resume => {
                self.cache.disable_mode_changes = false;
            }
            Page::Calibration => {
                self.cache.disable_mode_changes = false;
                for channel in 0..2 {
                    self.cache.parameters.tracking_comp[channel] =
                        f32::from(self.input.level_pot[channel]) / 8192.0 + 0.75;
                    self.cache.parameters.level[channel] = 1.0;
                }
            }
            Page::LoopClock => {
                self.cache.disable_mode_changes = true;
                self.cache.led_brightness = self.input.regen_pot[0] / 137 + 1;
                for channel in 0..2 {
                    if self.input.changes.take(ControlChange::Reverse(channel)) {
                        let mode = self.cache.modes.loop_clock[channel].toggled();
                        log::info!("Setting loop clock {:?} to {:?}", channel, mode);
                        self.cache.modes.loop_clock[channel] = mode;
                    }
                }
                if self.input.changes.take(ControlChange::Infinite(0)) {
                    let mode = self.cache.modes.main_clock.toggled();
                    log::info!("Setting main clock to {:?}", mode);
                    self.cache.modes.main_clock = mode;
                }
            }
            Page::GlobalToggles => {
                self.cache.disable_mode_changes = true;
                if self.input.changes.take(ControlChange::Reverse(0)) {
                    self.cache.modes.auto_mute = !self.cache.modes.auto_mute;
                    log::info!("Setting auto mute to {:?}", self.cache.modes.auto_mute);
                }
                if self.input.changes.take(ControlChange::Reverse(1)) {
                    self.cache.modes.softclip = !self.cache.modes.softclip;
                    log::info!("Setting soft clipping to {:?}", self.cache.modes.softclip);
                }
            }
            Page::Neutral => {}
        }
    }

    /// Advance the LED display by one tick and render the desired output.
    ///
    /// While a completed chord hold waits for release, every indicator LED
    /// is driven on as confirmation.
    pub fn tick_led_sequence(&mut self) -> DesiredOutput {
        if self.state == State::SystemSettings {
            self.sequencer
                .update(self.input.switch[0], &self.cache.modes);
        }

        if self.entry_feedback {
            return DesiredOutput::feedback();
        }

        DesiredOutput {
            loop_led: [self.sequencer.loop_led(0), self.sequencer.loop_led(1)],
            ping_led: self.sequencer.ping_led(),
            reverse_led: [false; 2],
            infinite_led: [false; 2],
        }
    }

    /// Put the device into the hardware calibration mode.
    ///
    /// Calibration itself is driven by a separate boot-time routine; the
    /// settings layer only tracks the mode so that the two hidden modes
    /// can never be active at once. Entering system settings forces
    /// calibration off.
    pub fn enter_calibration(&mut self) {
        if self.state == State::Normal {
            self.state = State::Calibrating;
        }
    }

    pub fn leave_calibration(&mut self) {
        if self.state == State::Calibrating {
            self.state = State::Normal;
        }
    }

    fn leave_system_settings(&mut self) {
        self.state = State::Normal;
        self.cache.disable_mode_changes = false;
    }
}
