//! Owned state of the persistent device configuration.

use crate::save::Save;

/// Cache keeping the device parameters and modes owned by the settings
/// layer.
///
/// This holds everything the settings pages write and the long-press save
/// persists. The audio and CV paths only read it.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cache {
    pub parameters: Parameters,
    pub modes: Modes,
    /// PWM level of the loop LEDs, set from a pot on the loop-clock page.
    pub led_brightness: u16,
    /// While set, other subsystems must not alter channel or global modes
    /// through their usual controls.
    pub disable_mode_changes: bool,
}

/// Per-channel floating point parameters touched by the settings pages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameters {
    /// 1V/oct pitch tracking correction gain.
    pub tracking_comp: [f32; 2],
    pub level: [f32; 2],
}

/// Gate/trigger selection of the clock-out jacks and the global audio
/// toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modes {
    pub loop_clock: [GateTrig; 2],
    pub main_clock: GateTrig,
    pub auto_mute: bool,
    pub softclip: bool,
}

/// Output-pulse behavior of a clock-out jack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateTrig {
    Gate,
    Trig,
}

impl GateTrig {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Gate => Self::Trig,
            Self::Trig => Self::Gate,
        }
    }

    pub fn is_trig(self) -> bool {
        matches!(self, Self::Trig)
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            parameters: Parameters::default(),
            modes: Modes::default(),
            led_brightness: 4,
            disable_mode_changes: false,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            tracking_comp: [1.0; 2],
            level: [1.0; 2],
        }
    }
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            loop_clock: [GateTrig::Trig; 2],
            main_clock: GateTrig::Trig,
            auto_mute: true,
            softclip: true,
        }
    }
}

impl Cache {
    pub fn save(&self) -> Save {
        Save {
            parameters: self.parameters,
            modes: self.modes,
            led_brightness: self.led_brightness,
        }
    }
}
