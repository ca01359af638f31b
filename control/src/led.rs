//! Blink-coded display of the gate/trigger modes.
//!
//! While the first time switch rests up, the display cycles through six
//! fixed windows: a flash of the loop A LED, a sustain window, a flash of
//! the ping LED, a sustain window, a flash of the loop B LED and a final
//! sustain window. A clock configured as gate keeps its LED lit through
//! the sustain window, a clock configured as trigger is blanked there, so
//! the two modes read as a long or a short blink on plain on/off LEDs.

use crate::cache::Modes;
use crate::input::switch::Position;

/// Length of the short flash marking the trigger boundary, in ticks.
pub(crate) const TRIG_CNTS: u32 = 200;

/// Length of one third of the cycle; a gate blink sustains this long.
pub(crate) const GATE_CNTS: u32 = 1665;

pub(crate) const CYCLE_CNTS: u32 = 3 * GATE_CNTS;

struct Window {
    length: u32,
    effect: Effect,
}

enum Effect {
    /// Assign all three outputs.
    Show {
        loop_led: [bool; 2],
        ping_led: bool,
    },
    /// Keep previous outputs, blanking the signal when its clock is in
    /// trigger mode.
    SustainUnlessTrig(Signal),
}

enum Signal {
    LoopA,
    Ping,
    LoopB,
}

/// The timetable of one display cycle.
///
/// Windows are entered in order, each for its length in ticks, and their
/// effect is applied on every tick spent inside.
const WINDOWS: [Window; 6] = [
    Window {
        length: TRIG_CNTS,
        effect: Effect::Show {
            loop_led: [true, false],
            ping_led: false,
        },
    },
    Window {
        length: GATE_CNTS - TRIG_CNTS,
        effect: Effect::SustainUnlessTrig(Signal::LoopA),
    },
    Window {
        length: TRIG_CNTS,
        effect: Effect::Show {
            loop_led: [false, false],
            ping_led: true,
        },
    },
    Window {
        length: GATE_CNTS - TRIG_CNTS,
        effect: Effect::SustainUnlessTrig(Signal::Ping),
    },
    Window {
        length: TRIG_CNTS,
        effect: Effect::Show {
            loop_led: [false, true],
            ping_led: false,
        },
    },
    Window {
        length: GATE_CNTS - TRIG_CNTS,
        effect: Effect::SustainUnlessTrig(Signal::LoopB),
    },
];

/// Free-running flasher interleaving the three mode indications.
///
/// One update per control-loop tick; it advances only while `switch1` is
/// up and never blocks. The counter spends one tick on the wrap itself,
/// so one full cycle takes exactly [`CYCLE_CNTS`] ticks.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequencer {
    counter: u32,
    loop_led: [bool; 2],
    ping_led: bool,
}

impl Sequencer {
    pub fn update(&mut self, switch1: Position, modes: &Modes) {
        if switch1 != Position::Up {
            return;
        }

        self.counter += 1;
        if self.counter >= CYCLE_CNTS {
            self.counter = 0;
            return;
        }

        let mut end = 0;
        for window in &WINDOWS {
            end += window.length;
            if self.counter < end {
                self.apply(&window.effect, modes);
                break;
            }
        }
    }

    fn apply(&mut self, effect: &Effect, modes: &Modes) {
        match effect {
            Effect::Show { loop_led, ping_led } => {
                self.loop_led = *loop_led;
                self.ping_led = *ping_led;
            }
            Effect::SustainUnlessTrig(Signal::LoopA) => {
                if modes.loop_clock[0].is_trig() {
                    self.loop_led[0] = false;
                }
            }
            Effect::SustainUnlessTrig(Signal::Ping) => {
                if modes.main_clock.is_trig() {
                    self.ping_led = false;
                }
            }
            Effect::SustainUnlessTrig(Signal::LoopB) => {
                if modes.loop_clock[1].is_trig() {
                    self.loop_led[1] = false;
                }
            }
        }
    }

    pub fn loop_led(&self, channel: usize) -> bool {
        self.loop_led[channel]
    }

    pub fn ping_led(&self) -> bool {
        self.ping_led
    }
}
