//! Detection of the enter-settings chord hold.

/// How long the chord must be held to enter or save, in control-loop
/// ticks.
pub(crate) const ENTER_HOLD_TICKS: i32 = 300_000;

/// Holds released at or below this count are treated as switch bounce.
pub(crate) const ENTER_DEBOUNCE_TICKS: i32 = 1_000;

/// Counter value parked after a completed hold, waiting for release.
const RELEASE_WAIT: i32 = -1;

/// Debounced long-press detector of the enter-settings button chord.
///
/// One update per control-loop tick. The whole protocol is a function of a
/// single counter: it climbs while the chord is held, fires once when it
/// crosses [`ENTER_HOLD_TICKS`] and is then parked at a sentinel until the
/// chord is released again.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EntryDetector {
    counter: i32,
}

/// What the current tick of chord input amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryAction {
    None,
    /// A completed hold is waiting for release; all indicator LEDs are to
    /// be lit as confirmation.
    Feedback,
    Enter,
    SaveAndExit,
    Cancel,
}

impl EntryDetector {
    pub fn update(&mut self, chord_held: bool, settings_active: bool) -> EntryAction {
        if chord_held {
            if self.counter == RELEASE_WAIT {
                return EntryAction::Feedback;
            }
            self.counter += 1;
            if self.counter > ENTER_HOLD_TICKS {
                self.counter = RELEASE_WAIT;
                if settings_active {
                    return EntryAction::SaveAndExit;
                }
                return EntryAction::Enter;
            }
        } else {
            let released_early =
                self.counter > ENTER_DEBOUNCE_TICKS && self.counter < ENTER_HOLD_TICKS;
            self.counter = 0;
            if released_early && settings_active {
                return EntryAction::Cancel;
            }
        }
        EntryAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold(detector: &mut EntryDetector, ticks: i32, active: bool) -> EntryAction {
        let mut action = EntryAction::None;
        for _ in 0..ticks {
            action = detector.update(true, active);
        }
        action
    }

    #[test]
    fn when_chord_is_held_for_the_full_duration_it_enters() {
        let mut detector = EntryDetector::default();
        assert_eq!(hold(&mut detector, ENTER_HOLD_TICKS, false), EntryAction::None);
        assert_eq!(detector.update(true, false), EntryAction::Enter);
    }

    #[test]
    fn when_chord_is_kept_held_after_entering_it_reports_feedback() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_HOLD_TICKS + 1, false);
        assert_eq!(detector.update(true, true), EntryAction::Feedback);
        assert_eq!(detector.update(true, true), EntryAction::Feedback);
    }

    #[test]
    fn when_chord_is_held_again_while_active_it_saves_and_exits_once() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_HOLD_TICKS + 1, false);
        detector.update(false, true);
        assert_eq!(
            hold(&mut detector, ENTER_HOLD_TICKS + 1, true),
            EntryAction::SaveAndExit
        );
        assert_eq!(detector.update(true, false), EntryAction::Feedback);
    }

    #[test]
    fn when_chord_is_released_mid_hold_while_active_it_cancels() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_DEBOUNCE_TICKS + 1, true);
        assert_eq!(detector.update(false, true), EntryAction::Cancel);
    }

    #[test]
    fn when_chord_is_released_mid_hold_while_inactive_nothing_happens() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_DEBOUNCE_TICKS + 1, false);
        assert_eq!(detector.update(false, false), EntryAction::None);
    }

    #[test]
    fn when_release_comes_within_the_debounce_window_it_is_noise() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_DEBOUNCE_TICKS, true);
        assert_eq!(detector.update(false, true), EntryAction::None);
    }

    #[test]
    fn when_chord_is_released_after_entering_it_does_not_cancel() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_HOLD_TICKS + 1, false);
        assert_eq!(detector.update(false, true), EntryAction::None);
    }

    #[test]
    fn when_hold_is_interrupted_the_count_starts_over() {
        let mut detector = EntryDetector::default();
        hold(&mut detector, ENTER_HOLD_TICKS, false);
        detector.update(false, false);
        assert_eq!(hold(&mut detector, ENTER_HOLD_TICKS, false), EntryAction::None);
        assert_eq!(detector.update(true, false), EntryAction::Enter);
    }
}
