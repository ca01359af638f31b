//! Process all input peripherals over time.

use super::button::Button;
use super::changes::{Changes, ControlChange};
use super::snapshot::Snapshot;
use super::switch::Position;

/// Stateful store of raw inputs.
///
/// This struct mirrors the per-tick snapshot, runs the buttons through
/// edge detection and raises a pending change for every actuation.
///
/// Note that despite all its attributes being public, they should be only
/// read from, with the exception of changes consumed through
/// [`Changes::take`].
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub level_pot: [u16; 2],
    pub regen_pot: [u16; 2],
    pub switch: [Position; 2],
    pub reverse: [Button; 2],
    pub infinite: [Button; 2],
    pub entry_chord: bool,
    pub changes: Changes,
}

impl Store {
    pub fn update(&mut self, snapshot: Snapshot) {
        self.level_pot = snapshot.level_pot;
        self.regen_pot = snapshot.regen_pot;
        self.switch = snapshot.switch;
        self.entry_chord = snapshot.entry_chord;
        for (i, button) in self.reverse.iter_mut().enumerate() {
            button.update(snapshot.reverse[i]);
            if button.clicked {
                self.changes.raise(ControlChange::Reverse(i));
            }
        }
        for (i, button) in self.infinite.iter_mut().enumerate() {
            button.update(snapshot.infinite[i]);
            if button.clicked {
                self.changes.raise(ControlChange::Infinite(i));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_input_snapshot_is_written_it_is_reflected_in_attributes() {
        let mut inputs = Store::default();
        inputs.update(Snapshot {
            level_pot: [100, 200],
            regen_pot: [300, 400],
            switch: [Position::Up, Position::Down],
            reverse: [true, false],
            infinite: [false, true],
            entry_chord: true,
        });

        assert_eq!(inputs.level_pot, [100, 200]);
        assert_eq!(inputs.regen_pot, [300, 400]);
        assert_eq!(inputs.switch, [Position::Up, Position::Down]);
        assert!(inputs.reverse[0].pressed);
        assert!(!inputs.reverse[1].pressed);
        assert!(inputs.infinite[1].pressed);
        assert!(inputs.entry_chord);
    }

    #[test]
    fn when_button_is_held_over_multiple_ticks_it_raises_a_single_change() {
        let mut inputs = Store::default();
        let snapshot = Snapshot {
            reverse: [true, false],
            ..Snapshot::default()
        };

        inputs.update(snapshot);
        inputs.update(snapshot);
        inputs.update(snapshot);

        assert!(inputs.changes.take(ControlChange::Reverse(0)));
        assert!(!inputs.changes.take(ControlChange::Reverse(0)));
    }

    #[test]
    fn when_button_is_clicked_again_it_raises_another_change() {
        let mut inputs = Store::default();
        let mut snapshot = Snapshot::default();

        snapshot.infinite[0] = true;
        inputs.update(snapshot);
        assert!(inputs.changes.take(ControlChange::Infinite(0)));

        snapshot.infinite[0] = false;
        inputs.update(snapshot);
        snapshot.infinite[0] = true;
        inputs.update(snapshot);
        assert!(inputs.changes.take(ControlChange::Infinite(0)));
    }
}
