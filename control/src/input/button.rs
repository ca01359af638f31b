//! Edge detection over debounced button levels.

/// Use this to hold a button's state over time.
///
/// The raw level is debounced by the caller; this only derives the press
/// edge that raises pending-change flags.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub clicked: bool,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.clicked = !was_pressed && down;
    }
}
