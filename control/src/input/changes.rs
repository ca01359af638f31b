//! Pending changes of the toggle-capable controls.
//!
//! Every physical actuation of a REV or INF button raises one pending
//! change. Whichever settings page handles the control consumes the change
//! exactly once; a change no active page handles stays queued.

use heapless::Vec;

/// Single actuation of a toggle-capable control.
///
/// The index selects the channel, 0 for A and 1 for B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlChange {
    Reverse(usize),
    Infinite(usize),
}

/// Set of changes waiting to be consumed.
///
/// Raising a change that is already pending keeps just one copy, so a
/// bouncing or held button cannot stack up repeated toggles.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Changes {
    pending: Vec<ControlChange, 4>,
}

impl Default for Changes {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl Changes {
    pub fn raise(&mut self, change: ControlChange) {
        if !self.pending.contains(&change) {
            // NOTE: The capacity equals the number of distinct controls.
            let _ = self.pending.push(change);
        }
    }

    /// Consume the pending change of the given control.
    ///
    /// Returns true when there was one. The change is removed in the same
    /// call, so the next tick does not act on it again.
    pub fn take(&mut self, change: ControlChange) -> bool {
        let was_pending = self.pending.contains(&change);
        if was_pending {
            self.pending.retain(|c| *c != change);
        }
        was_pending
    }
}
