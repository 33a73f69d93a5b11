//! Exit-before-enter bookkeeping for the section views.
//!
//! The selected section (`active`) changes synchronously on click, but the
//! displayed view only swaps after the previous one has finished its leave
//! animation. A token guards against completing a leave that was superseded.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use super::site::Section;

/// Whether the displayed section is on screen or animating out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Present,
    Leaving,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionPresence {
    active: Section,
    displayed: Section,
    phase: Phase,
    token: u64,
}

impl SectionPresence {
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// The single section view currently mounted.
    #[must_use]
    pub fn displayed(&self) -> Section {
        self.displayed
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.phase == Phase::Leaving
    }

    /// Choose the next section. Returns a token only when a new leave
    /// transition starts; retargeting during an ongoing leave reuses it.
    /// Choosing the leaving section again cancels the leave and invalidates
    /// its pending token.
    pub fn select(&mut self, next: Section) -> Option<u64> {
        self.active = next;
        match self.phase {
            Phase::Leaving if next == self.displayed => {
                self.phase = Phase::Present;
                self.token += 1;
                None
            }
            Phase::Leaving => None,
            Phase::Present if next == self.displayed => None,
            Phase::Present => {
                self.phase = Phase::Leaving;
                self.token += 1;
                Some(self.token)
            }
        }
    }

    /// Swap in the active section once the leave identified by `token` ends.
    pub fn finish_leave(&mut self, token: u64) -> bool {
        if self.phase != Phase::Leaving || token != self.token {
            return false;
        }
        self.displayed = self.active;
        self.phase = Phase::Present;
        true
    }
}
