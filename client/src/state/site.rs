//! Root-owned UI state: active section, pointer position, loading phase.
//!
//! DESIGN
//! ======
//! `SiteState` is the only writer-facing surface. Children read it through
//! memos and mutate it through the setters below, so the invariants (closed
//! section set, one-way loading transition, finite pointer coordinates) are
//! enforced in one place.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::time::Duration;

use super::presence::SectionPresence;

/// How long the loading overlay stays up after mount.
pub const LOADING_DELAY: Duration = Duration::from_millis(2500);

/// One of the four top-level content views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Every section in navigation order.
    pub const ALL: [Section; 4] = [Section::Hero, Section::About, Section::Projects, Section::Contact];

    /// Stable identifier used in markup and logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Loading overlay lifecycle. `Ready` is terminal for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    /// Phase a freshly mounted page is in after `elapsed` time.
    #[must_use]
    pub fn after(elapsed: Duration) -> Self {
        if elapsed >= LOADING_DELAY { LoadPhase::Ready } else { LoadPhase::Loading }
    }
}

/// Last observed pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// UI state owned by the portfolio page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub load_phase: LoadPhase,
    pub pointer: Pointer,
    pub presence: SectionPresence,
}

impl SiteState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_phase == LoadPhase::Loading
    }

    /// Move the loading phase forward to where `elapsed` time since mount
    /// puts it. Never goes back from `Ready`; returns whether loading is over.
    pub fn advance_loading(&mut self, elapsed: Duration) -> bool {
        if self.load_phase == LoadPhase::Loading {
            self.load_phase = LoadPhase::after(elapsed);
        }
        self.load_phase == LoadPhase::Ready
    }

    /// The section most recently chosen by the user.
    #[must_use]
    pub fn active_section(&self) -> Section {
        self.presence.active()
    }

    /// Select `section` as the active one.
    ///
    /// Returns a leave token when the currently displayed section has to
    /// animate out first; pass it to [`SiteState::finish_leave`] once the
    /// exit transition has elapsed.
    pub fn select_section(&mut self, section: Section) -> Option<u64> {
        self.presence.select(section)
    }

    /// Complete a pending leave transition. Stale tokens are ignored.
    pub fn finish_leave(&mut self, token: u64) -> bool {
        self.presence.finish_leave(token)
    }

    /// Record a pointer-move event. Non-finite coordinates are dropped and
    /// the previous position is kept; returns whether the position changed.
    pub fn set_pointer(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let next = Pointer { x, y };
        if self.pointer == next {
            return false;
        }
        self.pointer = next;
        true
    }
}
