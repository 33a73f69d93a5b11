//! Timed-transition descriptors rendered to CSS animations.
//!
//! DESIGN
//! ======
//! Every entrance, exit and looping effect is described as data
//! (`Transition` + `Keyframes`) and turned into an inline `animation`
//! declaration. The keyframes themselves live in `style/main.css`.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Timing curve of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// How many times a transition plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

/// Named keyframe sets defined in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyframes {
    /// Opacity 0 -> 1 while rising 20px.
    FadeUp,
    /// Opacity 1 -> 0 while rising 20px.
    FadeUpOut,
    /// Opacity 0 -> 1 while sliding in from the right.
    SlideIn,
    /// Opacity 1 -> 0 while sliding out to the left.
    SlideOut,
    /// Opacity 0 -> 1 while scaling from 0.8.
    ScaleIn,
    /// Full rotation.
    Spin,
    /// Bar width grows from zero to its inline width.
    FillBar,
    FloatA,
    FloatB,
    FloatC,
}

impl Keyframes {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Keyframes::FadeUp => "fade-up",
            Keyframes::FadeUpOut => "fade-up-out",
            Keyframes::SlideIn => "slide-in",
            Keyframes::SlideOut => "slide-out",
            Keyframes::ScaleIn => "scale-in",
            Keyframes::Spin => "spin",
            Keyframes::FillBar => "fill-bar",
            Keyframes::FloatA => "float-a",
            Keyframes::FloatB => "float-b",
            Keyframes::FloatC => "float-c",
        }
    }

    /// Exits keep their final frame until unmount; everything else only
    /// holds its first frame during the delay so hover styles still apply.
    #[must_use]
    pub const fn fill_mode(self) -> &'static str {
        match self {
            Keyframes::FadeUpOut | Keyframes::SlideOut => "forwards",
            _ => "backwards",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Transition {
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self { duration_ms, delay_ms: 0, easing: Easing::EaseOut, repeat: Repeat::Once }
    }

    #[must_use]
    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub const fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Push the delay back by `step_ms` for every position in a list.
    #[must_use]
    pub fn staggered(mut self, step_ms: u32, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms = self.delay_ms.saturating_add(step_ms.saturating_mul(index));
        self
    }

    /// Inline `animation` declaration playing `keyframes` with this timing.
    #[must_use]
    pub fn css(&self, keyframes: Keyframes) -> String {
        let iterations = match self.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        };
        format!(
            "animation: {} {}ms {} {}ms {} {};",
            keyframes.name(),
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            iterations,
            keyframes.fill_mode(),
        )
    }
}

/// Section entrance and exit.
pub const SECTION: Transition = Transition::new(500);
/// Staggered content inside a section.
pub const REVEAL: Transition = Transition::new(400);
/// Loading spinner: one turn per second, forever.
pub const SPINNER: Transition = Transition::new(1000).eased(Easing::Linear).forever();
/// Skill bar fill.
pub const SKILL_FILL: Transition = Transition::new(1000).delayed(500);
/// Hero floating shapes.
pub const FLOAT_SHAPES: [(Keyframes, Transition); 3] = [
    (Keyframes::FloatA, Transition::new(6000).eased(Easing::EaseInOut).forever()),
    (Keyframes::FloatB, Transition::new(5000).delayed(500).eased(Easing::EaseInOut).forever()),
    (Keyframes::FloatC, Transition::new(7000).delayed(1000).eased(Easing::EaseInOut).forever()),
];
