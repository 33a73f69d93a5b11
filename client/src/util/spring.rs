//! Damped spring integration for the pointer-follower markers.
//!
//! Each axis is an independent mass-spring-damper pulled toward the pointer.
//! Integration uses semi-implicit Euler with a capped sub-step so large frame
//! gaps (background tabs) cannot blow the simulation up.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use crate::state::site::Pointer;

const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
const MAX_FRAME_SECS: f64 = 0.1;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Tight, fast spring for the small cursor dot.
pub const DOT_SPRING: SpringConfig = SpringConfig { stiffness: 300.0, damping: 30.0, mass: 1.0 };
/// Looser, slower spring for the outline ring.
pub const OUTLINE_SPRING: SpringConfig = SpringConfig { stiffness: 150.0, damping: 20.0, mass: 1.0 };

/// Half the rendered size of each marker, so it centres on the pointer.
pub const DOT_OFFSET: f64 = 4.0;
pub const OUTLINE_OFFSET: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
}

impl Spring {
    #[must_use]
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self { config, position, velocity: 0.0 }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Advance the spring by `dt_secs` toward `target` and return the new position.
    pub fn step(&mut self, target: f64, dt_secs: f64) -> f64 {
        let mut remaining = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_SUBSTEP_SECS);
            let force = -self.config.stiffness * (self.position - target) - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }
        if self.is_settled(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    #[must_use]
    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }
}

/// A marker following the pointer on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    x: Spring,
    y: Spring,
    offset: f64,
}

impl Follower {
    #[must_use]
    pub fn new(config: SpringConfig, offset: f64) -> Self {
        Self { x: Spring::new(config, -offset), y: Spring::new(config, -offset), offset }
    }

    #[must_use]
    pub fn dot() -> Self {
        Self::new(DOT_SPRING, DOT_OFFSET)
    }

    #[must_use]
    pub fn outline() -> Self {
        Self::new(OUTLINE_SPRING, OUTLINE_OFFSET)
    }

    /// Advance toward `pointer` and return the marker's top-left corner.
    pub fn step(&mut self, pointer: Pointer, dt_secs: f64) -> (f64, f64) {
        let x = self.x.step(pointer.x - self.offset, dt_secs);
        let y = self.y.step(pointer.y - self.offset, dt_secs);
        (x, y)
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x.position(), self.y.position())
    }

    #[must_use]
    pub fn is_settled(&self, pointer: Pointer) -> bool {
        self.x.is_settled(pointer.x - self.offset) && self.y.is_settled(pointer.y - self.offset)
    }
}

/// The dot and outline markers, stepped as one unit by the cursor frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorMarkers {
    pub dot: Follower,
    pub outline: Follower,
}

impl Default for CursorMarkers {
    fn default() -> Self {
        Self { dot: Follower::dot(), outline: Follower::outline() }
    }
}

impl CursorMarkers {
    /// Advance both markers; `true` once both rest on `pointer`.
    pub fn step(&mut self, pointer: Pointer, dt_secs: f64) -> bool {
        self.dot.step(pointer, dt_secs);
        self.outline.step(pointer, dt_secs);
        self.is_settled(pointer)
    }

    #[must_use]
    pub fn is_settled(&self, pointer: Pointer) -> bool {
        self.dot.is_settled(pointer) && self.outline.is_settled(pointer)
    }
}

/// Inline transform placing a marker at `(x, y)`.
#[must_use]
pub fn translate_css((x, y): (f64, f64)) -> String {
    format!("transform: translate3d({x:.2}px, {y:.2}px, 0);")
}
