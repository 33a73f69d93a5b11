//! Ephemeral page state and the fixed portfolio content.
//!
//! DESIGN
//! ======
//! Mutable state (`site`, `presence`) is plain data with setter methods so
//! the transition rules are testable without a browser. Components hold it in
//! an `RwSignal` provided through context; `content` is compile-time data.

pub mod content;
pub mod presence;
pub mod site;
