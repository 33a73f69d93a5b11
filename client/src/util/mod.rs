//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep timing data and motion maths out of component code
//! so it can be tested natively, without a browser.

pub mod motion;
pub mod spring;
