//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome (loading overlay, cursor, navigation)
//! and the four section views. They receive state through props from the
//! portfolio page and never write it except through the callbacks they are
//! handed.

pub mod about_section;
pub mod contact_section;
pub mod custom_cursor;
pub mod hero_section;
pub mod loading_screen;
pub mod navigation;
pub mod projects_section;
pub mod section_frame;
