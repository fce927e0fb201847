//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure display math
//! from page and component logic to improve reuse and testability.

pub mod chart;
pub mod date;
pub mod format;
pub mod i18n;
pub mod outside_click;
pub mod routes;
