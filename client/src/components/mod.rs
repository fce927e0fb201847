//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and charts while reading shared state
//! from Leptos context providers or from props supplied by a connecting layer.

pub mod account_menu;
pub mod badge;
pub mod header;
pub mod icons;
pub mod loader;
pub mod menu;
pub mod menu_container;
pub mod metric_graph;
