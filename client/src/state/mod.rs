//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is wrapped in an `RwSignal` by `App` and read by pages
//! and connecting components with `expect_context`.

pub mod audit_results;
pub mod auth;
pub mod parameters;
pub mod projects;
