//! Shared layout components.

pub mod footer;
pub mod navbar;
pub mod spinner;
