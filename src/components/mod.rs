//! Shared UI components.

pub mod navbar;
