//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep validation, formatting, list handling and access
//! decisions free of rendering code so they can be unit tested directly.

pub mod format;
pub mod guard;
pub mod listing;
pub mod notice;
pub mod settle;
pub mod validation;
