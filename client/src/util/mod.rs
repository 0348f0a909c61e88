//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting and pointer math out of component bodies
//! so they can be unit tested without a browser.

pub mod drag;
pub mod format;
