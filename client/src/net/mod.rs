//! Networking modules for the research backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls and `types` defines the wire schema the panels read.

pub mod api;
pub mod types;
