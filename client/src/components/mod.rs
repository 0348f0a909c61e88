//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Window chrome and the taskbar read and write the shared desk registry from
//! context. Each content panel owns its own state signal and talks to the
//! research API directly.

pub mod assumptions_panel;
pub mod citations_panel;
pub mod contradictions_panel;
pub mod desk_window;
pub mod provenance_panel;
pub mod taskbar;
pub mod theories_panel;
pub mod theory_select;
