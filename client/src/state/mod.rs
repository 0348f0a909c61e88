//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `catalog` and `desk` own window bookkeeping,
//! `panel` holds the fetch shape every content panel shares, and
//! `theories`/`citations` add the form state of the two writable panels.

pub mod catalog;
pub mod citations;
pub mod desk;
pub mod panel;
pub mod theories;
