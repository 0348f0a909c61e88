//! Static catalog of desktop modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The taskbar renders one control per catalog entry and the desk registry
//! resolves window titles from it, so both agree on ids and display names.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Stable identifier of a desktop module. Each module opens at most one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Theories,
    Citations,
    Assumptions,
    Contradictions,
    Provenance,
}

impl ModuleId {
    /// Lowercase key used for window and taskbar CSS modifiers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theories => "theories",
            Self::Citations => "citations",
            Self::Assumptions => "assumptions",
            Self::Contradictions => "contradictions",
            Self::Provenance => "provenance",
        }
    }

    /// Catalog entry for this module.
    #[must_use]
    pub fn info(self) -> &'static ModuleInfo {
        let index = match self {
            Self::Theories => 0,
            Self::Citations => 1,
            Self::Assumptions => 2,
            Self::Contradictions => 3,
            Self::Provenance => 4,
        };
        &CATALOG[index]
    }
}

/// A module the user can launch from the taskbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Modules in taskbar order.
pub const CATALOG: [ModuleInfo; 5] = [
    ModuleInfo { id: ModuleId::Theories, name: "Theories", icon: "📚" },
    ModuleInfo { id: ModuleId::Citations, name: "Citations", icon: "📝" },
    ModuleInfo { id: ModuleId::Assumptions, name: "Assumptions", icon: "🤔" },
    ModuleInfo { id: ModuleId::Contradictions, name: "Contradictions", icon: "⚠️" },
    ModuleInfo { id: ModuleId::Provenance, name: "Provenance", icon: "🔍" },
];
