//! Static panel registry.
//!
//! The three section panels exist for the lifetime of the page. The
//! dynamic project detail panel is not registered here; it lives in the
//! controller's detail slot (see [`crate::view`]).

use serde::{Deserialize, Serialize};

/// Identity of a static overlay panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    About,
    Projects,
    Contact,
}

impl PanelId {
    /// Every static panel, in nav order.
    pub const ALL: [PanelId; 3] = [PanelId::About, PanelId::Projects, PanelId::Contact];

    /// Stable key used in fragments and CSS hooks.
    pub fn as_key(&self) -> &'static str {
        match self {
            PanelId::About => "about",
            PanelId::Projects => "projects",
            PanelId::Contact => "contact",
        }
    }

    /// Look up a panel by its stable key. Unknown keys are `None`;
    /// callers log and no-op rather than fail.
    pub fn from_key(key: &str) -> Option<PanelId> {
        Self::ALL.iter().copied().find(|panel| panel.as_key() == key)
    }

    /// Heading shown in the panel chrome and nav links.
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::About => "About",
            PanelId::Projects => "Projects",
            PanelId::Contact => "Contact",
        }
    }
}
