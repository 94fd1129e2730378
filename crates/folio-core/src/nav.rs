//! Navigation state and its fragment encoding.
//!
//! The fragment is the wire format toward history: empty means home, a
//! bare panel key means that static panel, `project/<id>` means the
//! detail view for `<id>`. Every value [`NavState::encode`] produces
//! must decode back to the same state.

use serde::{Deserialize, Serialize};

use crate::panel::PanelId;

/// What should be visible, as a single serializable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavState {
    /// No panel open; the hero page shows.
    Home,
    /// A static section panel.
    Panel(PanelId),
    /// The dynamic detail panel for one project.
    ProjectDetail(String),
}

impl NavState {
    /// Canonical fragment encoding.
    pub fn encode(&self) -> String {
        match self {
            NavState::Home => String::new(),
            NavState::Panel(panel) => panel.as_key().to_string(),
            NavState::ProjectDetail(id) => format!("project/{id}"),
        }
    }

    /// Decode a fragment, tolerating a leading `#` or `/` marker.
    ///
    /// Unrecognized values are `None`: nothing opens and no error
    /// surfaces, per the navigation contract.
    pub fn decode(fragment: &str) -> Option<NavState> {
        let key = normalize(fragment);
        if key.is_empty() {
            return Some(NavState::Home);
        }
        if let Some(id) = key.strip_prefix("project/") {
            if id.is_empty() {
                return None;
            }
            return Some(NavState::ProjectDetail(id.to_string()));
        }
        PanelId::from_key(key).map(NavState::Panel)
    }
}

/// Strip the leading fragment/path marker, if any.
pub(crate) fn normalize(fragment: &str) -> &str {
    fragment.trim_start_matches(['#', '/'])
}

/// How a fragment write lands in history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// A new history entry. Exactly one per user-visible open; the
    /// intermediate transition states never become entries.
    Push,
    /// Rewrite the current entry in place.
    Replace,
}

/// A fragment rewrite emitted by a view transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentWrite {
    pub target: NavState,
    pub mode: WriteMode,
}

impl FragmentWrite {
    pub fn push(target: NavState) -> Self {
        Self {
            target,
            mode: WriteMode::Push,
        }
    }

    pub fn replace(target: NavState) -> Self {
        Self {
            target,
            mode: WriteMode::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_static_panels() {
        assert_eq!(NavState::Home.encode(), "");
        assert_eq!(NavState::Panel(PanelId::About).encode(), "about");
        assert_eq!(NavState::Panel(PanelId::Projects).encode(), "projects");
        assert_eq!(NavState::Panel(PanelId::Contact).encode(), "contact");
    }

    #[test]
    fn encode_project_detail() {
        let nav = NavState::ProjectDetail("sol-tracker".to_string());
        assert_eq!(nav.encode(), "project/sol-tracker");
    }

    #[test]
    fn decode_strips_markers() {
        assert_eq!(
            NavState::decode("#about"),
            Some(NavState::Panel(PanelId::About))
        );
        assert_eq!(
            NavState::decode("/contact"),
            Some(NavState::Panel(PanelId::Contact))
        );
        assert_eq!(NavState::decode(""), Some(NavState::Home));
        assert_eq!(NavState::decode("#"), Some(NavState::Home));
    }

    #[test]
    fn decode_project_detail() {
        assert_eq!(
            NavState::decode("project/p1"),
            Some(NavState::ProjectDetail("p1".to_string()))
        );
    }

    #[test]
    fn decode_ignores_unknown() {
        assert_eq!(NavState::decode("gallery"), None);
        assert_eq!(NavState::decode("project/"), None);
        assert_eq!(NavState::decode("projects/extra"), None);
    }
}
