//! Project records and the source they are read from.
//!
//! Detail content is re-read from the source on every open. The
//! controller never caches records; the source owns them and the view
//! only copies the current version into the detail slot.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// One portfolio project as presented by the cards and the detail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable identifier used in fragments (`project/<id>`).
    pub id: String,
    /// Display title for the card and the detail header.
    pub title: String,
    /// One-line teaser shown on the card.
    pub summary: String,
    /// Markdown body of the detail view.
    pub body: String,
}

/// Read access to project content.
pub trait ProjectSource {
    /// The record for one project, if it exists.
    fn project(&self, id: &str) -> Option<ProjectRecord>;

    /// Every project, in presentation order.
    fn all(&self) -> Vec<ProjectRecord>;
}

impl ProjectSource for Vec<ProjectRecord> {
    fn project(&self, id: &str) -> Option<ProjectRecord> {
        self.iter().find(|record| record.id == id).cloned()
    }

    fn all(&self) -> Vec<ProjectRecord> {
        self.clone()
    }
}

/// Fetch the record backing a detail open.
///
/// Missing content is an error the caller logs; it must not change any
/// panel state.
pub fn materialize(source: &dyn ProjectSource, id: &str) -> FolioResult<ProjectRecord> {
    source
        .project(id)
        .ok_or_else(|| FolioError::ProjectNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProjectRecord> {
        vec![ProjectRecord {
            id: "p1".to_string(),
            title: "First".to_string(),
            summary: "A first project".to_string(),
            body: "# First\nBody".to_string(),
        }]
    }

    #[test]
    fn materialize_finds_existing() {
        let source = sample();
        let record = materialize(&source, "p1").unwrap();
        assert_eq!(record.title, "First");
    }

    #[test]
    fn materialize_missing_is_error() {
        let source = sample();
        let err = materialize(&source, "nope").unwrap_err();
        assert!(matches!(err, FolioError::ProjectNotFound(id) if id == "nope"));
    }
}
