//! Portfolio content library.
//!
//! The document side of the shell: the owner's profile and the project
//! records the cards and detail panels are built from. The controller
//! re-reads records through [`ProjectSource`] on every detail open, so
//! edits here are the single source of truth.

use folio_core::{ProjectRecord, ProjectSource};

/// Site owner details shown on the hero and the about panel.
#[derive(Clone, Debug)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub bio: Vec<String>,
    pub skills: Vec<String>,
}

/// All content the shell presents.
#[derive(Clone, Debug)]
pub struct Library {
    profile: Profile,
    projects: Vec<ProjectRecord>,
}

impl Library {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The built-in portfolio content.
    pub fn curated() -> Self {
        let profile = Profile {
            name: "Mara Voss".to_string(),
            tagline: "Systems engineer with a weakness for small, sharp tools".to_string(),
            email: "hello@maravoss.dev".to_string(),
            location: "Rotterdam, NL".to_string(),
            bio: vec![
                "I build infrastructure that stays out of the way: sync layers, \
                 embedded data stores, and the occasional terminal UI. Most of my \
                 work lives below the surface of products you would not know I \
                 touched, which is exactly how I like it."
                    .to_string(),
                "Before going independent I spent six years on storage teams, \
                 where I learned that boring technology is a feature and that \
                 every cache eventually becomes somebody's database."
                    .to_string(),
                "When not at a keyboard I restore dinghies, badly."
                    .to_string(),
            ],
            skills: vec![
                "Rust".to_string(),
                "Distributed storage".to_string(),
                "Protocol design".to_string(),
                "Embedded Linux".to_string(),
                "Performance profiling".to_string(),
            ],
        };

        let projects = vec![
            ProjectRecord {
                id: "driftline".to_string(),
                title: "Driftline".to_string(),
                summary: "Offline-first sync engine for field research teams".to_string(),
                body: "Driftline keeps ecological survey data consistent across \
                       devices that may not see a network for weeks.\n\n\
                       ## Highlights\n\n\
                       - CRDT document model with per-site partitioning\n\
                       - Delta sync over radio links as slow as 2.4 kbps\n\
                       - Append-only storage that survives pulled batteries\n\n\
                       Built for a wetlands monitoring NGO; now in use at \
                       eleven sites across three countries."
                    .to_string(),
            },
            ProjectRecord {
                id: "sol-tracker".to_string(),
                title: "Sol Tracker".to_string(),
                summary: "Telemetry pipeline for a rooftop solar cooperative".to_string(),
                body: "A cooperative of 140 households wanted to see their \
                       generation data without shipping it to a vendor cloud.\n\n\
                       ## Highlights\n\n\
                       - Inverter polling daemon in Rust, 6 MB RSS on a Pi Zero\n\
                       - Time-series compaction tuned for 10-second samples\n\
                       - Grafana-compatible query endpoint\n\n\
                       The co-op's dashboard has survived two grid outages and \
                       one lightning strike. The Pi did not, once."
                    .to_string(),
            },
            ProjectRecord {
                id: "quill".to_string(),
                title: "Quill".to_string(),
                summary: "A terminal editor for structured interview notes".to_string(),
                body: "Quill is a TUI for qualitative researchers: transcripts \
                       on the left, coding tags on the right, never touching \
                       the mouse.\n\n\
                       ## Highlights\n\n\
                       - Incremental tag index over thousands of documents\n\
                       - Export to standard qualitative-analysis formats\n\
                       - Keyboard macros recorded as plain text files\n\n\
                       Started as a favor for a sociologist friend; now has \
                       users I have never met, which is still strange."
                    .to_string(),
            },
            ProjectRecord {
                id: "ferrite-cache".to_string(),
                title: "Ferrite Cache".to_string(),
                summary: "Embedded read-through cache with honest eviction metrics".to_string(),
                body: "A small embedded cache library born from frustration \
                       with opaque hit-rate numbers.\n\n\
                       ## Highlights\n\n\
                       - Windowed TinyLFU admission, measured not guessed\n\
                       - Per-keyspace eviction accounting\n\
                       - Zero-copy reads borrowed straight from the arena\n\n\
                       Open source; the issue tracker is where I meet the most \
                       interesting workloads."
                    .to_string(),
            },
        ];

        Self { profile, projects }
    }
}

impl ProjectSource for Library {
    fn project(&self, id: &str) -> Option<ProjectRecord> {
        self.projects.iter().find(|record| record.id == id).cloned()
    }

    fn all(&self) -> Vec<ProjectRecord> {
        self.projects.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::NavState;

    #[test]
    fn project_ids_are_unique() {
        let library = Library::curated();
        let mut ids: Vec<_> = library.all().into_iter().map(|p| p.id).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn project_ids_survive_fragment_round_trip() {
        let library = Library::curated();
        for record in library.all() {
            let nav = NavState::ProjectDetail(record.id.clone());
            assert_eq!(NavState::decode(&nav.encode()), Some(nav));
        }
    }

    #[test]
    fn every_project_materializes() {
        let library = Library::curated();
        for record in library.all() {
            assert!(folio_core::materialize(&library, &record.id).is_ok());
        }
    }
}
