//! Folio Core Library
//!
//! The presentation state machine behind the Folio portfolio shell.
//!
//! ## Overview
//!
//! Folio shows a hero page underneath a small fixed set of full-screen
//! overlay panels (About, Projects, Contact) plus one dynamic per-project
//! detail panel. This crate owns everything about that arrangement that is
//! not pixels: which panel is open, how the open panel is mirrored into an
//! address fragment for deep links and back/forward navigation, and how
//! the short settle delays that sequence CSS transitions are tolerated
//! without cancellation.
//!
//! The crate has no UI dependency. The shell renders from [`ViewState`],
//! funnels every interaction through [`ViewController`], and executes the
//! [`DeferredTask`]s a [`Transition`] hands back after their delays.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{PanelId, ViewController};
//!
//! let mut view = ViewController::new();
//! let transition = view.open(PanelId::About, true);
//!
//! // The fragment write mirrors the open panel.
//! let write = transition.fragment.unwrap();
//! assert_eq!(write.target.encode(), "about");
//!
//! // Visual settles arrive as deferred tasks; applying them later is safe.
//! for task in &transition.deferred {
//!     view.apply(task);
//! }
//! assert!(view.state().shown);
//! ```

pub mod error;
pub mod mailto;
pub mod nav;
pub mod panel;
pub mod project;
pub mod schedule;
pub mod sync;
pub mod view;

// Re-exports
pub use error::{FolioError, FolioResult};
pub use mailto::ContactMessage;
pub use nav::{FragmentWrite, NavState, WriteMode};
pub use panel::PanelId;
pub use project::{materialize, ProjectRecord, ProjectSource};
pub use schedule::{Action, DeferredTask, Resource, CLOSE_SETTLE, SHOW_SETTLE};
pub use sync::{resolve, SyncDirective, Synchronizer};
pub use view::{DetailPanel, Transition, ViewController, ViewState};
