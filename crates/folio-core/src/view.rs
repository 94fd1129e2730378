//! Panel Visibility Controller.
//!
//! All open/close behavior funnels through [`ViewController`]: it owns
//! the single [`ViewState`] struct and is its only mutator. Every
//! operation commits its state change synchronously and returns a
//! [`Transition`] carrying the deferred visual settles (panel show,
//! background restore, retired panel removal) and at most one fragment
//! write. The shell schedules the tasks and feeds them back through
//! [`ViewController::apply`] once their delays elapse.
//!
//! Invariants maintained here:
//!
//! - at most one static panel is current and at most one detail panel is
//!   live; a retiring detail may overlap a live one only until its
//!   removal task fires (the cross-fade window),
//! - the hero background is hidden whenever anything is open,
//! - every fragment write decodes back to the state that emitted it.

use std::time::Duration;

use crate::nav::{FragmentWrite, NavState};
use crate::panel::PanelId;
use crate::project::ProjectRecord;
use crate::schedule::{Action, DeferredTask, Epochs, Resource, CLOSE_SETTLE, SHOW_SETTLE};

/// The materialized project detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailPanel {
    pub record: ProjectRecord,
    /// Whether the show settle has elapsed and the panel is visible.
    pub shown: bool,
}

/// Everything the shell needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// The static panel currently open, if any.
    pub current: Option<PanelId>,
    /// Whether `current` has passed its show settle.
    pub shown: bool,
    /// The live project detail panel.
    pub detail: Option<DetailPanel>,
    /// A replaced or closed detail panel, fading out until its removal
    /// task fires.
    pub retiring: Option<DetailPanel>,
    /// Hero content visibility; false whenever a panel is up.
    pub background_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current: None,
            shown: false,
            detail: None,
            retiring: None,
            background_visible: true,
        }
    }
}

impl ViewState {
    /// Any panel (static or detail) logically open.
    pub fn any_open(&self) -> bool {
        self.current.is_some() || self.detail.is_some()
    }

    /// Background scrolling is suppressed while anything is open.
    pub fn scroll_locked(&self) -> bool {
        self.any_open()
    }
}

/// State changes already committed plus the work left to schedule.
#[derive(Debug, Default)]
#[must_use = "deferred tasks and fragment writes must be scheduled by the caller"]
pub struct Transition {
    pub deferred: Vec<DeferredTask>,
    pub fragment: Option<FragmentWrite>,
}

impl Transition {
    /// Fold a follow-up transition into this one.
    pub fn extend(&mut self, other: Transition) {
        self.deferred.extend(other.deferred);
        if other.fragment.is_some() {
            self.fragment = other.fragment;
        }
    }
}

/// Owner and sole mutator of the view state.
#[derive(Debug, Default)]
pub struct ViewController {
    state: ViewState,
    epochs: Epochs,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn schedule(&mut self, resource: Resource, delay: Duration, action: Action) -> DeferredTask {
        let epoch = self.epochs.bump(resource);
        DeferredTask {
            resource,
            epoch,
            delay,
            action,
        }
    }

    /// Hide the hero content and invalidate any in-flight restore.
    fn hide_background(&mut self) {
        self.state.background_visible = false;
        self.epochs.bump(Resource::Background);
    }

    /// Move the live detail into the retiring slot and schedule its
    /// removal. A panel already retiring is dropped on the spot; only
    /// the newest close transition plays out.
    fn retire_detail(&mut self) -> Option<DeferredTask> {
        let mut detail = self.state.detail.take()?;
        detail.shown = false;
        self.state.retiring = Some(detail);
        Some(self.schedule(Resource::RetiredDetail, CLOSE_SETTLE, Action::DropRetiredDetail))
    }

    /// Open a static panel.
    ///
    /// The background hides immediately; the panel shows after
    /// [`SHOW_SETTLE`] so the hide transition starts first. A single
    /// history entry is pushed when `update_fragment` is set. Opening
    /// the panel that is already current is a no-op.
    pub fn open(&mut self, panel: PanelId, update_fragment: bool) -> Transition {
        if self.state.current == Some(panel) {
            tracing::debug!(panel = panel.as_key(), "already open");
            return Transition::default();
        }
        let mut transition = Transition::default();
        // An outgoing panel hides without restoring the background, so
        // nothing flashes between the two states.
        if self.state.current.take().is_some() {
            self.state.shown = false;
        }
        if let Some(task) = self.retire_detail() {
            transition.deferred.push(task);
        }
        self.hide_background();
        self.state.current = Some(panel);
        self.state.shown = false;
        let show = self.schedule(Resource::Panel(panel), SHOW_SETTLE, Action::ShowPanel(panel));
        transition.deferred.push(show);
        if update_fragment {
            transition.fragment = Some(FragmentWrite::push(NavState::Panel(panel)));
        }
        tracing::info!(panel = panel.as_key(), "panel opened");
        transition
    }

    /// Close a static panel. Closing a panel that is not open is a
    /// no-op.
    ///
    /// With `restore_background` the hero returns after the close
    /// transition and the fragment resets to home. Without it the
    /// background stays dark, for callers about to swap in another
    /// panel.
    pub fn close(&mut self, panel: PanelId, restore_background: bool) -> Transition {
        if self.state.current != Some(panel) {
            tracing::debug!(panel = panel.as_key(), "close ignored, not open");
            return Transition::default();
        }
        self.state.current = None;
        self.state.shown = false;
        let mut transition = Transition::default();
        if restore_background {
            let restore =
                self.schedule(Resource::Background, CLOSE_SETTLE, Action::RestoreBackground);
            transition.deferred.push(restore);
            transition.fragment = Some(FragmentWrite::push(NavState::Home));
        }
        tracing::info!(panel = panel.as_key(), "panel closed");
        transition
    }

    /// Deactivate every panel, retire the detail if present, and
    /// restore the background.
    ///
    /// The synchronizer calls this with `update_fragment = false` when
    /// resolving an external history change; the fragment is already
    /// whatever the browser moved it to.
    pub fn close_all(&mut self, update_fragment: bool) -> Transition {
        let mut transition = Transition::default();
        self.state.current = None;
        self.state.shown = false;
        if let Some(task) = self.retire_detail() {
            transition.deferred.push(task);
        }
        let restore = self.schedule(Resource::Background, CLOSE_SETTLE, Action::RestoreBackground);
        transition.deferred.push(restore);
        if update_fragment {
            transition.fragment = Some(FragmentWrite::push(NavState::Home));
        }
        transition
    }

    /// Materialize the detail panel for `record`.
    ///
    /// The projects list hides underneath without restoring the
    /// background, any previous detail retires, and the new panel shows
    /// after its settle. Repeated calls always leave exactly one live
    /// detail reflecting the most recent record.
    pub fn show_details(&mut self, record: ProjectRecord, update_fragment: bool) -> Transition {
        let id = record.id.clone();
        let mut transition = Transition::default();
        if self.state.current.take().is_some() {
            self.state.shown = false;
        }
        if let Some(task) = self.retire_detail() {
            transition.deferred.push(task);
        }
        self.state.detail = Some(DetailPanel {
            record,
            shown: false,
        });
        self.hide_background();
        // Re-assert after the transition window in case an older restore
        // was already in flight when the epoch moved.
        let assert_hidden = self.schedule(
            Resource::Background,
            CLOSE_SETTLE,
            Action::AssertBackgroundHidden,
        );
        transition.deferred.push(assert_hidden);
        let show = self.schedule(Resource::DetailSlot, SHOW_SETTLE, Action::ShowDetail);
        transition.deferred.push(show);
        if update_fragment {
            transition.fragment = Some(FragmentWrite::push(NavState::ProjectDetail(id.clone())));
        }
        tracing::info!(project = %id, "project detail opened");
        transition
    }

    /// The detail panel's back affordance: retire the detail, keep the
    /// background dark, and reopen the projects list once the close
    /// transition has finished.
    ///
    /// The fragment becomes `projects` via a replace, so no extra
    /// history entry appears for the swap.
    pub fn close_details_to_list(&mut self) -> Transition {
        if self.state.detail.is_none() {
            return Transition::default();
        }
        let mut transition = Transition::default();
        if let Some(task) = self.retire_detail() {
            transition.deferred.push(task);
        }
        // The background must stay dark across the swap back to the list.
        self.epochs.bump(Resource::Background);
        let reopen = self.schedule(
            Resource::Panel(PanelId::Projects),
            CLOSE_SETTLE,
            Action::ReopenPanel(PanelId::Projects),
        );
        transition.deferred.push(reopen);
        transition.fragment = Some(FragmentWrite::replace(NavState::Panel(PanelId::Projects)));
        transition
    }

    /// Dismiss the detail panel entirely (backdrop click): retire it,
    /// restore the background, and reset the fragment to home.
    pub fn close_details_to_home(&mut self) -> Transition {
        if self.state.detail.is_none() {
            return Transition::default();
        }
        let mut transition = Transition::default();
        if let Some(task) = self.retire_detail() {
            transition.deferred.push(task);
        }
        let restore = self.schedule(Resource::Background, CLOSE_SETTLE, Action::RestoreBackground);
        transition.deferred.push(restore);
        transition.fragment = Some(FragmentWrite::push(NavState::Home));
        transition
    }

    /// Apply a deferred task once its delay has elapsed.
    ///
    /// Stale tasks (a newer writer took the resource) drop silently.
    /// Each action re-asserts a state rather than toggling one, so
    /// applying tasks out of the order they were scheduled in still
    /// settles on the last operation's outcome. `ReopenPanel` chains a
    /// fresh transition the caller must schedule in turn.
    pub fn apply(&mut self, task: &DeferredTask) -> Option<Transition> {
        if !self.epochs.is_current(task) {
            tracing::trace!(action = ?task.action, "stale deferred task dropped");
            return None;
        }
        match task.action {
            Action::ShowPanel(panel) => {
                if self.state.current == Some(panel) {
                    self.state.shown = true;
                }
                None
            }
            Action::ShowDetail => {
                if let Some(detail) = self.state.detail.as_mut() {
                    detail.shown = true;
                }
                None
            }
            Action::RestoreBackground => {
                if !self.state.any_open() {
                    self.state.background_visible = true;
                }
                None
            }
            Action::AssertBackgroundHidden => {
                if self.state.any_open() {
                    self.state.background_visible = false;
                }
                None
            }
            Action::DropRetiredDetail => {
                self.state.retiring = None;
                None
            }
            Action::ReopenPanel(panel) => {
                if self.state.any_open() {
                    return None;
                }
                Some(self.open(panel, false))
            }
        }
    }
}
