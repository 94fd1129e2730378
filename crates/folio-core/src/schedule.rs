//! Deferred visual effects.
//!
//! Settle delays sequence CSS transitions after a state change has
//! already been committed. They are fire-and-forget: nothing awaits
//! them and nothing cancels them. Correctness under overlap comes from
//! two rules instead of cancellation:
//!
//! 1. every task re-asserts a state rather than toggling one, and
//! 2. every task carries the epoch of the resource it touches. A newer
//!    writer bumps the epoch, so the older task is stale by the time it
//!    fires and is dropped at application.

use std::collections::HashMap;
use std::time::Duration;

use crate::panel::PanelId;

/// Delay before a freshly opened panel is shown. Exists purely to let
/// the hide transition underneath start first, so both are never fully
/// visible at once.
pub const SHOW_SETTLE: Duration = Duration::from_millis(40);

/// Delay matching the CSS close transition. Background restores and
/// retired detail panels are removed after this window.
pub const CLOSE_SETTLE: Duration = Duration::from_millis(320);

/// Shared state a deferred task targets. Last writer wins per resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Background,
    Panel(PanelId),
    DetailSlot,
    RetiredDetail,
}

/// What a deferred task does once its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ShowPanel(PanelId),
    ShowDetail,
    RestoreBackground,
    AssertBackgroundHidden,
    DropRetiredDetail,
    ReopenPanel(PanelId),
}

/// A scheduled idempotent task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredTask {
    pub resource: Resource,
    pub epoch: u64,
    pub delay: Duration,
    pub action: Action,
}

/// Per-resource epoch counters.
#[derive(Debug, Default)]
pub struct Epochs {
    counters: HashMap<Resource, u64>,
}

impl Epochs {
    /// Invalidate everything scheduled against `resource` and return
    /// the epoch for the next task.
    pub fn bump(&mut self, resource: Resource) -> u64 {
        let counter = self.counters.entry(resource).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Whether `task` is still the latest writer for its resource.
    pub fn is_current(&self, task: &DeferredTask) -> bool {
        self.counters.get(&task.resource).copied().unwrap_or(0) == task.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(resource: Resource, epoch: u64) -> DeferredTask {
        DeferredTask {
            resource,
            epoch,
            delay: CLOSE_SETTLE,
            action: Action::RestoreBackground,
        }
    }

    #[test]
    fn bump_invalidates_older_tasks() {
        let mut epochs = Epochs::default();
        let first = task(Resource::Background, epochs.bump(Resource::Background));
        assert!(epochs.is_current(&first));

        let second = task(Resource::Background, epochs.bump(Resource::Background));
        assert!(!epochs.is_current(&first));
        assert!(epochs.is_current(&second));
    }

    #[test]
    fn resources_are_independent() {
        let mut epochs = Epochs::default();
        let background = task(Resource::Background, epochs.bump(Resource::Background));
        epochs.bump(Resource::DetailSlot);
        assert!(epochs.is_current(&background));
    }
}
