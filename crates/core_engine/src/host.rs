//! The seam between the engine and the host window manager.
//!
//! The engine never owns windows or workspaces; it reads their state
//! through this trait and requests mutations through it. Query methods
//! fail soft (an unqueryable object reads as absent), mutation methods
//! return a [`HostError`] the engine logs and swallows.

use thiserror::Error;

use crate::model::{MonitorId, WindowId, WindowSnapshot, WorkspaceToken};
use crate::settings::OverrideModifier;

/// Errors reported by host mutations.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Window {0} is no longer known to the host")]
    WindowGone(WindowId),

    #[error("Workspace {0} is no longer known to the host")]
    WorkspaceGone(WorkspaceToken),

    #[error("Workspace index {index} is out of bounds (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Host backend error: {0}")]
    Backend(String),
}

/// Host environment interface.
///
/// Implemented by the platform glue that wires real window-manager signals
/// into the engine, and by scripted fakes in tests. All calls happen on the
/// single control thread driven by the host's event loop.
pub trait WorkspaceHost {
    /// Snapshot a window's current state. `None` if the window is gone or
    /// momentarily unqueryable (e.g. mid-destruction).
    fn window(&self, id: WindowId) -> Option<WindowSnapshot>;

    /// The ordered workspace sequence. Indices into this list are only
    /// valid until the next mutation of the sequence.
    fn workspaces(&self) -> Vec<WorkspaceToken>;

    /// Windows currently assigned to a workspace. Empty if the workspace
    /// is gone.
    fn windows_on_workspace(&self, workspace: WorkspaceToken) -> Vec<WindowId>;

    /// Whether each monitor has its own workspace sequence. Host-level
    /// configuration that can change at runtime; polled per operation.
    fn workspaces_per_monitor(&self) -> bool;

    /// The primary monitor.
    fn primary_monitor(&self) -> MonitorId;

    /// Whether the given input modifier is currently held down.
    fn modifier_held(&self, modifier: OverrideModifier) -> bool;

    /// Reposition a workspace within the ordered sequence.
    fn reorder_workspace(
        &mut self,
        workspace: WorkspaceToken,
        to_index: usize,
    ) -> Result<(), HostError>;

    /// Reassign a window to a workspace.
    fn move_window_to_workspace(
        &mut self,
        window: WindowId,
        workspace: WorkspaceToken,
    ) -> Result<(), HostError>;

    /// Switch the user's view to a workspace.
    fn activate_workspace(&mut self, workspace: WorkspaceToken) -> Result<(), HostError>;

    /// Focus and raise a window.
    fn focus_window(&mut self, window: WindowId) -> Result<(), HostError>;

    /// Current position of a workspace in the sequence, if it still exists.
    fn workspace_index(&self, workspace: WorkspaceToken) -> Option<usize> {
        self.workspaces().iter().position(|ws| *ws == workspace)
    }
}
