//! Core data model shared by all engine components.
//!
//! Windows and workspaces are entities owned by the host environment; the
//! engine only ever sees read-only snapshots of them and addresses them
//! through stable handles.

use serde::{Deserialize, Serialize};

/// Unique identifier for a window.
/// Issued by the host environment and stable for the window's lifetime.
pub type WindowId = u64;

/// Unique identifier for a monitor.
pub type MonitorId = u32;

/// Stable per-process handle for a workspace.
///
/// Workspaces live in an ordered, dynamically-sized sequence and are
/// commonly addressed by positional index, but indices shift whenever the
/// sequence is reordered or a workspace is destroyed. The host issues one
/// token per workspace at creation; the token survives reordering and is
/// invalidated only by destruction. The engine tracks workspaces by token
/// and treats indices as a derived cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceToken(pub u64);

impl std::fmt::Display for WorkspaceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ws:{}", self.0)
    }
}

/// A rectangle in screen coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// Window type classification as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// An ordinary application window. The only kind eligible for placement.
    Normal,
    Dialog,
    Utility,
    Dock,
    Splash,
    /// Anything else the host reports (menus, tooltips, overrides).
    Other,
}

/// The kind of size-state transition a window is undergoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Maximize,
    Unmaximize,
    Fullscreen,
    Unfullscreen,
}

/// Read-only snapshot of a host window's state.
///
/// Queried fresh from the host at each decision point; never cached by the
/// engine. A window mid-destruction may report no workspace at all.
#[derive(Debug, Clone)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub kind: WindowKind,
    /// Workspace the window currently belongs to, if any.
    pub workspace: Option<WorkspaceToken>,
    pub monitor: MonitorId,
    /// Whether the window is pinned to all workspaces.
    pub on_all_workspaces: bool,
    pub maximized: bool,
    pub fullscreen: bool,
    pub minimized: bool,
    /// Application identity, when the host could determine one.
    pub app_id: Option<String>,
    /// The work area of the window's monitor.
    pub work_area: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_equality_is_exact() {
        let a = Rect::new(0, 0, 1920, 1040);
        let b = Rect::new(0, 0, 1920, 1040);
        let c = Rect::new(0, 0, 1920, 1041);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_workspace_token_display() {
        assert_eq!(WorkspaceToken(7).to_string(), "ws:7");
    }
}
