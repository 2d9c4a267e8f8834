//! Read-only queries over the live workspace sequence.
//!
//! All queries fail soft: an unavailable sequence or unqueryable window
//! reads as "no result" rather than an error. Complexity is
//! O(workspaces x windows-per-workspace), which is fine at desktop scale.

use crate::host::WorkspaceHost;
use crate::model::{MonitorId, WorkspaceToken};

/// Number of qualifying windows on a workspace, optionally restricted to
/// one monitor. Windows pinned to all workspaces never count, and windows
/// the host cannot snapshot are treated as absent.
pub fn occupant_count<H: WorkspaceHost + ?Sized>(
    host: &H,
    workspace: WorkspaceToken,
    monitor: Option<MonitorId>,
) -> usize {
    host.windows_on_workspace(workspace)
        .into_iter()
        .filter_map(|id| host.window(id))
        .filter(|win| !win.on_all_workspaces)
        .filter(|win| monitor.map_or(true, |m| win.monitor == m))
        .count()
}

/// First workspace (front-to-back) with no qualifying windows on the given
/// monitor.
pub fn first_free_workspace<H: WorkspaceHost + ?Sized>(
    host: &H,
    monitor: Option<MonitorId>,
) -> Option<usize> {
    host.workspaces()
        .iter()
        .position(|&ws| occupant_count(host, ws, monitor) == 0)
}

/// Last workspace (back-to-front) with no qualifying windows on any
/// monitor. Used by the insert-after-current strategy, which relies on the
/// host's dynamic-workspace policy keeping an empty workspace at the tail.
pub fn last_completely_empty_workspace<H: WorkspaceHost + ?Sized>(host: &H) -> Option<usize> {
    host.workspaces()
        .iter()
        .rposition(|&ws| occupant_count(host, ws, None) == 0)
}

/// Nearest workspace with at least one qualifying window, searching
/// backward from `from_index - 1` to the front first, then forward from
/// `from_index + 1` to the end. Backward matches win ties: restoring "to
/// the left" is the natural direction when candidates exist on both sides.
pub fn nearest_occupied_workspace<H: WorkspaceHost + ?Sized>(
    host: &H,
    from_index: usize,
    monitor: Option<MonitorId>,
) -> Option<usize> {
    let workspaces = host.workspaces();

    for index in (0..from_index.min(workspaces.len())).rev() {
        if occupant_count(host, workspaces[index], monitor) > 0 {
            return Some(index);
        }
    }

    for index in (from_index + 1)..workspaces.len() {
        if occupant_count(host, workspaces[index], monitor) > 0 {
            return Some(index);
        }
    }

    None
}
