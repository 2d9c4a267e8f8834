//! Placement engine: gives a window a workspace of its own and later
//! returns it to where it came from.
//!
//! All per-window state lives on the engine instance: the placement
//! records, the in-flight guard set and the focus deferral queue. The
//! engine runs on the host's single control thread; the guard set exists
//! because one logical operation spans several event-loop turns (the
//! structural mutation now, the deferred focus two ticks later) and
//! overlapping transition notifications for the same window can arrive
//! faster than that. A request for a window with an operation in flight
//! is dropped, not queued; equilibrium is reached on a later event.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::directory;
use crate::host::{HostError, WorkspaceHost};
use crate::model::{WindowId, WindowSnapshot, WorkspaceToken};
use crate::scheduler::{DeferQueue, FOCUS_DELAY_TICKS};
use crate::settings::Settings;

/// Strategy a window was placed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// The current and a free workspace swapped positions.
    Reorder,
    /// A tail empty workspace was repositioned after the current one.
    InsertAfterCurrent,
}

/// Bookkeeping for one currently-relocated window.
///
/// Created on placement, consumed on restore or destruction. The record
/// set is bounded by the number of currently-relocated windows: destroy
/// handling actively removes orphans.
#[derive(Debug, Clone)]
pub struct PlacementRecord {
    pub mode: PlacementMode,
    /// The workspace the window should return to. Tracked by stable
    /// token; a destroyed home reads as vanished and triggers the
    /// heuristic restore path.
    pub home: WorkspaceToken,
    /// Position of `home` at placement time. A cache only: the sequence
    /// may have been reordered since.
    pub home_index: usize,
    pub placed_at: Instant,
}

/// The placement/restore state machine for all windows.
#[derive(Debug, Default)]
pub struct PlacementEngine {
    records: HashMap<WindowId, PlacementRecord>,
    in_flight: HashSet<WindowId>,
    deferred: DeferQueue,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a placement record exists for `window`.
    pub fn is_placed(&self, window: WindowId) -> bool {
        self.records.contains_key(&window)
    }

    /// The placement record for `window`, if any.
    pub fn record(&self, window: WindowId) -> Option<&PlacementRecord> {
        self.records.get(&window)
    }

    /// Whether an operation (including its deferred focus) is in flight.
    pub fn operation_pending(&self, window: WindowId) -> bool {
        self.in_flight.contains(&window)
    }

    /// Number of currently-relocated windows.
    pub fn placed_count(&self) -> usize {
        self.records.len()
    }

    /// Move `window` to a workspace of its own.
    ///
    /// Returns true if the window was relocated. No-ops when an operation
    /// is already in flight for the window, when the window is already
    /// alone on its workspace, or when no target workspace can be found.
    pub fn place<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        settings: &Settings,
        window: WindowId,
    ) -> bool {
        if !self.in_flight.insert(window) {
            debug!(window, "place dropped: operation already in flight");
            return false;
        }

        let placed = match self.place_inner(host, settings, window) {
            Ok(placed) => placed,
            Err(err) => {
                debug!(window, %err, "place aborted");
                false
            }
        };

        // The guard is held through the deferred focus when one was
        // scheduled; every abort path releases it here.
        if !self.deferred.is_pending(window) {
            self.in_flight.remove(&window);
        }
        placed
    }

    fn place_inner<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        settings: &Settings,
        window: WindowId,
    ) -> Result<bool, HostError> {
        let win = match host.window(window) {
            Some(win) => win,
            None => return Ok(false),
        };
        let current = match win.workspace {
            Some(ws) => ws,
            None => return Ok(false),
        };
        let current_index = match host.workspace_index(current) {
            Some(index) => index,
            None => return Ok(false),
        };

        // When all monitors share one workspace sequence, only windows on
        // the primary monitor are auto-placed. Documented behavior, not a
        // gap: reordering the shared sequence for a secondary-monitor
        // window would shuffle every other monitor's view.
        if !host.workspaces_per_monitor() && win.monitor != host.primary_monitor() {
            debug!(window, "place skipped: shared sequence, non-primary monitor");
            return Ok(false);
        }

        let others = self.co_occupants(host, &win, current);
        if others.is_empty() {
            // The workspace is already exclusive to this window.
            return Ok(false);
        }

        if settings.insert_after_current {
            if let Some(empty_index) = directory::last_completely_empty_workspace(host) {
                return self.place_by_insert(host, window, current, current_index, empty_index);
            }
            // No empty tail workspace; fall through to the reorder path.
        }

        self.place_by_reorder(host, &win, current, current_index, &others)
    }

    /// Insert-after-current strategy: reposition the tail empty workspace
    /// to sit immediately after the current one and move only the
    /// triggering window onto it.
    fn place_by_insert<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        window: WindowId,
        current: WorkspaceToken,
        current_index: usize,
        empty_index: usize,
    ) -> Result<bool, HostError> {
        let workspaces = host.workspaces();
        let target = workspaces[empty_index];

        // Final position immediately after the current workspace. When
        // the empty workspace starts out before the current one, removal
        // shifts the current workspace down by one.
        let target_index = if empty_index < current_index {
            current_index
        } else {
            current_index + 1
        };
        if empty_index != target_index {
            host.reorder_workspace(target, target_index)?;
        }
        host.move_window_to_workspace(window, target)?;

        self.records.insert(window, PlacementRecord {
            mode: PlacementMode::InsertAfterCurrent,
            home: current,
            home_index: current_index,
            placed_at: Instant::now(),
        });
        debug!(window, home = %current, "window placed (insert after current)");

        host.activate_workspace(target)?;
        self.deferred.schedule_focus(window, FOCUS_DELAY_TICKS);
        Ok(true)
    }

    /// Default strategy: swap the positions of the current workspace and
    /// the first free one, then put the co-occupants back where the user
    /// perceives them. The triggering window rides its original workspace
    /// object to the free slot, so it ends up alone there; everything else
    /// stays visually in place.
    fn place_by_reorder<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        win: &WindowSnapshot,
        current: WorkspaceToken,
        current_index: usize,
        others: &[WindowId],
    ) -> Result<bool, HostError> {
        let free_index = match directory::first_free_workspace(host, Some(win.monitor)) {
            Some(index) => index,
            None => {
                debug!(window = win.id, "place aborted: no free workspace");
                return Ok(false);
            }
        };
        if free_index == current_index {
            return Ok(false);
        }
        let free = host.workspaces()[free_index];

        swap_positions(host, current, current_index, free, free_index)?;
        // `free` now sits at the original index; the co-occupants move
        // onto it so their perceived location is unchanged.
        for &other in others {
            host.move_window_to_workspace(other, free)?;
        }

        self.records.insert(win.id, PlacementRecord {
            mode: PlacementMode::Reorder,
            home: free,
            home_index: current_index,
            placed_at: Instant::now(),
        });
        debug!(window = win.id, home = %free, "window placed (reorder)");

        host.activate_workspace(current)?;
        self.deferred.schedule_focus(win.id, FOCUS_DELAY_TICKS);
        Ok(true)
    }

    /// Return a previously placed window to its home workspace.
    ///
    /// Idempotent: with no record present this is a no-op. The record is
    /// deleted before any host work so a concurrent destroy-triggered
    /// cleanup can never double-process it.
    pub fn restore<H: WorkspaceHost + ?Sized>(&mut self, host: &mut H, window: WindowId) -> bool {
        if !self.in_flight.insert(window) {
            debug!(window, "restore dropped: operation already in flight");
            return false;
        }

        let restored = match self.records.remove(&window) {
            Some(record) => match self.restore_inner(host, window, record) {
                Ok(restored) => restored,
                Err(err) => {
                    debug!(window, %err, "restore aborted");
                    false
                }
            },
            None => false,
        };

        if !self.deferred.is_pending(window) {
            self.in_flight.remove(&window);
        }
        restored
    }

    fn restore_inner<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        window: WindowId,
        record: PlacementRecord,
    ) -> Result<bool, HostError> {
        let win = match host.window(window) {
            Some(win) => win,
            None => return Ok(false),
        };

        // Common case: the home workspace still exists. Its index may
        // have shifted since placement; the token resolves regardless.
        if host.workspace_index(record.home).is_some() {
            host.move_window_to_workspace(window, record.home)?;
            host.activate_workspace(record.home)?;
            self.deferred.schedule_focus(window, FOCUS_DELAY_TICKS);
            debug!(window, home = %record.home, "window restored");
            return Ok(true);
        }

        // Home vanished to dynamic-workspace cleanup.
        debug!(window, home = %record.home, "home workspace vanished, falling back");
        self.restore_fallback(host, &win)
    }

    /// Heuristic restore when the recorded home no longer exists: rejoin
    /// the nearest occupied workspace, brought to the window's current
    /// position so the user's view does not jump.
    fn restore_fallback<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        win: &WindowSnapshot,
    ) -> Result<bool, HostError> {
        let current = match win.workspace {
            Some(ws) => ws,
            None => return Ok(false),
        };
        let current_index = match host.workspace_index(current) {
            Some(index) => index,
            None => return Ok(false),
        };

        // If other windows already share this workspace there is nothing
        // to restore to; keep the window where it is but still settle
        // focus on it.
        if !self.co_occupants(host, win, current).is_empty() {
            self.deferred.schedule_focus(win.id, FOCUS_DELAY_TICKS);
            return Ok(false);
        }

        let occupied_index =
            match directory::nearest_occupied_workspace(host, current_index, Some(win.monitor)) {
                Some(index) => index,
                None => {
                    self.deferred.schedule_focus(win.id, FOCUS_DELAY_TICKS);
                    return Ok(false);
                }
            };
        let occupied = host.workspaces()[occupied_index];

        swap_positions(host, current, current_index, occupied, occupied_index)?;
        host.move_window_to_workspace(win.id, occupied)?;
        host.activate_workspace(occupied)?;
        self.deferred.schedule_focus(win.id, FOCUS_DELAY_TICKS);
        debug!(window = win.id, target = %occupied, "window restored via fallback");
        Ok(true)
    }

    /// Cleanup for a destroyed window. Deletes any placement record and,
    /// if the home workspace still exists, switches the view back to it.
    /// The window itself is gone and is never touched; this must not fail.
    pub fn handle_window_destroyed<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        window: WindowId,
    ) {
        self.deferred.cancel(window);
        self.in_flight.remove(&window);

        if let Some(record) = self.records.remove(&window) {
            if host.workspace_index(record.home).is_some() {
                if let Err(err) = host.activate_workspace(record.home) {
                    warn!(window, %err, "failed to activate home after window destroy");
                }
            }
            debug!(window, "placement record cleaned up after destroy");
        }
    }

    /// Switch the view back to a placed window's home workspace without
    /// consuming its record. Used when the window minimizes.
    pub fn reveal_home<H: WorkspaceHost + ?Sized>(&self, host: &mut H, window: WindowId) -> bool {
        let Some(record) = self.records.get(&window) else {
            return false;
        };
        if host.workspace_index(record.home).is_none() {
            return false;
        }
        if let Err(err) = host.activate_workspace(record.home) {
            debug!(window, %err, "failed to activate home");
            return false;
        }
        true
    }

    /// Re-activate a placed window's exclusive workspace and settle focus
    /// on it. Used when the window comes back from minimized.
    pub fn refocus<H: WorkspaceHost + ?Sized>(&mut self, host: &mut H, window: WindowId) -> bool {
        let Some(win) = host.window(window) else {
            return false;
        };
        let Some(workspace) = win.workspace else {
            return false;
        };
        if let Err(err) = host.activate_workspace(workspace) {
            debug!(window, %err, "failed to activate workspace for refocus");
            return false;
        }
        self.deferred.schedule_focus(window, FOCUS_DELAY_TICKS);
        true
    }

    /// Advance one event-loop turn: deliver due deferred focus requests
    /// and release their guards. A window destroyed since scheduling is
    /// detected and skipped.
    pub fn tick<H: WorkspaceHost + ?Sized>(&mut self, host: &mut H) {
        for window in self.deferred.tick() {
            self.in_flight.remove(&window);
            if host.window(window).is_none() {
                debug!(window, "deferred focus skipped: window gone");
                continue;
            }
            if let Err(err) = host.focus_window(window) {
                debug!(window, %err, "deferred focus failed");
            }
        }
    }

    /// Windows sharing `workspace` and the monitor with `win`, excluding
    /// `win` itself and pinned-everywhere windows.
    fn co_occupants<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        win: &WindowSnapshot,
        workspace: WorkspaceToken,
    ) -> Vec<WindowId> {
        host.windows_on_workspace(workspace)
            .into_iter()
            .filter(|&id| id != win.id)
            .filter_map(|id| host.window(id))
            .filter(|other| !other.on_all_workspaces && other.monitor == win.monitor)
            .map(|other| other.id)
            .collect()
    }
}

/// Swap two workspaces' positions in the ordered sequence.
///
/// The higher index always moves first: the underlying primitive has no
/// transactions, and this ordering keeps other observers from ever seeing
/// a transient duplicate position mid-operation.
fn swap_positions<H: WorkspaceHost + ?Sized>(
    host: &mut H,
    a: WorkspaceToken,
    a_index: usize,
    b: WorkspaceToken,
    b_index: usize,
) -> Result<(), HostError> {
    if a_index == b_index {
        return Ok(());
    }
    let (high, low, low_index, high_index) = if a_index > b_index {
        (a, b, b_index, a_index)
    } else {
        (b, a, a_index, b_index)
    };
    host.reorder_workspace(high, low_index)?;
    host.reorder_workspace(low, high_index)?;
    Ok(())
}
