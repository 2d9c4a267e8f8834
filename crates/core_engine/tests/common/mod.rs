//! Scripted in-memory host for engine tests.
//!
//! Records every side-effecting call so tests can assert on exactly what
//! the engine asked the host to do.

#![allow(dead_code)]

use std::collections::HashMap;

use solospace_core::host::{HostError, WorkspaceHost};
use solospace_core::model::{MonitorId, Rect, WindowId, WindowKind, WindowSnapshot, WorkspaceToken};
use solospace_core::settings::OverrideModifier;

pub const WORK_AREA: Rect = Rect { x: 0, y: 0, width: 1920, height: 1040 };

pub struct FakeHost {
    workspaces: Vec<WorkspaceToken>,
    next_token: u64,
    windows: HashMap<WindowId, WindowSnapshot>,
    pub per_monitor: bool,
    pub primary: MonitorId,
    pub held: Option<OverrideModifier>,
    pub reorder_calls: Vec<(WorkspaceToken, usize)>,
    pub move_calls: Vec<(WindowId, WorkspaceToken)>,
    pub activated: Vec<WorkspaceToken>,
    pub focused: Vec<WindowId>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            workspaces: Vec::new(),
            next_token: 1,
            windows: HashMap::new(),
            per_monitor: true,
            primary: 0,
            held: None,
            reorder_calls: Vec::new(),
            move_calls: Vec::new(),
            activated: Vec::new(),
            focused: Vec::new(),
        }
    }

    /// Append a new workspace at the end of the sequence.
    pub fn add_workspace(&mut self) -> WorkspaceToken {
        let token = WorkspaceToken(self.next_token);
        self.next_token += 1;
        self.workspaces.push(token);
        token
    }

    /// Add a normal, filter-passing window on the given workspace.
    pub fn add_window(&mut self, id: WindowId, workspace: WorkspaceToken, monitor: MonitorId) {
        self.windows.insert(id, WindowSnapshot {
            id,
            kind: WindowKind::Normal,
            workspace: Some(workspace),
            monitor,
            on_all_workspaces: false,
            maximized: false,
            fullscreen: false,
            minimized: false,
            app_id: Some("org.example.App".to_string()),
            work_area: WORK_AREA,
        });
    }

    pub fn window_mut(&mut self, id: WindowId) -> &mut WindowSnapshot {
        self.windows.get_mut(&id).expect("unknown test window")
    }

    /// The window's current workspace, per the fake's own books.
    pub fn workspace_of(&self, id: WindowId) -> Option<WorkspaceToken> {
        self.windows.get(&id).and_then(|win| win.workspace)
    }

    pub fn order(&self) -> Vec<WorkspaceToken> {
        self.workspaces.clone()
    }

    /// Simulate the host destroying a workspace (dynamic-workspace
    /// cleanup). Windows still on it lose their workspace assignment.
    pub fn destroy_workspace(&mut self, workspace: WorkspaceToken) {
        self.workspaces.retain(|&ws| ws != workspace);
        for win in self.windows.values_mut() {
            if win.workspace == Some(workspace) {
                win.workspace = None;
            }
        }
    }

    /// Simulate a window closing without any notification bookkeeping.
    pub fn remove_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    /// Drive enough event-loop turns for any scheduled focus to drain.
    pub fn tick_all(&mut self, engine: &mut solospace_core::PlacementEngine) {
        for _ in 0..solospace_core::FOCUS_DELAY_TICKS {
            engine.tick(self);
        }
    }

    /// Same, driven through a coordinator.
    pub fn settle(&mut self, coordinator: &mut solospace_core::EventCoordinator) {
        for _ in 0..solospace_core::FOCUS_DELAY_TICKS {
            coordinator.tick(self);
        }
    }
}

impl WorkspaceHost for FakeHost {
    fn window(&self, id: WindowId) -> Option<WindowSnapshot> {
        self.windows.get(&id).cloned()
    }

    fn workspaces(&self) -> Vec<WorkspaceToken> {
        self.workspaces.clone()
    }

    fn windows_on_workspace(&self, workspace: WorkspaceToken) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = self
            .windows
            .values()
            .filter(|win| win.workspace == Some(workspace))
            .map(|win| win.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn workspaces_per_monitor(&self) -> bool {
        self.per_monitor
    }

    fn primary_monitor(&self) -> MonitorId {
        self.primary
    }

    fn modifier_held(&self, modifier: OverrideModifier) -> bool {
        self.held == Some(modifier)
    }

    fn reorder_workspace(
        &mut self,
        workspace: WorkspaceToken,
        to_index: usize,
    ) -> Result<(), HostError> {
        self.reorder_calls.push((workspace, to_index));
        let from = self
            .workspaces
            .iter()
            .position(|&ws| ws == workspace)
            .ok_or(HostError::WorkspaceGone(workspace))?;
        if to_index >= self.workspaces.len() {
            return Err(HostError::IndexOutOfRange {
                index: to_index,
                len: self.workspaces.len(),
            });
        }
        self.workspaces.remove(from);
        self.workspaces.insert(to_index, workspace);
        Ok(())
    }

    fn move_window_to_workspace(
        &mut self,
        window: WindowId,
        workspace: WorkspaceToken,
    ) -> Result<(), HostError> {
        self.move_calls.push((window, workspace));
        if !self.workspaces.contains(&workspace) {
            return Err(HostError::WorkspaceGone(workspace));
        }
        let win = self
            .windows
            .get_mut(&window)
            .ok_or(HostError::WindowGone(window))?;
        win.workspace = Some(workspace);
        Ok(())
    }

    fn activate_workspace(&mut self, workspace: WorkspaceToken) -> Result<(), HostError> {
        if !self.workspaces.contains(&workspace) {
            return Err(HostError::WorkspaceGone(workspace));
        }
        self.activated.push(workspace);
        Ok(())
    }

    fn focus_window(&mut self, window: WindowId) -> Result<(), HostError> {
        if !self.windows.contains_key(&window) {
            return Err(HostError::WindowGone(window));
        }
        self.focused.push(window);
        Ok(())
    }
}
