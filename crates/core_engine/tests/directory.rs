//! Workspace directory queries against a scripted host.

mod common;

use common::FakeHost;
use solospace_core::directory;

#[test]
fn test_first_free_workspace_scans_front_to_back() {
    let mut host = FakeHost::new();
    let a = host.add_workspace();
    let _b = host.add_workspace();
    let c = host.add_workspace();
    host.add_window(1, a, 0);
    host.add_window(2, c, 0);

    assert_eq!(directory::first_free_workspace(&host, Some(0)), Some(1));
}

#[test]
fn test_first_free_workspace_is_per_monitor() {
    let mut host = FakeHost::new();
    let a = host.add_workspace();
    let b = host.add_workspace();
    host.add_window(1, a, 0);
    host.add_window(2, b, 1);

    // Workspace b is occupied, but only by a monitor-1 window.
    assert_eq!(directory::first_free_workspace(&host, Some(0)), Some(1));
    assert_eq!(directory::first_free_workspace(&host, Some(1)), Some(0));
}

#[test]
fn test_first_free_workspace_ignores_pinned_windows() {
    let mut host = FakeHost::new();
    let a = host.add_workspace();
    host.add_window(1, a, 0);
    host.window_mut(1).on_all_workspaces = true;

    assert_eq!(directory::first_free_workspace(&host, Some(0)), Some(0));
}

#[test]
fn test_first_free_workspace_none_when_all_occupied() {
    let mut host = FakeHost::new();
    let a = host.add_workspace();
    let b = host.add_workspace();
    host.add_window(1, a, 0);
    host.add_window(2, b, 0);

    assert_eq!(directory::first_free_workspace(&host, Some(0)), None);
}

#[test]
fn test_first_free_workspace_on_empty_sequence() {
    let host = FakeHost::new();
    assert_eq!(directory::first_free_workspace(&host, Some(0)), None);
}

#[test]
fn test_last_completely_empty_workspace_scans_back_to_front() {
    let mut host = FakeHost::new();
    let _a = host.add_workspace();
    let _b = host.add_workspace();
    let c = host.add_workspace();
    host.add_window(1, c, 0);

    assert_eq!(directory::last_completely_empty_workspace(&host), Some(1));
}

#[test]
fn test_last_completely_empty_workspace_counts_all_monitors() {
    let mut host = FakeHost::new();
    let _a = host.add_workspace();
    let b = host.add_workspace();
    // A monitor-1 window makes b non-empty even from monitor 0's view.
    host.add_window(1, b, 1);

    assert_eq!(directory::last_completely_empty_workspace(&host), Some(0));
}

#[test]
fn test_nearest_occupied_prefers_backward() {
    let mut host = FakeHost::new();
    let a = host.add_workspace();
    let _b = host.add_workspace();
    let c = host.add_workspace();
    host.add_window(1, a, 0);
    host.add_window(2, c, 0);

    // Candidates on both sides of index 1; backward wins.
    assert_eq!(directory::nearest_occupied_workspace(&host, 1, Some(0)), Some(0));
}

#[test]
fn test_nearest_occupied_falls_forward_when_nothing_behind() {
    let mut host = FakeHost::new();
    let _a = host.add_workspace();
    let _b = host.add_workspace();
    let c = host.add_workspace();
    host.add_window(1, c, 0);

    assert_eq!(directory::nearest_occupied_workspace(&host, 0, Some(0)), Some(2));
}

#[test]
fn test_nearest_occupied_none_when_all_empty() {
    let mut host = FakeHost::new();
    host.add_workspace();
    host.add_workspace();

    assert_eq!(directory::nearest_occupied_workspace(&host, 1, Some(0)), None);
}

#[test]
fn test_nearest_occupied_tolerates_out_of_range_start() {
    let mut host = FakeHost::new();
    let a = host.add_workspace();
    host.add_window(1, a, 0);

    // A start index beyond the sequence end still finds the backward match.
    assert_eq!(directory::nearest_occupied_workspace(&host, 9, Some(0)), Some(0));
}
