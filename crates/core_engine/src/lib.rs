//! Solospace Core Engine
//!
//! Platform-agnostic engine that gives maximized and fullscreen windows a
//! workspace of their own, and returns them to their prior location when
//! they leave that state.
//!
//! The crate owns the decision logic and the workspace/window bookkeeping
//! only; the host window manager is an external collaborator reached
//! through the [`host::WorkspaceHost`] trait:
//! - [`directory`] answers read-only queries over the ordered workspace
//!   sequence (first free, last empty, nearest occupied)
//! - [`filter`] decides which windows and transitions qualify
//! - [`engine`] executes placement and restore with minimal disruption to
//!   the workspace order
//! - [`coordinator`] turns the host's two-phase transition notifications
//!   into single engine operations

pub mod coordinator;
pub mod directory;
pub mod engine;
pub mod filter;
pub mod host;
pub mod model;
pub mod scheduler;
pub mod settings;

pub use coordinator::EventCoordinator;
pub use engine::{PlacementEngine, PlacementMode, PlacementRecord};
pub use filter::EligibilityFilter;
pub use host::{HostError, WorkspaceHost};
pub use model::{
    MonitorId, Rect, TransitionKind, WindowId, WindowKind, WindowSnapshot, WorkspaceToken,
};
pub use scheduler::FOCUS_DELAY_TICKS;
pub use settings::{FilterMode, FilterSettings, OverrideModifier, Settings};
