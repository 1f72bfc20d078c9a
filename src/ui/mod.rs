//! Workbench UI
//!
//! egui front-end: menu bar, table list, data grid, and the modal windows
//! driven by the headless dialog controllers. All engine calls happen on
//! the interaction thread; long statements block by design.

pub mod app;
pub mod state;
pub mod theme;
pub mod views;

pub use app::{run_workbench, WorkbenchApp};
