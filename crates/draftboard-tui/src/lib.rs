//! Draftboard TUI Library
//!
//! Terminal dashboard for a fantasy-football roster. It mounts the
//! confirmation coordinator from `draftboard-confirm` and draws its dialog
//! with ratatui.

pub mod app;
pub mod ui;

pub use app::App;
