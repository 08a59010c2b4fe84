//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function - draws the active screen, then the dialog on top
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_screen {
        Screen::Roster => screens::roster::render(frame, area, &app.state, &app.theme),
        Screen::Help => screens::help::render(frame, area, &app.theme),
    }

    app.dialog.draw(frame, area, &app.theme);
}
