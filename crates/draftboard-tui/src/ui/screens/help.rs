//! Help screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::components::header;
use crate::ui::layout::ScreenLayout;
use crate::ui::Theme;

const ROSTER_KEYS: [(&str, &str); 6] = [
    ("Up/k, Down/j", "Move selection"),
    ("d", "Drop the selected player"),
    ("r", "Reset the lineup"),
    ("?", "Show this help"),
    ("q", "Leave the dashboard"),
    ("Esc", "Back to roster"),
];

const DIALOG_KEYS: [(&str, &str); 4] = [
    ("Tab, Left/Right", "Switch button"),
    ("Enter", "Activate selected button"),
    ("y / n", "Confirm / cancel"),
    ("Esc, click outside", "Dismiss"),
];

fn key_lines<'a>(heading: &'a str, keys: &[(&'a str, &'a str)], theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(heading, theme.title()))];
    lines.extend(keys.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("    {:<20}", key), theme.text_secondary()),
            Span::styled(*action, theme.text()),
        ])
    }));
    lines.push(Line::from(""));
    lines
}

/// Render the help screen
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let layout = ScreenLayout::new(area);

    header::render(frame, layout.header, "Help", theme);

    let mut lines = key_lines("  Roster", &ROSTER_KEYS, theme);
    lines.extend(key_lines("  Confirmation dialog", &DIALOG_KEYS, theme));

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(content, layout.content);

    let footer = Paragraph::new(" [Esc] Back ").style(theme.text_muted());
    frame.render_widget(footer, layout.footer);
}
