//! Roster screen - main view

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::AppState;
use crate::ui::components::header;
use crate::ui::layout::ScreenLayout;
use crate::ui::Theme;

/// Render the roster
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let layout = ScreenLayout::new(area);

    header::render(frame, layout.header, "Roster", theme);

    let items: Vec<ListItem> = state
        .roster
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let slot = if player.starting { "START" } else { "BENCH" };
            let line = Line::from(vec![
                Span::styled(format!("  {:<4}", player.position), theme.text_secondary()),
                Span::raw(format!("{:<24}", player.name)),
                Span::styled(format!("{:<5}", player.team), theme.text_muted()),
                Span::styled(
                    slot,
                    if player.starting {
                        theme.success()
                    } else {
                        theme.text_muted()
                    },
                ),
            ]);
            ListItem::new(line).style(theme.menu_item(i == state.roster_index))
        })
        .collect();

    let title = format!(" My Team ({} starters) ", state.starters());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .title(title),
    );
    frame.render_widget(list, layout.content);

    let footer = if let Some(error) = &state.error_message {
        Paragraph::new(format!(" {} ", error)).style(theme.danger())
    } else if let Some(status) = &state.status_message {
        Paragraph::new(format!(" {} ", status)).style(theme.warning())
    } else {
        Paragraph::new(" [d] Drop  [r] Reset lineup  [?] Help  [q] Quit ").style(theme.text_muted())
    };
    frame.render_widget(footer, layout.footer);
}
