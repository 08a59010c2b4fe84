//! Confirmation dialog component
//!
//! [`DialogSlot`] is the terminal implementation of [`DialogView`]. The
//! coordinator pushes props into it; the app draws it each frame and feeds it
//! keyboard and mouse input, which it turns into decisions.
//!
//! Keys while open:
//! - **Tab/Left/Right**: move between Cancel and Confirm (Cancel is preselected)
//! - **Enter**: activate the selected button
//! - **y / n**: confirm / cancel directly
//! - **Esc**: dismiss (reported as a cancel)
//!
//! A left click outside the dialog box also dismisses it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossterm::event::KeyCode;
use draftboard_confirm::{DialogProps, DialogView, Responder, Variant};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::TuiConfig;
use crate::ui::{layout::centered_rect, Theme};

/// Which button is currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    /// Safe default
    #[default]
    Cancel,
    Confirm,
}

impl ConfirmButton {
    pub fn toggle(self) -> Self {
        match self {
            ConfirmButton::Cancel => ConfirmButton::Confirm,
            ConfirmButton::Confirm => ConfirmButton::Cancel,
        }
    }
}

/// What an input event did to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// No dialog is open; the event belongs to the screen underneath
    Ignored,
    /// Consumed by the open dialog without a decision
    Handled,
    Confirmed,
    Cancelled,
    /// Closed by Esc or an outside click
    Dismissed,
}

/// Button labels used when a request does not set its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    pub confirm: String,
    pub cancel: String,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self::from(&TuiConfig::default())
    }
}

impl From<&TuiConfig> for DialogLabels {
    fn from(config: &TuiConfig) -> Self {
        Self {
            confirm: config.confirm_label.clone(),
            cancel: config.cancel_label.clone(),
        }
    }
}

#[derive(Default)]
struct SlotState {
    props: Option<DialogProps>,
    selected: ConfirmButton,
    cycle: u64,
}

/// Terminal dialog view shared between the coordinator and the draw loop
#[derive(Clone, Default)]
pub struct DialogSlot {
    state: Arc<Mutex<SlotState>>,
    labels: Arc<DialogLabels>,
}

impl DialogView for DialogSlot {
    fn render(&mut self, props: &DialogProps) {
        let mut state = self.lock();
        if props.cycle != state.cycle {
            state.selected = ConfirmButton::Cancel;
            state.cycle = props.cycle;
        }
        state.props = Some(props.clone());
    }
}

impl DialogSlot {
    pub fn new(labels: DialogLabels) -> Self {
        Self {
            state: Arc::default(),
            labels: Arc::new(labels),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_open(&self) -> bool {
        self.lock().props.as_ref().is_some_and(|p| p.open)
    }

    pub fn selected(&self) -> ConfirmButton {
        self.lock().selected
    }

    /// Feed a key press to the dialog.
    ///
    /// The dialog is modal: while open it consumes every key.
    pub fn handle_key(&self, key: KeyCode) -> InputOutcome {
        let (responder, outcome) = {
            let mut state = self.lock();
            let responder = match state.props.as_ref() {
                Some(props) if props.open => props.responder.clone(),
                _ => return InputOutcome::Ignored,
            };

            let outcome = match key {
                KeyCode::Tab | KeyCode::BackTab => {
                    state.selected = state.selected.toggle();
                    InputOutcome::Handled
                }
                KeyCode::Left => {
                    state.selected = ConfirmButton::Cancel;
                    InputOutcome::Handled
                }
                KeyCode::Right => {
                    state.selected = ConfirmButton::Confirm;
                    InputOutcome::Handled
                }
                KeyCode::Enter => match state.selected {
                    ConfirmButton::Confirm => InputOutcome::Confirmed,
                    ConfirmButton::Cancel => InputOutcome::Cancelled,
                },
                KeyCode::Char('y') | KeyCode::Char('Y') => InputOutcome::Confirmed,
                KeyCode::Char('n') | KeyCode::Char('N') => InputOutcome::Cancelled,
                KeyCode::Esc => InputOutcome::Dismissed,
                _ => InputOutcome::Handled,
            };
            (responder, outcome)
        };

        // The coordinator re-renders into this slot, so the lock must be free here
        self.report(&responder, outcome);
        outcome
    }

    /// Feed a left click at `(column, row)` on a screen of size `screen`
    pub fn handle_click(&self, column: u16, row: u16, screen: Rect) -> InputOutcome {
        let responder = match self.lock().props.as_ref() {
            Some(props) if props.open => props.responder.clone(),
            _ => return InputOutcome::Ignored,
        };

        let area = dialog_area(screen);
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        if inside {
            return InputOutcome::Handled;
        }

        self.report(&responder, InputOutcome::Dismissed);
        InputOutcome::Dismissed
    }

    fn report(&self, responder: &Responder, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Confirmed => {
                responder.confirm();
            }
            InputOutcome::Cancelled => {
                responder.cancel();
            }
            InputOutcome::Dismissed => {
                responder.open_change(false);
            }
            InputOutcome::Ignored | InputOutcome::Handled => {}
        }
    }

    /// Draw the dialog over `area` if it is open
    pub fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let (request, selected) = {
            let state = self.lock();
            match state.props.as_ref() {
                Some(props) if props.open => (props.request.clone(), state.selected),
                _ => return,
            }
        };
        let Some(request) = request else {
            return;
        };

        let dialog = ConfirmDialog {
            title: &request.title,
            message: &request.description,
            confirm_label: request
                .confirm_label
                .as_deref()
                .unwrap_or(&self.labels.confirm),
            cancel_label: request
                .cancel_label
                .as_deref()
                .unwrap_or(&self.labels.cancel),
            dangerous: request.variant == Variant::Destructive,
            selected,
        };
        dialog.render(frame, area, theme);
    }
}

/// Screen region the dialog occupies
pub fn dialog_area(area: Rect) -> Rect {
    centered_rect(60, 40, area)
}

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Body text
    pub message: &'a str,
    pub confirm_label: &'a str,
    pub cancel_label: &'a str,
    /// Whether this is a dangerous operation
    pub dangerous: bool,
    pub selected: ConfirmButton,
}

impl ConfirmDialog<'_> {
    /// Render the dialog
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = dialog_area(area);

        // Clear the background
        frame.render_widget(Clear, dialog_area);

        let border_style = if self.dangerous {
            theme.danger()
        } else {
            theme.border_focused()
        };

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(if self.dangerous {
                theme.danger()
            } else {
                theme.title()
            })
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(2),    // Message
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        let message_widget = Paragraph::new(self.message)
            .style(theme.text())
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        let confirm_style = match (self.selected, self.dangerous) {
            (ConfirmButton::Confirm, true) => theme.danger_selected(),
            (ConfirmButton::Confirm, false) => theme.selection(),
            _ => theme.text_secondary(),
        };
        let cancel_style = match self.selected {
            ConfirmButton::Cancel => theme.selection(),
            ConfirmButton::Confirm => theme.text_secondary(),
        };
        let buttons = Line::from(vec![
            Span::styled(format!("[ {} ]", self.cancel_label), cancel_style),
            Span::raw("    "),
            Span::styled(format!("[ {} ]", self.confirm_label), confirm_style),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );

        let help = Paragraph::new("[Y] Yes    [N] No    [Tab] Switch    [Esc] Cancel")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }
}
