//! Application state and event handling

pub mod config;
pub mod events;
mod state;

pub use config::{ConfigError, TuiConfig};
pub use events::{Event, EventHandler, PendingAction};
pub use state::{sample_roster, AppState, Player, Position, Screen};

use crossterm::event::{
    Event as TerminalEvent, EventStream, KeyCode, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use draftboard_confirm::{ConfirmScope, ConfirmationCoordinator, ConfirmationRequest};
use futures::StreamExt;
use ratatui::prelude::*;
use tracing::{debug, error, info};

use crate::ui::{self, components::DialogLabels, components::DialogSlot, Theme};

/// Application result type
pub type AppResult<T> = anyhow::Result<T>;

/// What woke the main loop
enum Wake {
    Tick,
    App(Event),
    Terminal(TerminalEvent),
    InputError(std::io::Error),
    InputClosed,
}

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    pub theme: Theme,

    /// Terminal view of the confirmation dialog
    pub dialog: DialogSlot,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Ticks elapsed; each one redraws the header clock
    pub tick: u64,

    config: TuiConfig,
    coordinator: ConfirmationCoordinator,
    scope: ConfirmScope,
    events: EventHandler,

    /// Screen size at the last draw
    viewport: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new(TuiConfig::default())
    }
}

impl App {
    /// Create a new application instance
    pub fn new(config: TuiConfig) -> Self {
        let dialog = DialogSlot::new(DialogLabels::from(&config));
        let coordinator = ConfirmationCoordinator::with_view(dialog.clone());
        let scope = coordinator.scope();
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Self {
            state: AppState::new(),
            theme,
            dialog,
            should_quit: false,
            tick: 0,
            config,
            coordinator,
            scope,
            events: EventHandler::new(),
            viewport: Rect::default(),
        }
    }

    /// Whether a confirmation dialog is on screen
    pub fn is_confirming(&self) -> bool {
        self.coordinator.is_open()
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let mut input = EventStream::new();
        let mut ticker = tokio::time::interval(self.config.tick_rate());

        while !self.should_quit {
            terminal.draw(|frame| {
                self.viewport = frame.area();
                ui::render(frame, &*self);
            })?;

            let wake = tokio::select! {
                _ = ticker.tick() => Wake::Tick,
                Some(event) = self.events.recv() => Wake::App(event),
                next = input.next() => match next {
                    Some(Ok(event)) => Wake::Terminal(event),
                    Some(Err(e)) => Wake::InputError(e),
                    None => Wake::InputClosed,
                },
            };

            match wake {
                Wake::Tick => self.tick = self.tick.wrapping_add(1),
                Wake::App(event) => self.handle_event(event),
                Wake::Terminal(event) => self.handle_terminal_event(event),
                Wake::InputError(e) => return Err(e.into()),
                Wake::InputClosed => self.should_quit = true,
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            TerminalEvent::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key(&mut self, key: KeyCode) {
        // An open dialog is modal
        if self.dialog.handle_key(key) != ui::components::InputOutcome::Ignored {
            return;
        }

        match self.state.current_screen {
            Screen::Roster => self.handle_roster_key(key),
            Screen::Help => self.handle_help_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.dialog.handle_click(mouse.column, mouse.row, self.viewport);
        }
    }

    fn handle_roster_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('d') => {
                if let Some(player) = self.state.selected_player() {
                    let name = player.name.clone();
                    let request = ConfirmationRequest::new(
                        format!("Drop {}?", name),
                        format!("{} will be released to waivers.", name),
                    )
                    .confirm_label("Drop")
                    .destructive();
                    self.ask(request, PendingAction::DropPlayer { name });
                }
            }
            KeyCode::Char('r') => {
                let request =
                    ConfirmationRequest::new("Reset lineup?", "Every starter moves to the bench.");
                self.ask(request, PendingAction::ResetLineup);
            }
            KeyCode::Char('q') => {
                let request =
                    ConfirmationRequest::new("Leave page?", "Unsaved changes will be lost.")
                        .confirm_label("Leave")
                        .cancel_label("Stay");
                self.ask(request, PendingAction::Quit);
            }
            KeyCode::Char('?') => self.state.current_screen = Screen::Help,
            KeyCode::Esc => self.state.clear_messages(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.state.current_screen = Screen::Roster;
            }
            _ => {}
        }
    }

    /// Open a confirmation and deliver the answer back as an [`Event::Decision`]
    fn ask(&mut self, request: ConfirmationRequest, action: PendingAction) {
        let confirmation = match self.scope.confirm(request) {
            Ok(confirmation) => confirmation,
            Err(e) => {
                error!("Cannot ask for confirmation: {}", e);
                self.state.error_message = Some(e.to_string());
                return;
            }
        };

        debug!(?action, "Waiting for confirmation");
        let sender = self.events.sender();
        tokio::spawn(async move {
            let confirmed = confirmation.await;
            // Receiver is gone once the app has shut down
            let _ = sender.send(Event::Decision { action, confirmed });
        });
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Decision { action, confirmed } => self.apply_decision(action, confirmed),
        }
    }

    fn apply_decision(&mut self, action: PendingAction, confirmed: bool) {
        info!(?action, confirmed, "Confirmation answered");
        self.state.clear_messages();

        match (action, confirmed) {
            (PendingAction::DropPlayer { name }, true) => {
                if self.state.drop_player(&name) {
                    self.state.status_message = Some(format!("Dropped {}", name));
                } else {
                    self.state.error_message = Some(format!("{} is no longer rostered", name));
                }
            }
            (PendingAction::DropPlayer { name }, false) => {
                self.state.status_message = Some(format!("Kept {}", name));
            }
            (PendingAction::ResetLineup, true) => {
                self.state.reset_lineup();
                self.state.status_message = Some("Lineup reset".to_string());
            }
            (PendingAction::ResetLineup, false) => {}
            (PendingAction::Quit, true) => self.should_quit = true,
            (PendingAction::Quit, false) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wait for the spawned confirmation task and apply its answer
    async fn settle_next(app: &mut App) {
        let event = app.events.recv().await.expect("decision event");
        app.handle_event(event);
    }

    #[tokio::test]
    async fn test_drop_player_confirmed() {
        let mut app = App::default();
        let name = app.state.selected_player().unwrap().name.clone();

        app.handle_key(KeyCode::Char('d'));
        assert!(app.is_confirming());

        app.handle_key(KeyCode::Char('y'));
        assert!(!app.is_confirming());
        settle_next(&mut app).await;

        assert!(app.state.roster.iter().all(|p| p.name != name));
        assert_eq!(app.state.status_message, Some(format!("Dropped {}", name)));
    }

    #[tokio::test]
    async fn test_drop_player_dismissed() {
        let mut app = App::default();
        let before = app.state.roster.len();

        app.handle_key(KeyCode::Char('d'));
        app.handle_key(KeyCode::Esc);
        settle_next(&mut app).await;

        assert_eq!(app.state.roster.len(), before);
    }

    #[tokio::test]
    async fn test_dialog_is_modal() {
        let mut app = App::default();

        app.handle_key(KeyCode::Char('r'));
        app.handle_key(KeyCode::Char('?'));
        app.handle_key(KeyCode::Down);

        assert_eq!(app.state.current_screen, Screen::Roster);
        assert_eq!(app.state.roster_index, 0);
        assert!(app.is_confirming());
    }

    #[tokio::test]
    async fn test_quit_requires_confirmation() {
        let mut app = App::default();

        app.handle_key(KeyCode::Char('q'));
        app.handle_key(KeyCode::Char('n'));
        settle_next(&mut app).await;
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Char('q'));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Enter);
        settle_next(&mut app).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_outside_click_cancels_reset() {
        let mut app = App::default();
        app.viewport = Rect::new(0, 0, 80, 24);
        let starters = app.state.starters();

        app.handle_key(KeyCode::Char('r'));
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        settle_next(&mut app).await;

        assert!(!app.is_confirming());
        assert_eq!(app.state.starters(), starters);
    }

    #[test]
    fn test_help_navigation() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('?'));
        assert_eq!(app.state.current_screen, Screen::Help);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.state.current_screen, Screen::Roster);
    }
}
