//! Event handling for the TUI

use tokio::sync::mpsc;

/// Something waiting on a confirmation before it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Release a player from the roster
    DropPlayer { name: String },
    /// Put every player back on the bench
    ResetLineup,
    /// Leave the dashboard
    Quit,
}

/// Application events produced off the input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A confirmation the app asked for has been answered
    Decision {
        action: PendingAction,
        confirmed: bool,
    },
}

/// Channel for events produced by spawned tasks
pub struct EventHandler {
    /// Sender for events
    sender: mpsc::UnboundedSender<Event>,
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a clone of the sender for other tasks to send events
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Receive the next event
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}
