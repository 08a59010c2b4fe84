//! Boundary between the coordinator and whatever draws the dialog

use crate::coordinator::Responder;
use crate::request::ConfirmationRequest;

/// Everything a dialog needs to draw itself and report back.
#[derive(Debug, Clone)]
pub struct DialogProps {
    /// Whether the dialog should be on screen
    pub open: bool,

    /// The request being asked; `None` once closed
    pub request: Option<ConfirmationRequest>,

    /// Number of requests opened so far, including superseded ones
    pub cycle: u64,

    /// Decision channel back into the coordinator
    pub responder: Responder,
}

impl DialogProps {
    pub fn title(&self) -> Option<&str> {
        self.request.as_ref().map(|r| r.title.as_str())
    }
}

/// A presentation surface for the single confirmation dialog.
///
/// The coordinator calls `render` synchronously on every state change while
/// holding its state lock. Implementations must not report a decision from
/// inside `render`; decisions come from later input events.
///
/// Per open cycle a view reports exactly one of `Responder::confirm` or
/// `Responder::cancel`. Any dismissal gesture (escape, outside click) is
/// reported through `Responder::open_change(false)`.
pub trait DialogView {
    fn render(&mut self, props: &DialogProps);
}

impl<F> DialogView for F
where
    F: FnMut(&DialogProps),
{
    fn render(&mut self, props: &DialogProps) {
        self(props)
    }
}
