//! Confirmation coordinator state machine
//!
//! The coordinator owns at most one open confirmation. States:
//!
//! - `Closed --confirm(req)--> Open`
//! - `Open --confirm(req')--> Open`: the new request replaces the old one and
//!   the old caller's [`Confirmation`] is orphaned (it never resolves)
//! - `Open --confirm decision--> Closed`: settles `true`
//! - `Open --cancel/dismiss--> Closed`: settles `false`
//!
//! Decisions that arrive while closed are ignored.
//!
//! Dropping the coordinator unmounts it: an open request settles `false` and
//! every [`ConfirmScope`] handed out starts returning [`ScopeError::Unmounted`].

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, trace};

use crate::error::{Result, ScopeError};
use crate::request::ConfirmationRequest;
use crate::settlement::{settlement, Confirmation, Settlement};
use crate::view::{DialogProps, DialogView};

/// Coordinator state.
///
/// `active` and `pending` are always set and cleared together, so the dialog
/// is open exactly when both are present.
#[derive(Debug, Default)]
struct CoordinatorState {
    active: Option<ConfirmationRequest>,
    pending: Option<Settlement>,
    cycle: u64,
    unmounted: bool,
}

impl CoordinatorState {
    fn is_open(&self) -> bool {
        self.active.is_some() && self.pending.is_some()
    }
}

struct Inner {
    state: CoordinatorState,
    view: Option<Box<dyn DialogView + Send>>,
}

struct Shared {
    inner: Mutex<Inner>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open(self: &Arc<Self>, inner: &mut Inner, request: ConfirmationRequest) -> Confirmation {
        let (pending, confirmation) = settlement();
        if let Some(previous) = inner.state.pending.replace(pending) {
            if !previous.is_settled() {
                debug!(
                    cycle = inner.state.cycle,
                    "Superseding open confirmation; its caller will stay pending"
                );
            }
        }
        inner.state.cycle += 1;
        debug!(
            cycle = inner.state.cycle,
            title = %request.title,
            variant = ?request.variant,
            "Confirmation opened"
        );
        inner.state.active = Some(request);

        self.render(inner);
        confirmation
    }

    fn decide(self: &Arc<Self>, confirmed: bool, cycle: Option<u64>) -> bool {
        let mut inner = self.lock();
        if let Some(cycle) = cycle.filter(|&c| c != inner.state.cycle) {
            trace!(
                confirmed,
                cycle,
                current = inner.state.cycle,
                "Ignoring decision for a superseded confirmation"
            );
            return false;
        }
        let Some(mut pending) = inner.state.pending.take() else {
            trace!(confirmed, "Ignoring decision; no confirmation is open");
            return false;
        };
        inner.state.active = None;
        pending.settle(confirmed);
        debug!(cycle = inner.state.cycle, confirmed, "Confirmation settled");

        self.render(&mut inner);
        true
    }

    fn unmount(self: &Arc<Self>) {
        let mut inner = self.lock();
        inner.state.unmounted = true;
        inner.state.active = None;
        if let Some(mut pending) = inner.state.pending.take() {
            pending.settle(false);
            debug!(
                cycle = inner.state.cycle,
                "Coordinator unmounted with an open confirmation; cancelled it"
            );
            self.render(&mut inner);
        }
    }

    fn props(self: &Arc<Self>, state: &CoordinatorState) -> DialogProps {
        DialogProps {
            open: state.is_open(),
            request: state.active.clone(),
            cycle: state.cycle,
            responder: Responder {
                shared: Arc::downgrade(self),
                cycle: Some(state.cycle),
            },
        }
    }

    fn render(self: &Arc<Self>, inner: &mut Inner) {
        let props = self.props(&inner.state);
        if let Some(view) = inner.view.as_mut() {
            view.render(&props);
        }
    }
}

/// Owner of the single confirmation dialog.
///
/// Construct one per mounted UI and pass [`ConfirmScope`] handles to code
/// that needs to ask the user something.
pub struct ConfirmationCoordinator {
    shared: Arc<Shared>,
}

impl Default for ConfirmationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationCoordinator {
    /// Create a mounted coordinator with no view attached
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: CoordinatorState::default(),
                    view: None,
                }),
            }),
        }
    }

    /// Create a coordinator rendering into `view`
    pub fn with_view(view: impl DialogView + Send + 'static) -> Self {
        let coordinator = Self::new();
        coordinator.attach_view(view);
        coordinator
    }

    /// Attach the dialog view, replacing any previous one.
    ///
    /// The view is rendered immediately with the current state.
    pub fn attach_view(&self, view: impl DialogView + Send + 'static) {
        let mut inner = self.shared.lock();
        inner.view = Some(Box::new(view));
        self.shared.render(&mut inner);
    }

    /// Ask the user a yes/no question.
    ///
    /// Returns immediately. The returned future resolves once the view
    /// reports a decision. If another request supersedes this one first,
    /// the future never resolves.
    pub fn confirm(&self, request: ConfirmationRequest) -> Confirmation {
        let mut inner = self.shared.lock();
        self.shared.open(&mut inner, request)
    }

    /// Capability handle for callers elsewhere in the UI
    pub fn scope(&self) -> ConfirmScope {
        ConfirmScope {
            shared: Some(Arc::downgrade(&self.shared)),
        }
    }

    /// Decision channel for the dialog view.
    ///
    /// Unlike the responder in [`DialogProps`], this one is not bound to a
    /// cycle and settles whichever confirmation is open when it is used.
    pub fn responder(&self) -> Responder {
        Responder {
            shared: Arc::downgrade(&self.shared),
            cycle: None,
        }
    }

    /// Current dialog props, for views that draw on their own schedule
    pub fn snapshot(&self) -> DialogProps {
        let inner = self.shared.lock();
        self.shared.props(&inner.state)
    }

    pub fn is_open(&self) -> bool {
        self.shared.lock().state.is_open()
    }
}

impl Drop for ConfirmationCoordinator {
    fn drop(&mut self) {
        self.shared.unmount();
    }
}

impl fmt::Debug for ConfirmationCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.lock();
        f.debug_struct("ConfirmationCoordinator")
            .field("open", &inner.state.is_open())
            .field("cycle", &inner.state.cycle)
            .finish()
    }
}

/// Cloneable handle to request confirmations from a coordinator.
///
/// A scope does not keep its coordinator alive. Using a scope that was
/// never bound, or whose coordinator is gone, fails with [`ScopeError`].
#[derive(Clone, Default)]
pub struct ConfirmScope {
    shared: Option<Weak<Shared>>,
}

impl ConfirmScope {
    /// A scope with no coordinator behind it
    pub fn detached() -> Self {
        Self::default()
    }

    /// Ask the user a yes/no question through the bound coordinator
    pub fn confirm(&self, request: ConfirmationRequest) -> Result<Confirmation> {
        let weak = self.shared.as_ref().ok_or(ScopeError::Detached)?;
        let shared = weak.upgrade().ok_or(ScopeError::Unmounted)?;
        let mut inner = shared.lock();
        if inner.state.unmounted {
            return Err(ScopeError::Unmounted);
        }
        Ok(shared.open(&mut inner, request))
    }

    pub fn is_mounted(&self) -> bool {
        let Some(shared) = self.shared.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        let unmounted = shared.lock().state.unmounted;
        !unmounted
    }
}

impl fmt::Debug for ConfirmScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmScope")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// Channel through which the dialog view reports the user's decision.
///
/// Every method returns `true` if it settled an open confirmation and
/// `false` if there was nothing to settle.
///
/// The responder carried in [`DialogProps`] is bound to the cycle it was
/// rendered with. Once a newer request replaces that one, it settles nothing.
#[derive(Clone)]
pub struct Responder {
    shared: Weak<Shared>,
    cycle: Option<u64>,
}

impl Responder {
    /// The user confirmed
    pub fn confirm(&self) -> bool {
        self.decide(true)
    }

    /// The user cancelled
    pub fn cancel(&self) -> bool {
        self.decide(false)
    }

    /// The dialog's open state changed from the view side.
    ///
    /// Closing is how every dismissal gesture reaches the coordinator and
    /// counts as a cancel. Opening is driven by the coordinator only, so
    /// `open_change(true)` is ignored.
    pub fn open_change(&self, open: bool) -> bool {
        if open {
            return false;
        }
        self.cancel()
    }

    /// Cycle this responder is bound to, if any
    pub fn cycle(&self) -> Option<u64> {
        self.cycle
    }

    fn decide(&self, confirmed: bool) -> bool {
        match self.shared.upgrade() {
            Some(shared) => shared.decide(confirmed, self.cycle),
            None => false,
        }
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("live", &(self.shared.strong_count() > 0))
            .field("cycle", &self.cycle)
            .finish()
    }
}
