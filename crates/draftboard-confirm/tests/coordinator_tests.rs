//! Integration tests for the confirmation coordinator

use std::sync::{Arc, Mutex};
use std::time::Duration;

use draftboard_confirm::{
    ConfirmScope, ConfirmationCoordinator, ConfirmationRequest, DialogProps, ScopeError, Variant,
};

/// How long an orphaned confirmation is watched before we call it "pending forever"
const HANG_BUDGET: Duration = Duration::from_millis(100);

/// Records every render the coordinator performs
#[derive(Clone, Default)]
struct RecordingView {
    renders: Arc<Mutex<Vec<DialogProps>>>,
}

impl RecordingView {
    fn attach(coordinator: &ConfirmationCoordinator) -> Self {
        let view = Self::default();
        let renders = Arc::clone(&view.renders);
        coordinator.attach_view(move |props: &DialogProps| {
            renders.lock().unwrap().push(props.clone());
        });
        view
    }

    fn last(&self) -> DialogProps {
        self.renders
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one render")
    }

    fn count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }
}

fn delete_request() -> ConfirmationRequest {
    ConfirmationRequest::new("Delete?", "This cannot be undone.").variant(Variant::Destructive)
}

fn leave_request() -> ConfirmationRequest {
    ConfirmationRequest::new("Leave page?", "Unsaved changes will be lost.")
}

// ============================================
// Scenarios
// ============================================

#[tokio::test]
async fn test_destructive_request_confirmed() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);

    let confirmation = coordinator.scope().confirm(delete_request()).unwrap();

    let shown = view.last();
    assert!(shown.open);
    assert_eq!(shown.request.as_ref().unwrap().variant, Variant::Destructive);

    assert!(shown.responder.confirm());
    assert!(confirmation.await);
    assert!(!view.last().open);
}

#[tokio::test]
async fn test_outside_dismissal_cancels() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);

    let confirmation = coordinator.scope().confirm(leave_request()).unwrap();
    assert!(view.last().responder.open_change(false));

    assert!(!confirmation.await);
    assert!(!coordinator.is_open());
}

#[tokio::test]
async fn test_superseded_request_stays_pending() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);
    let scope = coordinator.scope();

    let first = scope.confirm(ConfirmationRequest::new("A", "first")).unwrap();
    let second = scope.confirm(ConfirmationRequest::new("B", "second")).unwrap();

    let shown = view.last();
    assert_eq!(shown.title(), Some("B"));
    assert_eq!(shown.cycle, 2);

    assert!(shown.responder.confirm());
    assert!(second.await);

    let first_result = tokio::time::timeout(HANG_BUDGET, first).await;
    assert!(first_result.is_err(), "superseded confirmation must not settle");
}

// ============================================
// Settlement Laws
// ============================================

#[tokio::test]
async fn test_cancel_and_dismiss_are_identical() {
    let coordinator = ConfirmationCoordinator::new();
    let responder = coordinator.responder();

    let cancelled = coordinator.confirm(leave_request());
    responder.cancel();
    let dismissed = coordinator.confirm(leave_request());
    responder.open_change(false);

    assert_eq!(cancelled.await, dismissed.await);
}

#[tokio::test]
async fn test_late_decisions_do_not_change_result() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);

    let mut confirmation = coordinator.confirm(delete_request());
    let responder = view.last().responder;

    assert!(responder.cancel());
    let renders_after_close = view.count();

    assert!(!responder.confirm());
    assert!(!responder.cancel());
    assert!(!responder.open_change(false));

    assert_eq!(confirmation.try_outcome(), Some(false));
    assert_eq!(view.count(), renders_after_close);
    assert!(!(&mut confirmation).await);
}

#[tokio::test]
async fn test_stale_responder_cannot_settle_next_request() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);

    let first = coordinator.confirm(leave_request());
    let stale = view.last().responder;
    assert!(stale.cancel());
    assert!(!first.await);

    let mut second = coordinator.confirm(delete_request());
    assert!(!stale.confirm());
    assert!(view.last().open);
    assert_eq!(second.try_outcome(), None);

    assert!(view.last().responder.cancel());
    assert!(!(&mut second).await);
}

#[tokio::test]
async fn test_every_transition_renders() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);
    assert_eq!(view.count(), 1);

    let _a = coordinator.confirm(leave_request());
    let _b = coordinator.confirm(delete_request());
    coordinator.responder().confirm();

    let opens: Vec<bool> = view
        .renders
        .lock()
        .unwrap()
        .iter()
        .map(|props| props.open)
        .collect();
    assert_eq!(opens, vec![false, true, true, false]);
}

#[tokio::test]
async fn test_request_passed_through_unchanged() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);

    let request = ConfirmationRequest::new("", "").cancel_label("");
    let _pending = coordinator.confirm(request.clone());

    assert_eq!(view.last().request, Some(request));
}

#[tokio::test]
async fn test_decision_from_spawned_task() {
    let coordinator = ConfirmationCoordinator::new();
    let scope = coordinator.scope();
    let responder = coordinator.responder();

    let asker = tokio::spawn(async move {
        let confirmation = scope.confirm(delete_request())?;
        Ok::<_, ScopeError>(confirmation.await)
    });

    while !coordinator.is_open() {
        tokio::task::yield_now().await;
    }
    responder.confirm();

    assert!(asker.await.unwrap().unwrap());
}

// ============================================
// Scope and Teardown
// ============================================

#[test]
fn test_detached_scope_fails_fast() {
    let scope = ConfirmScope::detached();
    assert!(!scope.is_mounted());
    assert_eq!(
        scope.confirm(leave_request()).unwrap_err(),
        ScopeError::Detached
    );
}

#[test]
fn test_unmounted_scope_fails_fast() {
    let coordinator = ConfirmationCoordinator::new();
    let scope = coordinator.scope();
    assert!(scope.is_mounted());

    drop(coordinator);

    assert!(!scope.is_mounted());
    assert_eq!(
        scope.confirm(leave_request()).unwrap_err(),
        ScopeError::Unmounted
    );
}

#[tokio::test]
async fn test_unmount_cancels_open_request() {
    let coordinator = ConfirmationCoordinator::new();
    let view = RecordingView::attach(&coordinator);
    let confirmation = coordinator.confirm(delete_request());

    drop(coordinator);

    assert!(!confirmation.await);
    assert!(!view.last().open);
}

#[tokio::test]
async fn test_unmount_leaves_orphans_pending() {
    let coordinator = ConfirmationCoordinator::new();
    let orphan = coordinator.confirm(ConfirmationRequest::new("A", ""));
    let current = coordinator.confirm(ConfirmationRequest::new("B", ""));

    drop(coordinator);

    assert!(!current.await);
    assert!(tokio::time::timeout(HANG_BUDGET, orphan).await.is_err());
}
