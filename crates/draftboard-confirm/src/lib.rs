//! Draftboard Confirm - awaitable yes/no confirmations
//!
//! This crate turns a modal "are you sure?" dialog into a future:
//! - [`ConfirmationCoordinator`] owns the single on-screen dialog
//! - [`ConfirmScope`] is the capability handed to code that asks questions
//! - [`Confirmation`] is the eventual `bool` the caller awaits
//! - [`DialogView`] is implemented by whatever draws the dialog
//!
//! ```no_run
//! use draftboard_confirm::{ConfirmationCoordinator, ConfirmationRequest};
//!
//! # async fn example() {
//! let coordinator = ConfirmationCoordinator::new();
//! let scope = coordinator.scope();
//!
//! let confirmation = scope
//!     .confirm(ConfirmationRequest::new("Delete?", "This cannot be undone.").destructive())
//!     .expect("coordinator is mounted");
//!
//! // Elsewhere, the dialog view reports the user's choice
//! coordinator.responder().confirm();
//!
//! assert!(confirmation.await);
//! # }
//! ```

pub mod coordinator;
pub mod error;
pub mod request;
pub mod settlement;
pub mod view;

pub use coordinator::{ConfirmScope, ConfirmationCoordinator, Responder};
pub use error::{Result, ScopeError};
pub use request::{ConfirmationRequest, Variant};
pub use settlement::{settlement, Confirmation, Settlement};
pub use view::{DialogProps, DialogView};
