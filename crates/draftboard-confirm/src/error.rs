//! Error types for the confirmation subsystem

use thiserror::Error;

/// Result type alias for confirmation operations
pub type Result<T> = std::result::Result<T, ScopeError>;

/// The confirmation capability was used without a mounted coordinator.
///
/// This is a wiring mistake in the calling code, never a user decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The scope was never bound to a coordinator
    #[error("confirm must be used within a ConfirmationCoordinator scope")]
    Detached,

    /// The coordinator this scope was bound to has been torn down
    #[error("the ConfirmationCoordinator for this scope has been unmounted")]
    Unmounted,
}
