//! Reusable UI components

pub mod confirm;
pub mod header;

pub use confirm::{ConfirmButton, DialogLabels, DialogSlot, InputOutcome};
