//! Screen implementations

pub mod help;
pub mod roster;
