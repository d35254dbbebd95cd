//! Command implementations

pub mod create;
pub mod notify;
