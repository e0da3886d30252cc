//! Command handlers for CLI operations

pub mod check;
pub mod serve;

pub use check::CheckCommandHandler;
pub use serve::ServeCommandHandler;
