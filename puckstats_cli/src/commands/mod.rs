//! CLI subcommand implementations.

pub mod attendance;
pub mod draft;
pub mod performance;
pub mod players;
pub mod teams;
