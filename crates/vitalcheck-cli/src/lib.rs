//! vitalcheck-cli
//!
//! The `vitalcheck` command: one subcommand per wizard step, driving a
//! single assessment kept in the session directory between runs.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
