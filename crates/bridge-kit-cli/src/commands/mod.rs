//! CLI command implementations for bridge-kit.
//!
//! Each module corresponds to a subcommand (`bridge-kit <command>`).

pub mod balance;
pub mod chains;
pub mod new;
