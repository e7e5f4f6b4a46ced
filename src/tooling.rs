//! Tooling & Integration Layer
//!
//! Command-line front end over the organization and workspace clients.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
