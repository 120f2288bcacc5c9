//! Tooling
//!
//! Command-line surface over the renderers.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
