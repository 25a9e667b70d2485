//! CLI Command Implementations
//!
//! This module contains all command implementations for the townsplit CLI:
//! - split: classify names from a word-list file
//! - fetch: classify names streamed from the name generator
//! - compose: invent names from the learned pieces
//! - config: configuration management commands

pub mod compose;
pub mod config;
pub mod fetch;
pub mod split;

pub use compose::compose_command;
pub use config::{init_config, print_default_config, validate_config};
pub use fetch::fetch_command;
pub use split::split_command;
