//! # Townsplit-RS: Town-Name Vocabulary Builder
//!
//! Splits generated place names into a left piece and a right piece, using two
//! growing vocabularies of known prefixes and known suffixes:
//!
//! - **Splitting**: a name that starts with a known left piece teaches a new
//!   right piece, and a name that ends with a known right piece teaches a new
//!   left piece
//! - **Word lists**: vocabularies load from and persist to flat one-per-line files
//! - **Remote source**: candidate names can be streamed from a paginated
//!   name-generator endpoint with bounded retries
//! - **Composition**: the grown vocabularies can be recombined into new names
//!
//! ## Quick Start
//!
//! ```rust
//! use townsplit_rs::{Classification, Splitter, Vocabulary};
//!
//! let mut splitter = Splitter::new(
//!     Vocabulary::from_entries(["new"]),
//!     Vocabulary::from_entries(["ville"]),
//! );
//!
//! let outcome = splitter.classify_raw("newport").unwrap();
//! assert!(matches!(outcome, Classification::NewRight { .. }));
//! assert!(splitter.right().contains("port"));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]

// Core splitting engine
pub mod core {
    //! Vocabularies, splitting, configuration and errors.

    pub mod config;
    pub mod errors;
    pub mod session;
    pub mod splitter;
    pub mod vocabulary;
}

// Word sources and sinks
pub mod io {
    //! Word-list files and the remote candidate source.

    pub mod fetch;
    pub mod wordlist;
}

pub mod compose;

// Re-export primary types for convenience
pub use crate::core::config::TownsplitConfig;
pub use crate::core::errors::{Result, TownsplitError};
pub use crate::core::session::{run_stream, SessionLimits, SessionObserver, SessionOutcome, StopReason};
pub use crate::core::splitter::{CandidateWord, Classification, Splitter, Summary};
pub use crate::core::vocabulary::Vocabulary;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
