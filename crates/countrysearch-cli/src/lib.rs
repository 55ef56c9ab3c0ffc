//! countrysearch-cli
//! =================
//!
//! Command-line interface for the `countrysearch-core` country autosuggest.
//!
//! The binary (`countrysearch`) is the primary deliverable. The library
//! target holds the terminal widget so it can be tested and reused.
//!
//! ```text
//! countrysearch --help
//! countrysearch search par
//! countrysearch show "new zealand"
//! countrysearch interactive
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod commands;
pub mod terminal;

pub use terminal::TerminalAutosuggest;
