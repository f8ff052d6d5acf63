//! Core domain model for glossa.
//!
//! This crate defines the values that flow through a generator run
//! (directory entries, markdown file references, the keyword index and its
//! alphabet anchors) and the line-oriented scanner that pulls terms out of a
//! markdown "Keywords" block. Nothing here touches the file system.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod keyword;
pub mod model;

pub use keyword::{extract_keywords, ScanState};
pub use model::{AlphabetAnchors, DirectoryEntry, KeywordEntry, KeywordIndex, MarkdownFile};
