//! Document generation for glossa.
//!
//! Walks a documentation root, writes a README into the root and every
//! directory, and builds an alphabetical keyword index from the "Keywords"
//! blocks of the markdown notes it finds.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod pipeline;
pub mod readme;
pub mod walk;

pub use config::Config;
pub use error::{BuildError, BuildResult};
pub use extract::extract_index;
pub use index::render_index;
pub use pipeline::{Document, Generator, RunSummary, Scan};
pub use walk::{TreeWalk, TreeWalker};
