//! Keyword-block scanning for markdown notes.
//!
//! A note declares its index terms under a heading whose only word is
//! "Keywords" (any heading level, any case):
//!
//! ```text
//! # Keywords
//! networking, storage
//! load balancing
//! ```
//!
//! Every non-heading line after that heading is split on commas until the
//! next heading. Only the first keyword block in a file is read.
//!
//! # Example
//!
//! ```
//! use glossa_core::extract_keywords;
//!
//! let terms = extract_keywords("# Notes\n\n## Keywords\na, b ,  ,c\n# Next\nd\n");
//! assert_eq!(terms, vec!["a", "b", "c"]);
//! ```

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static KEYWORDS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#+\s*keywords\s*$").expect("valid keywords heading pattern")
});

/// Where the scanner is within a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the keyword heading.
    #[default]
    Searching,
    /// Between the keyword heading and the next heading.
    InBlock,
    /// The block has ended; nothing else in the file is read.
    Done,
}

impl ScanState {
    /// Feed one line, pushing any terms it declares onto `terms`, and
    /// return the next state.
    #[must_use]
    pub fn advance(self, line: &str, terms: &mut Vec<String>) -> Self {
        let line = line.trim();
        match self {
            Self::Searching if is_keywords_heading(line) => Self::InBlock,
            Self::Searching => Self::Searching,
            Self::InBlock if line.starts_with('#') => Self::Done,
            Self::InBlock => {
                terms.extend(
                    line.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from),
                );
                Self::InBlock
            }
            Self::Done => Self::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}

/// Whether a trimmed line is the heading that opens a keyword block.
pub fn is_keywords_heading(line: &str) -> bool {
    KEYWORDS_HEADING.is_match(line)
}

/// Collect the terms declared in the first keyword block of `text`, in
/// order of appearance. Returns an empty list when there is no block.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut state = ScanState::Searching;
    for line in text.lines() {
        state = state.advance(line, &mut terms);
        if state.is_done() {
            break;
        }
    }
    terms
}
