use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::anchors::AlphabetAnchors;
use crate::model::markdown::MarkdownFile;

/// The term-to-files mapping built by keyword extraction.
///
/// Each distinct spelling of a term is its own entry; spellings that differ
/// only in case sort next to each other. Files are kept in the order they
/// were recorded, and a file is listed at most once per term. Alphabet
/// anchors are maintained as terms are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIndex {
    entries: BTreeMap<String, Vec<MarkdownFile>>,
    anchors: AlphabetAnchors,
}

/// A borrowed view of one index entry, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordEntry<'a> {
    pub term: &'a str,
    pub files: &'a [MarkdownFile],
}

impl KeywordIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `file` declares `term`.
    pub fn record(&mut self, term: &str, file: &MarkdownFile) {
        let files = self.entries.entry(term.to_string()).or_default();
        if files.is_empty() {
            log::debug!("New keyword: {}", term);
        }
        if !files.contains(file) {
            files.push(file.clone());
        }
        self.anchors.offer(term);
    }

    /// Record every term in `terms` against `file`.
    pub fn record_all<I, S>(&mut self, terms: I, file: &MarkdownFile)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.record(term.as_ref(), file);
        }
    }

    /// Files recorded for the exact spelling `term`.
    pub fn files_for(&self, term: &str) -> Option<&[MarkdownFile]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn anchors(&self) -> &AlphabetAnchors {
        &self.anchors
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted case-insensitively. Terms equal ignoring case are
    /// ordered by their exact bytes, so `Cache` precedes `cache`.
    pub fn sorted(&self) -> Vec<KeywordEntry<'_>> {
        let mut entries: Vec<(String, KeywordEntry<'_>)> = self
            .entries
            .iter()
            .map(|(term, files)| {
                (
                    term.to_lowercase(),
                    KeywordEntry {
                        term: term.as_str(),
                        files: files.as_slice(),
                    },
                )
            })
            .collect();
        // BTreeMap iteration is already byte-ordered, so a stable sort on the
        // folded key leaves exact-byte order as the tie-break.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, entry)| entry).collect()
    }
}
