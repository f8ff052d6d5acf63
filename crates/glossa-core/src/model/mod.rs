pub mod anchors;
pub mod directory;
pub mod index;
pub mod markdown;

pub use anchors::AlphabetAnchors;
pub use directory::DirectoryEntry;
pub use index::{KeywordEntry, KeywordIndex};
pub use markdown::MarkdownFile;

use std::path::{Component, Path};

/// Join the normal components of a relative path with `/`, whatever the
/// platform separator is.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
