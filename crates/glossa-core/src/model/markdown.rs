use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::slash_path;

/// A reference to a markdown note discovered during the walk.
///
/// The path is stored relative to the documentation root; README files are
/// never represented by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkdownFile {
    relative: PathBuf,
}

impl MarkdownFile {
    #[must_use]
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// File name without its extension, used as link text in READMEs.
    pub fn stem(&self) -> String {
        self.relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Root-relative link target, e.g. `./docs/x.md`.
    pub fn link_target(&self) -> String {
        format!("./{}", slash_path(&self.relative))
    }

    /// Link target relative to `dir` (itself root-relative), or `None` when
    /// the file does not live beneath it.
    pub fn link_target_from(&self, dir: &Path) -> Option<String> {
        self.relative
            .strip_prefix(dir)
            .ok()
            .map(|rest| format!("./{}", slash_path(rest)))
    }

    /// Label shown in the keyword index: the root-relative path with its
    /// extension removed and separators rendered as ` - `.
    pub fn index_label(&self) -> String {
        slash_path(&self.relative.with_extension("")).replace('/', " - ")
    }
}

impl fmt::Display for MarkdownFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", slash_path(&self.relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_stem() {
        let file = MarkdownFile::new("docs/net/tcp-tuning.md");
        assert_eq!(file.stem(), "tcp-tuning");
    }

    #[test]
    fn test_markdown_link_target() {
        let file = MarkdownFile::new("docs/x.md");
        assert_eq!(file.link_target(), "./docs/x.md");
    }

    #[test]
    fn test_markdown_link_target_from_directory() {
        let file = MarkdownFile::new("docs/net/tcp.md");
        assert_eq!(
            file.link_target_from(Path::new("docs")),
            Some("./net/tcp.md".to_string())
        );
        assert_eq!(
            file.link_target_from(Path::new("docs/net")),
            Some("./tcp.md".to_string())
        );
        assert_eq!(file.link_target_from(Path::new("other")), None);
    }

    #[test]
    fn test_markdown_index_label() {
        assert_eq!(MarkdownFile::new("docs/x.md").index_label(), "docs - x");
        assert_eq!(
            MarkdownFile::new("docs/net/tcp.MD").index_label(),
            "docs - net - tcp"
        );
    }

    #[test]
    fn test_markdown_display() {
        let file = MarkdownFile::new("docs/x.md");
        assert_eq!(format!("{file}"), "docs/x.md");
    }
}
