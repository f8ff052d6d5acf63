//! Tree walker: discovers directories and markdown notes beneath a root.

use std::path::PathBuf;

use glossa_core::{DirectoryEntry, MarkdownFile};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{BuildError, BuildResult};

/// Walks a documentation root.
///
/// Hidden entries (names starting with `.`) are skipped along with
/// everything beneath them. Siblings are visited in file-name order, so the
/// result is stable across runs. A symlinked note counts as a note; a
/// symlinked directory is neither descended into nor given a README.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    template_name: String,
    readme_name: String,
}

/// Everything one walk discovered.
#[derive(Debug, Clone, Default)]
pub struct TreeWalk {
    /// Every non-hidden directory beneath the root, depth first.
    pub directories: Vec<DirectoryEntry>,

    /// Every markdown note inside those directories, each listed once, in
    /// walk order. Notes sitting directly in the root are not included.
    pub markdown: Vec<MarkdownFile>,
}

impl TreeWalker {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            root: root.into(),
            template_name: defaults.readme_template,
            readme_name: defaults.readme_name,
        }
    }

    /// Use the template and README names from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.template_name.clone_from(&config.readme_template);
        self.readme_name.clone_from(&config.readme_name);
        self
    }

    /// Whether `name` is a markdown note: a case-insensitive `.md` suffix,
    /// and not a README.
    pub fn is_markdown(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        lower.ends_with(".md")
            && lower != "readme.md"
            && !name.eq_ignore_ascii_case(&self.readme_name)
    }

    /// Walk the root.
    ///
    /// # Errors
    /// Returns [`BuildError::MissingRoot`] when the root is not a directory,
    /// or [`BuildError::Walk`] when a directory cannot be listed.
    pub fn walk(&self) -> BuildResult<TreeWalk> {
        if !self.root.is_dir() {
            return Err(BuildError::MissingRoot {
                path: self.root.clone(),
            });
        }

        log::info!("Looking for directories in {}", self.root.display());

        let mut found = TreeWalk::default();
        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in entries {
            let entry = entry?;
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let relative = relative.to_path_buf();

            if entry.file_type().is_dir() {
                let mut dir = DirectoryEntry::new(entry.path().to_path_buf(), relative);
                let template = entry.path().join(&self.template_name);
                if template.is_file() {
                    dir = dir.with_template(template);
                }
                log::info!(" + Adding {}", dir.name());
                found.directories.push(dir);
            } else if entry.path_is_symlink() && entry.path().is_dir() {
                log::debug!(" - Skipping linked directory {}", relative.display());
            } else if entry.path().is_file()
                && entry.depth() > 1
                && self.is_markdown(&entry.file_name().to_string_lossy())
            {
                log::debug!(" + Found note {}", relative.display());
                found.markdown.push(MarkdownFile::new(relative));
            }
        }

        Ok(found)
    }
}

impl TreeWalk {
    /// Notes anywhere beneath `dir`, in walk order.
    pub fn files_beneath<'a>(
        &'a self,
        dir: &'a DirectoryEntry,
    ) -> impl Iterator<Item = &'a MarkdownFile> + 'a {
        self.markdown
            .iter()
            .filter(move |f| dir.contains(f.relative()))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relatives(walk: &TreeWalk) -> Vec<String> {
        walk.markdown.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_is_markdown() {
        let walker = TreeWalker::new(".");
        assert!(walker.is_markdown("notes.md"));
        assert!(walker.is_markdown("NOTES.MD"));
        assert!(!walker.is_markdown("README.md"));
        assert!(!walker.is_markdown("readme.MD"));
        assert!(!walker.is_markdown("notes.txt"));
        assert!(!walker.is_markdown("md"));
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let walker = TreeWalker::new(temp_dir.path().join("absent"));
        let err = walker.walk().unwrap_err();
        assert!(matches!(err, BuildError::MissingRoot { .. }));
    }

    #[test]
    fn test_walk_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let walk = TreeWalker::new(temp_dir.path()).walk().unwrap();
        assert!(walk.directories.is_empty());
        assert!(walk.markdown.is_empty());
    }

    #[test]
    fn test_walk_finds_directories_and_notes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "docs/b.md");
        touch(root, "docs/a.md");
        touch(root, "docs/README.md");
        touch(root, "docs/net/tcp.md");
        touch(root, "docs/net/notes.txt");
        touch(root, "top-level.md");

        let walk = TreeWalker::new(root).walk().unwrap();

        let dirs: Vec<String> = walk.directories.iter().map(|d| d.name()).collect();
        assert_eq!(dirs, vec!["docs", "net"]);
        assert_eq!(
            relatives(&walk),
            vec!["docs/a.md", "docs/b.md", "docs/net/tcp.md"]
        );
    }

    #[test]
    fn test_walk_skips_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, ".git/info.md");
        touch(root, "docs/.drafts/secret.md");
        touch(root, "docs/.hidden.md");
        touch(root, "docs/visible.md");

        let walk = TreeWalker::new(root).walk().unwrap();

        let dirs: Vec<String> = walk.directories.iter().map(|d| d.name()).collect();
        assert_eq!(dirs, vec!["docs"]);
        assert_eq!(relatives(&walk), vec!["docs/visible.md"]);
    }

    #[test]
    fn test_walk_detects_templates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "docs/README-template.txt");
        fs::create_dir_all(root.join("misc")).unwrap();

        let walk = TreeWalker::new(root).walk().unwrap();

        assert!(walk.directories[0].has_template());
        assert!(!walk.directories[1].has_template());
    }

    #[test]
    fn test_files_beneath() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "docs/a.md");
        touch(root, "docs/net/tcp.md");
        touch(root, "misc/z.md");

        let walk = TreeWalker::new(root).walk().unwrap();
        let docs = &walk.directories[0];
        let beneath: Vec<String> = walk.files_beneath(docs).map(|f| f.to_string()).collect();
        assert_eq!(beneath, vec!["docs/a.md", "docs/net/tcp.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_keeps_symlinked_notes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "shared.md");
        touch(root, "docs/own.md");
        std::os::unix::fs::symlink(root.join("shared.md"), root.join("docs/link.md")).unwrap();

        let walk = TreeWalker::new(root).walk().unwrap();
        assert_eq!(relatives(&walk), vec!["docs/link.md", "docs/own.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_symlinked_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "docs/a.md");
        std::os::unix::fs::symlink(root.join("docs"), root.join("mirror")).unwrap();

        let walk = TreeWalker::new(root).walk().unwrap();

        let dirs: Vec<String> = walk.directories.iter().map(|d| d.name()).collect();
        assert_eq!(dirs, vec!["docs"]);
        assert_eq!(relatives(&walk), vec!["docs/a.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "locked/a.md");
        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not bind a privileged user.
        let readable = fs::read_dir(&locked).is_ok();
        let result = TreeWalker::new(root).walk();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(err, BuildError::Walk(_)));
        assert_eq!(err.path(), Some(locked.as_path()));
    }

    #[test]
    fn test_custom_readme_name_is_not_a_note() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "docs/index.md");
        touch(root, "docs/a.md");

        let config = Config {
            readme_name: String::from("index.md"),
            ..Config::default()
        };
        let walk = TreeWalker::new(root).with_config(&config).walk().unwrap();
        assert_eq!(relatives(&walk), vec!["docs/a.md"]);
    }
}
