use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::model::slash_path;

/// A directory discovered beneath the documentation root.
///
/// Each entry produces exactly one generated README per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Full path to the directory (root joined with `relative`).
    pub path: PathBuf,

    /// Path of the directory relative to the documentation root.
    pub relative: PathBuf,

    /// Directory-local README template, when one exists.
    pub template: Option<PathBuf>,
}

impl DirectoryEntry {
    #[must_use]
    pub fn new(path: PathBuf, relative: PathBuf) -> Self {
        Self {
            path,
            relative,
            template: None,
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// The directory's basename, used as its display name.
    pub fn name(&self) -> String {
        self.relative
            .file_name()
            .or_else(|| self.path.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    /// Link target for this directory as seen from the root README,
    /// e.g. `./docs/net`.
    pub fn link_target(&self) -> String {
        format!("./{}", slash_path(&self.relative))
    }

    /// Whether `relative` (a root-relative file path) lies beneath this
    /// directory.
    pub fn contains(&self, relative: &Path) -> bool {
        relative.starts_with(&self.relative)
    }
}
