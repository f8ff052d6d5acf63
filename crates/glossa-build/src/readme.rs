//! README synthesis for the root and every discovered directory.

use std::path::Path;

use glossa_core::{DirectoryEntry, MarkdownFile};

use crate::error::{BuildError, BuildResult};

/// Read a template verbatim.
///
/// # Errors
/// [`BuildError::MissingTemplate`] when `path` is not a file, otherwise
/// [`BuildError::Read`] if it cannot be read.
pub fn read_template(path: &Path) -> BuildResult<String> {
    if !path.is_file() {
        return Err(BuildError::MissingTemplate {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// The generic README body for a directory without a template.
pub fn stub(name: &str) -> String {
    format!("# {name}\nWrite-ups for {name}\n\n")
}

/// Render the root README: the root template followed by one link per
/// directory.
pub fn render_root_readme(template: &str, directories: &[DirectoryEntry]) -> String {
    let mut out = String::from(template);
    for dir in directories {
        out.push_str(&link_line(&dir.name(), &dir.link_target()));
    }
    out
}

/// Render the README for `dir`: its template (or a stub), followed by one
/// link per note beneath it.
///
/// # Errors
/// Fails when the directory's template exists but cannot be read.
pub fn render_directory_readme<'a, I>(dir: &DirectoryEntry, files: I) -> BuildResult<String>
where
    I: IntoIterator<Item = &'a MarkdownFile>,
{
    let mut out = match &dir.template {
        Some(template) => read_template(template)?,
        None => stub(&dir.name()),
    };

    for file in files {
        let Some(target) = file.link_target_from(&dir.relative) else {
            continue;
        };
        log::debug!(" + Linking {} from {}", file, dir.relative.display());
        out.push_str(&link_line(&file.stem(), &target));
    }

    Ok(out)
}

/// A markdown list item linking `text` to `target`.
pub(crate) fn link_line(text: &str, target: &str) -> String {
    format!("* [{text}]({target})\n")
}
