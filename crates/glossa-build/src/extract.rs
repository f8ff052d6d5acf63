use std::path::Path;

use glossa_core::{extract_keywords, KeywordIndex, MarkdownFile};

use crate::error::{BuildError, BuildResult};

/// Scan every note for its keyword block and build the keyword index.
///
/// Notes are read in the order given, which fixes the order of files
/// listed under each term.
///
/// # Errors
/// Returns [`BuildError::Read`] for the first note that cannot be read.
pub fn extract_index(root: &Path, files: &[MarkdownFile]) -> BuildResult<KeywordIndex> {
    log::info!("Building index from {} notes", files.len());

    let mut index = KeywordIndex::new();
    for file in files {
        let path = root.join(file.relative());
        let text = std::fs::read_to_string(&path).map_err(|source| BuildError::Read {
            path: path.clone(),
            source,
        })?;

        let terms = extract_keywords(&text);
        if terms.is_empty() {
            log::debug!("No keywords in {}", file);
        } else {
            log::debug!("{} keywords in {}", terms.len(), file);
        }
        index.record_all(&terms, file);
    }

    Ok(index)
}
