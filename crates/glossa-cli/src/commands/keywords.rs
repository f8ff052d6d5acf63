use anyhow::{Context, Result};
use std::path::PathBuf;

use glossa_build::{Config, Generator};
use glossa_core::KeywordIndex;

pub fn show_keywords(root: PathBuf, config: Config, json: bool) -> Result<()> {
    let scan = Generator::new(&root)
        .with_config(config)
        .scan()
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    if json {
        println!("{}", render_json(&scan.index)?);
        return Ok(());
    }

    if scan.index.is_empty() {
        println!("No keywords found in {} notes", scan.walk.markdown.len());
        println!("\n  Add a \"# Keywords\" section to a note to index it");
        return Ok(());
    }

    for entry in scan.index.sorted() {
        println!("{}", entry.term);
        for file in entry.files {
            println!("  {file}");
        }
    }
    Ok(())
}

fn render_json(index: &KeywordIndex) -> Result<String> {
    serde_json::to_string_pretty(&index.sorted()).context("Failed to serialize keywords")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::MarkdownFile;

    #[test]
    fn test_render_json() {
        let mut index = KeywordIndex::new();
        index.record_all(["storage", "Cache"], &MarkdownFile::new("docs/x.md"));

        let json: serde_json::Value = serde_json::from_str(&render_json(&index).unwrap()).unwrap();
        assert_eq!(json[0]["term"], "Cache");
        assert_eq!(json[1]["term"], "storage");
        assert_eq!(json[1]["files"][0], "docs/x.md");
    }
}
