//! Keyword index rendering.
//!
//! The index document is the template, a rule, the A-Z navigation line, a
//! second rule, and then one `###` section per term listing the notes that
//! declare it.

use glossa_core::KeywordIndex;

use crate::readme::link_line;

/// Render the keyword index document.
pub fn render_index(template: &str, index: &KeywordIndex) -> String {
    let mut out = String::from(template);

    out.push_str("\n---\n\n");
    out.push_str(&index.anchors().render_navigation());
    out.push_str("\n\n---\n\n");

    for entry in index.sorted() {
        log::debug!(" + Adding entries for {}", entry.term);
        out.push_str("### ");
        out.push_str(entry.term);
        out.push('\n');
        for file in entry.files {
            out.push_str(&link_line(&file.index_label(), &file.link_target()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::MarkdownFile;

    #[test]
    fn test_render_empty_index() {
        let out = render_index("# Index\n", &KeywordIndex::new());
        assert_eq!(
            out,
            "# Index\n\n---\n\nA B C D E F G H I J K L M N O P Q R S T U V W X Y Z \n\n---\n\n"
        );
    }

    #[test]
    fn test_render_sections_in_sorted_order() {
        let x = MarkdownFile::new("docs/x.md");
        let tcp = MarkdownFile::new("docs/net/tcp.md");
        let mut index = KeywordIndex::new();
        index.record_all(["storage", "networking"], &x);
        index.record("networking", &tcp);

        let out = render_index("# Index\n", &index);
        let body = out.split("\n\n---\n\n").last().unwrap();
        assert_eq!(
            body,
            "### networking\n\
             * [docs - x](./docs/x.md)\n\
             * [docs - net - tcp](./docs/net/tcp.md)\n\
             ### storage\n\
             * [docs - x](./docs/x.md)\n"
        );
    }

    #[test]
    fn test_render_navigation_links() {
        let f = MarkdownFile::new("docs/x.md");
        let mut index = KeywordIndex::new();
        index.record_all(["consensus", "Crdt", "Cache", "Load Balancing"], &f);

        let out = render_index("", &index);
        assert!(out.contains("B [C](#cache) D"));
        assert!(out.contains("K [L](#load-balancing) M"));
        assert!(out.contains("### Load Balancing\n"));
    }

    #[test]
    fn test_render_case_variants_adjacent() {
        let f = MarkdownFile::new("docs/x.md");
        let mut index = KeywordIndex::new();
        index.record_all(["cache", "zebra", "Cache", "apple"], &f);

        let out = render_index("", &index);
        let headings: Vec<&str> = out.lines().filter(|l| l.starts_with("### ")).collect();
        assert_eq!(
            headings,
            vec!["### apple", "### Cache", "### cache", "### zebra"]
        );
    }
}
