use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static MAIN_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static MAIN_ID_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#main").unwrap());
static BODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static STRUCTURAL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, p, li").unwrap());

/// One structural element's tag name and visible text.
#[derive(Debug, Clone)]
pub struct PageElement {
    pub tag: String,
    pub text: String,
}

/// Locate the main content region: `<main>`, then `#main`, then `<body>`,
/// then the document root.
pub fn content_root(doc: &Html) -> ElementRef<'_> {
    doc.select(&MAIN_SEL)
        .next()
        .or_else(|| doc.select(&MAIN_ID_SEL).next())
        .or_else(|| doc.select(&BODY_SEL).next())
        .unwrap_or_else(|| doc.root_element())
}

/// Flatten a subtree to text, one text node per line, so headings and
/// paragraphs break cleanly for line-oriented patterns.
pub fn flatten_text(root: ElementRef<'_>) -> String {
    root.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Enumerate heading, paragraph, and list-item descendants in document order,
/// each with its visible text and a space between adjacent text nodes.
pub fn structural_elements(root: ElementRef<'_>) -> Vec<PageElement> {
    root.select(&STRUCTURAL_SEL)
        .map(|el| PageElement {
            tag: el.value().name().to_string(),
            text: el.text().collect::<Vec<_>>().join(" "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_main_over_body() {
        let doc = Html::parse_document(
            "<body><nav>skip</nav><main><p>kept</p></main></body>",
        );
        let root = content_root(&doc);
        assert_eq!(root.value().name(), "main");
        assert!(flatten_text(root).contains("kept"));
        assert!(!flatten_text(root).contains("skip"));
    }

    #[test]
    fn falls_back_to_main_id_then_body() {
        let doc = Html::parse_document("<body><div id=\"main\"><p>kept</p></div></body>");
        assert_eq!(content_root(&doc).value().name(), "div");

        let doc = Html::parse_document("<body><p>whole body</p></body>");
        assert_eq!(content_root(&doc).value().name(), "body");
    }

    #[test]
    fn flatten_splits_text_nodes_onto_lines() {
        let doc = Html::parse_document("<main><h2>Heading</h2><p>First.</p><p>Second.</p></main>");
        let text = flatten_text(content_root(&doc));
        assert_eq!(text, "Heading\nFirst.\nSecond.");
    }

    #[test]
    fn structural_elements_in_document_order() {
        let doc = Html::parse_document(
            "<main><h1>Title</h1><p>Intro</p><ul><li>One</li><li>Two</li></ul><p>Outro</p></main>",
        );
        let elements = structural_elements(content_root(&doc));
        let tags: Vec<&str> = elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["h1", "p", "li", "li", "p"]);
        assert_eq!(elements[0].text, "Title");
        assert_eq!(elements[4].text, "Outro");
    }

    #[test]
    fn element_text_separates_inline_nodes() {
        let doc = Html::parse_document("<main><p>alt<b>text</b>rules</p></main>");
        let elements = structural_elements(content_root(&doc));
        assert_eq!(elements[0].text, "alt text rules");
    }

    #[test]
    fn fixture_has_structural_content() {
        let html = std::fs::read_to_string("tests/fixtures/ict.html").unwrap();
        let doc = Html::parse_document(&html);
        let root = content_root(&doc);
        assert_eq!(root.value().name(), "main");
        let elements = structural_elements(root);
        assert!(elements.iter().any(|e| e.tag == "h1"));
        assert!(elements.iter().any(|e| e.tag == "li"));
    }
}
