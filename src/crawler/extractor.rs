//! Link and match extraction from HTML bodies
//!
//! The extractor hands the engine *raw* href values; all classification and
//! absolutization happens in the resolver. Parsing is html5ever-tolerant,
//! so malformed markup degrades to however many anchors could be read, and
//! a page with no anchors yields an empty list.

use scraper::{Html, Selector};

/// The engine's view of an HTML body: its anchors and its text
pub trait LinkExtractor: Send + Sync {
    /// Returns the raw href attribute values of all anchor elements, in
    /// document order, duplicates included
    fn extract_hrefs(&self, html: &str) -> Vec<String>;

    /// Returns true if the body contains `needle` as a literal,
    /// case-sensitive substring
    fn contains_text(&self, html: &str, needle: &str) -> bool;
}

/// Production extractor built on the scraper crate
pub struct HtmlExtractor;

impl LinkExtractor for HtmlExtractor {
    fn extract_hrefs(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        let mut hrefs = Vec::new();
        if let Ok(selector) = Selector::parse("a[href]") {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    hrefs.push(href.to_string());
                }
            }
        }

        hrefs
    }

    fn contains_text(&self, html: &str, needle: &str) -> bool {
        html.contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_in_document_order() {
        let html = r#"
            <html><body>
                <a href="/first">One</a>
                <p><a href="second">Two</a></p>
                <a href="https://other.com/third">Three</a>
            </body></html>
        "#;

        let hrefs = HtmlExtractor.extract_hrefs(html);
        assert_eq!(hrefs, vec!["/first", "second", "https://other.com/third"]);
    }

    #[test]
    fn test_extract_hrefs_keeps_duplicates() {
        let html = r#"<html><body><a href="/a">1</a><a href="/a">2</a></body></html>"#;
        let hrefs = HtmlExtractor.extract_hrefs(html);
        assert_eq!(hrefs, vec!["/a", "/a"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<html><body><a name="top">Anchor</a><a href="/x">Link</a></body></html>"#;
        let hrefs = HtmlExtractor.extract_hrefs(html);
        assert_eq!(hrefs, vec!["/x"]);
    }

    #[test]
    fn test_no_anchors_yields_empty() {
        let html = r#"<html><body><p>Nothing to follow here</p></body></html>"#;
        assert!(HtmlExtractor.extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let html = "<html><body><a href='/a'>unclosed <div><a href=\"/b\"";
        let hrefs = HtmlExtractor.extract_hrefs(html);
        assert!(hrefs.contains(&"/a".to_string()));
    }

    #[test]
    fn test_contains_text_literal() {
        let html = "<html><body><p>Special discount inside</p></body></html>";
        assert!(HtmlExtractor.contains_text(html, "discount"));
        assert!(!HtmlExtractor.contains_text(html, "rebate"));
    }

    #[test]
    fn test_contains_text_is_case_sensitive() {
        let html = "<html><body>Discount</body></html>";
        assert!(!HtmlExtractor.contains_text(html, "discount"));
        assert!(HtmlExtractor.contains_text(html, "Discount"));
    }

    #[test]
    fn test_contains_text_matches_markup_too() {
        // The match is over the raw body, not the rendered text
        let html = r#"<html><body><div class="promo"></div></body></html>"#;
        assert!(HtmlExtractor.contains_text(html, "promo"));
    }
}
