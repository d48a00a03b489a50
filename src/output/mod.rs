//! Report generation for crawl results
//!
//! Prints a human-readable report to stdout and can render the same
//! information as a markdown summary written to a file.

use crate::state::CrawlResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prints a crawl result to stdout
///
/// # Arguments
///
/// * `result` - The finished crawl
/// * `search_text` - The fragment that was searched for
pub fn print_report(result: &CrawlResult, search_text: &str) {
    println!("=== sitegrep results ===\n");

    if result.has_matches() {
        println!("Found {:?} on {} page(s):", search_text, result.matched.len());
        for url in &result.matched {
            println!("  - {}", url);
        }
    } else {
        println!("No pages containing {:?} were found.", search_text);
        println!("Try raising the page limit.");
    }

    println!();
    println!("Scanned {} page(s):", result.scanned.len());
    for url in &result.scanned {
        println!("  - {}", url);
    }
}

/// Renders a crawl result as a markdown summary
pub fn render_markdown(result: &CrawlResult, search_text: &str) -> String {
    let mut md = String::new();

    md.push_str("# sitegrep summary\n\n");
    md.push_str(&format!("- **Search text**: `{}`\n", search_text));
    md.push_str(&format!("- **Pages scanned**: {}\n", result.scanned.len()));
    md.push_str(&format!("- **Pages matched**: {}\n\n", result.matched.len()));

    md.push_str("## Matched pages\n\n");
    if result.has_matches() {
        for url in &result.matched {
            md.push_str(&format!("- {}\n", url));
        }
    } else {
        md.push_str("_No matches._\n");
    }
    md.push('\n');

    md.push_str("## Scanned pages\n\n");
    for url in &result.scanned {
        md.push_str(&format!("- {}\n", url));
    }

    md
}

/// Writes the markdown summary to a file
///
/// # Arguments
///
/// * `result` - The finished crawl
/// * `search_text` - The fragment that was searched for
/// * `path` - Where to write the summary
pub fn write_markdown_summary(
    result: &CrawlResult,
    search_text: &str,
    path: &Path,
) -> std::io::Result<()> {
    let markdown = render_markdown(result, search_text);

    let mut file = File::create(path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CrawlResult {
        CrawlResult {
            matched: vec!["http://example.com/about".to_string()],
            scanned: vec![
                "http://example.com/".to_string(),
                "http://example.com/about".to_string(),
            ],
        }
    }

    #[test]
    fn test_render_markdown_lists_pages() {
        let md = render_markdown(&sample_result(), "discount");

        assert!(md.starts_with("# sitegrep summary"));
        assert!(md.contains("- **Pages scanned**: 2"));
        assert!(md.contains("- **Pages matched**: 1"));
        assert!(md.contains("- http://example.com/about"));
        assert!(md.contains("- http://example.com/\n"));
    }

    #[test]
    fn test_render_markdown_without_matches() {
        let result = CrawlResult {
            matched: vec![],
            scanned: vec!["http://example.com/".to_string()],
        };

        let md = render_markdown(&result, "discount");
        assert!(md.contains("_No matches._"));
    }

    #[test]
    fn test_write_markdown_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");

        write_markdown_summary(&sample_result(), "discount", &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("# sitegrep summary"));
    }
}
