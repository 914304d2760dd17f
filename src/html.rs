// src/html.rs
use crate::utils;
use scraper::{Html, Selector};
use url::Url;

/// Extract every crawlable hyperlink from a page, resolved against the
/// page's own URL. Duplicates are kept; the crawler dedupes on enqueue.
pub fn extract_links(base: &Url, body: &str) -> Vec<Url> {
    let document = Html::parse_document(body);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| utils::resolve_link(base, href))
        .collect()
}

/// Contents of every `<meta>` tag whose name mentions "generator",
/// matched case-insensitively. Empty contents are dropped.
pub fn generator_meta_contents(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse("meta[name]").unwrap();

    document
        .select(&selector)
        .filter(|element| {
            element
                .value()
                .attr("name")
                .map(|name| name.to_ascii_lowercase().contains("generator"))
                .unwrap_or(false)
        })
        .filter_map(|element| element.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.to_string())
        .collect()
}

/// Content of the first `<meta name="generator">` tag, if any.
pub fn generator_meta_exact(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(r#"meta[name="generator"]"#).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_resolves_relative() {
        let base = Url::parse("https://example.com/page/").unwrap();
        let html = r#"
            <a href="/docs">Docs</a>
            <a href="about">About</a>
            <a href="https://example.com/contact">Contact</a>
        "#;
        let links = extract_links(&base, html);
        let strings: Vec<&str> = links.iter().map(|u| u.as_str()).collect();
        assert_eq!(
            strings,
            vec![
                "https://example.com/docs",
                "https://example.com/page/about",
                "https://example.com/contact",
            ]
        );
    }

    #[test]
    fn test_extract_links_skips_uncrawlable() {
        let base = Url::parse("https://example.com/").unwrap();
        let html = r#"
            <a href="mailto:admin@example.com">Email</a>
            <a href="javascript:void(0)">Click</a>
            <a href="/real">Real</a>
        "#;
        let links = extract_links(&base, html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].as_str(), "https://example.com/real");
    }

    #[test]
    fn test_extract_links_keeps_offsite() {
        let base = Url::parse("https://example.com/").unwrap();
        let html = r#"<a href="https://other.com/page">Other</a>"#;
        let links = extract_links(&base, html);
        assert_eq!(links[0].as_str(), "https://other.com/page");
    }

    #[test]
    fn test_generator_meta_contents_case_insensitive() {
        let html = r#"
            <html><head>
            <meta name="Generator" content="WordPress 6.1.1">
            <meta name="site-generator" content="Hugo 0.110">
            <meta name="description" content="A site">
            <meta name="generator" content="">
            </head></html>
        "#;
        let contents = generator_meta_contents(html);
        assert_eq!(contents, vec!["WordPress 6.1.1", "Hugo 0.110"]);
    }

    #[test]
    fn test_generator_meta_exact() {
        let html = r#"<meta name="generator" content="Drupal 9">"#;
        assert_eq!(generator_meta_exact(html), Some("Drupal 9".to_string()));

        let html = r#"<meta name="description" content="no generator here">"#;
        assert_eq!(generator_meta_exact(html), None);

        let html = r#"<meta name="generator" content="">"#;
        assert_eq!(generator_meta_exact(html), None);
    }
}
