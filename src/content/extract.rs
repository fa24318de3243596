//! Single-parse extraction of page references and head metadata
//!
//! The document is parsed once; each category issues its own element-set
//! query over the parsed tree. Every failure path inside this module
//! degrades to "empty" or "skip this item", never an error.

use std::collections::HashSet;

use encoding_rs::UTF_8;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::classify::MimeClassifier;
use crate::content::element::PageElement;
use crate::content::encoding::detect_encoding;
use crate::content::split::find_body_offset;
use crate::content::PageContentInfo;
use crate::settings::ContentSettings;
use crate::url::{is_external, UniqueUrlSet};

pub(crate) fn extract(
    data: Vec<u8>,
    base_url: &Url,
    settings: &ContentSettings,
    mime: &MimeClassifier,
) -> PageContentInfo {
    // Parse as UTF-8 first; if the document declares another encoding,
    // re-decode and re-parse so attribute values and text are faithful.
    let initial_text = String::from_utf8_lossy(&data);
    let mut document = Html::parse_document(&initial_text);
    let encoding = detect_encoding(&document);
    if encoding != UTF_8 {
        let (decoded, _, _) = encoding.decode(&data);
        document = Html::parse_document(&decoded);
    }

    let pre_body_byte_count = find_body_offset(&data, encoding);

    let page_title_elements = collect(&document, "head title", |_| true);

    let meta_description_elements = collect(&document, "head meta[name][content]", |element| {
        element
            .value()
            .attr("name")
            .map_or(false, |name| name.eq_ignore_ascii_case("description"))
    });

    let open_graph_elements = collect(&document, "head meta[property]", |element| {
        element.value().attr("property").map_or(false, |property| {
            property
                .get(..3)
                .map_or(false, |prefix| prefix.eq_ignore_ascii_case("og:"))
        })
    });

    let mut feed_urls = UniqueUrlSet::new();
    let mut feed_link_elements = Vec::new();
    if let Ok(selector) = Selector::parse("head link[type][href]") {
        for element in document.select(&selector) {
            let link_type = match element.value().attr("type") {
                Some(value) => value.to_lowercase(),
                None => continue,
            };
            let href = match element.value().attr("href") {
                Some(value) => value,
                None => continue,
            };
            let mime_type = match mime.classify(Some(&link_type)) {
                Some(value) => value,
                None => continue,
            };
            if !mime_type.is_feed() {
                continue;
            }
            let resolved = match base_url.join(href) {
                Ok(value) => value,
                Err(_) => continue,
            };
            feed_urls.insert_if_new(&resolved);
            feed_link_elements.push(PageElement::capture(element));
        }
    }

    let local_host = base_url.host_str().unwrap_or_default();

    let mut local_page_urls = UniqueUrlSet::new();
    let mut local_link_elements = Vec::new();
    let mut external_page_urls = UniqueUrlSet::new();
    let mut external_link_elements = Vec::new();
    let mut image_urls = HashSet::new();
    let mut image_elements = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let href = match element.value().attr("href") {
                Some(value) => value,
                None => continue,
            };
            let resolved = match base_url.join(href) {
                Ok(value) => value,
                Err(_) => continue,
            };

            // The suffix check runs on the raw href, not the resolved URL
            if settings.separate_links_to_image_types
                && settings
                    .image_link_suffixes
                    .iter()
                    .any(|suffix| href.ends_with(suffix.as_str()))
            {
                image_elements.push(PageElement::capture(element));
                image_urls.insert(resolved);
                continue;
            }

            if is_external(&resolved, local_host) {
                external_link_elements.push(PageElement::capture(element));
                external_page_urls.insert_if_new(&resolved);
            } else {
                local_link_elements.push(PageElement::capture(element));
                local_page_urls.insert_if_new(&resolved);
            }
        }
    }

    if let Ok(selector) = Selector::parse("img[src]") {
        for element in document.select(&selector) {
            let src = match element.value().attr("src") {
                Some(value) => value,
                None => continue,
            };
            let resolved = match base_url.join(src) {
                Ok(value) => value,
                Err(_) => continue,
            };
            image_elements.push(PageElement::capture(element));
            image_urls.insert(resolved);
        }
    }

    let h1_elements = collect(&document, "h1", |_| true);

    // TODO: detect schema.org microdata scopes for rich snippets
    let rich_snippet_elements = Vec::new();

    debug!(
        url = %base_url,
        encoding = encoding.name(),
        titles = page_title_elements.len(),
        feeds = feed_urls.len(),
        local_links = local_page_urls.len(),
        external_links = external_page_urls.len(),
        images = image_urls.len(),
        h1s = h1_elements.len(),
        "extracted page content"
    );

    PageContentInfo {
        data,
        encoding,
        pre_body_byte_count,
        page_title_elements,
        meta_description_elements,
        open_graph_elements,
        feed_urls,
        feed_link_elements,
        local_page_urls,
        local_link_elements,
        external_page_urls,
        external_link_elements,
        image_urls,
        image_elements,
        h1_elements,
        rich_snippet_elements,
    }
}

/// Collects snapshots of every element matching `selector` that passes the
/// filter, in document order
fn collect<F>(document: &Html, selector: &str, keep: F) -> Vec<PageElement>
where
    F: Fn(&ElementRef<'_>) -> bool,
{
    let selector = match Selector::parse(selector) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };
    document
        .select(&selector)
        .filter(|element| keep(element))
        .map(PageElement::capture)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::element::AttributeName;

    fn base() -> Url {
        Url::parse("http://example.com/").unwrap()
    }

    fn extract_default(html: &str) -> PageContentInfo {
        extract(
            html.as_bytes().to_vec(),
            &base(),
            &ContentSettings::default(),
            &MimeClassifier::default(),
        )
    }

    #[test]
    fn test_head_metadata() {
        let info = extract_default(
            r#"<html><head><title>Home</title><meta name="Description" content="x"><meta property="OG:title" content="Home"></head><body></body></html>"#,
        );

        assert_eq!(info.page_title_elements().len(), 1);
        assert_eq!(info.page_title_elements()[0].text(), "Home");

        // Name matching is case-insensitive
        assert_eq!(info.meta_description_elements().len(), 1);
        assert_eq!(
            info.meta_description_elements()[0].attr(AttributeName::Content),
            Some("x")
        );

        // So is the og: prefix, anchored at the start
        assert_eq!(info.open_graph_elements().len(), 1);
    }

    #[test]
    fn test_meta_without_content_is_not_a_description() {
        let info = extract_default(
            r#"<html><head><meta name="description"></head><body></body></html>"#,
        );
        assert!(info.meta_description_elements().is_empty());
    }

    #[test]
    fn test_og_prefix_must_be_anchored() {
        let info = extract_default(
            r#"<html><head><meta property="fb:og:title" content="x"></head><body></body></html>"#,
        );
        assert!(info.open_graph_elements().is_empty());
    }

    #[test]
    fn test_pre_body_byte_count_matches_literal_offset() {
        let html = r#"<html><head><title>Home</title></head><body>hi</body></html>"#;
        let expected = html.find("<body").unwrap();
        let info = extract_default(html);
        assert_eq!(info.pre_body_byte_count(), Some(expected));

        assert_eq!(info.head_data().unwrap().len(), expected);
        assert_eq!(
            info.head_data().unwrap().len() + info.body_data().unwrap().len(),
            html.len()
        );
        assert!(info.body_string_content().unwrap().starts_with("<body"));
    }

    #[test]
    fn test_local_and_external_links() {
        let info = extract_default(
            r#"<html><body>
            <a href="/about">About</a>
            <a href="http://other.com/x">Other</a>
            <a href="http://EXAMPLE.COM/contact">Contact</a>
            </body></html>"#,
        );

        let local: Vec<&str> = info.local_page_urls().iter().map(Url::as_str).collect();
        assert_eq!(
            local,
            vec!["http://example.com/about", "http://example.com/contact"]
        );
        assert_eq!(info.local_link_elements().len(), 2);

        let external: Vec<&str> = info.external_page_urls().iter().map(Url::as_str).collect();
        assert_eq!(external, vec!["http://other.com/x"]);
        assert_eq!(info.external_link_elements().len(), 1);
    }

    #[test]
    fn test_duplicate_links_keep_one_url_but_all_elements() {
        let info = extract_default(
            r#"<html><body><a href="/about">A</a><a href="/about">B</a></body></html>"#,
        );
        assert_eq!(info.local_page_urls().len(), 1);
        assert_eq!(info.local_link_elements().len(), 2);
    }

    #[test]
    fn test_unresolvable_href_is_skipped() {
        let info = extract_default(
            r#"<html><body><a href="http://[bad">Broken</a><a href="/ok">Ok</a></body></html>"#,
        );
        assert_eq!(info.local_page_urls().len(), 1);
        assert!(info.external_page_urls().is_empty());
    }

    #[test]
    fn test_image_typed_anchor_routes_to_images() {
        let info = extract_default(
            r#"<html><body><a href="/photo.png">Photo</a></body></html>"#,
        );

        assert!(info.local_page_urls().is_empty());
        assert!(info.external_page_urls().is_empty());
        assert_eq!(info.image_elements().len(), 1);
        assert_eq!(info.image_elements()[0].tag(), "a");
        assert!(info.contains_image_url(&Url::parse("http://example.com/photo.png").unwrap()));
    }

    #[test]
    fn test_image_routing_disabled_keeps_anchor_local() {
        let settings = ContentSettings {
            separate_links_to_image_types: false,
            ..ContentSettings::default()
        };
        let info = extract(
            br#"<html><body><a href="/photo.png">Photo</a></body></html>"#.to_vec(),
            &base(),
            &settings,
            &MimeClassifier::default(),
        );

        assert_eq!(info.local_page_urls().len(), 1);
        assert!(info.image_elements().is_empty());
        assert!(info.image_urls().is_empty());
    }

    #[test]
    fn test_img_elements_are_collected() {
        let info = extract_default(
            r#"<html><body><img src="/a.png"><img src="http://cdn.other.com/b.png"></body></html>"#,
        );

        // Images are never classified local/external
        assert_eq!(info.image_elements().len(), 2);
        assert_eq!(info.image_urls().len(), 2);
        assert!(info.contains_image_url(&Url::parse("http://cdn.other.com/b.png").unwrap()));
    }

    #[test]
    fn test_feed_links() {
        let info = extract_default(
            r#"<html><head>
            <link type="application/RSS+xml" href="/feed.xml">
            <link type="application/rss+xml" href="/feed.xml">
            <link type="text/css" href="/style.css">
            <link type="application/atom+xml">
            </head><body></body></html>"#,
        );

        // The type attribute is lowercased before classification; the same
        // feed URL twice stays a single entry; non-feeds and links without
        // an href are ignored
        assert_eq!(info.feed_urls().len(), 1);
        assert_eq!(info.feed_urls()[0].as_str(), "http://example.com/feed.xml");
        assert_eq!(info.feed_link_elements().len(), 2);
    }

    #[test]
    fn test_h1_elements_are_unfiltered() {
        let info = extract_default(
            "<html><body><h1>First</h1><p>text</p><h1>Second</h1></body></html>",
        );
        assert_eq!(info.h1_elements().len(), 2);
        assert_eq!(info.h1_elements()[1].text(), "Second");
    }

    #[test]
    fn test_rich_snippets_are_reserved() {
        let info = extract_default(
            r#"<html><body><div itemscope itemtype="https://schema.org/Person"></div></body></html>"#,
        );
        assert!(info.rich_snippet_elements().is_empty());
    }

    #[test]
    fn test_garbage_input_degrades_to_empty() {
        let info = extract_default("\u{0}\u{1}not html at all");

        assert!(info.page_title_elements().is_empty());
        assert!(info.meta_description_elements().is_empty());
        assert!(info.open_graph_elements().is_empty());
        assert!(info.feed_urls().is_empty());
        assert!(info.local_page_urls().is_empty());
        assert!(info.external_page_urls().is_empty());
        assert!(info.image_urls().is_empty());
        assert!(info.h1_elements().is_empty());
        assert_eq!(info.pre_body_byte_count(), None);
        assert_eq!(info.head_data(), None);
        assert_eq!(info.body_data(), None);
    }

    #[test]
    fn test_declared_encoding_is_resolved() {
        let mut html: Vec<u8> =
            br#"<html><head><meta charset="windows-1252"><title>caf"#.to_vec();
        html.push(0xE9);
        html.extend_from_slice(b"</title></head><body></body></html>");

        let info = extract(
            html,
            &base(),
            &ContentSettings::default(),
            &MimeClassifier::default(),
        );

        assert_eq!(info.encoding_name(), "windows-1252");
        assert_eq!(info.page_title_elements()[0].text(), "caf\u{e9}");
        assert!(info.pre_body_byte_count().is_some());
        assert!(info.string_content().unwrap().contains("caf\u{e9}"));
    }
}
