//! Page content analysis
//!
//! Parses a fetched HTML document once and extracts every outbound
//! reference with stable ordering: feed links, local and external page
//! links, images, plus the head metadata an SEO report reads (title,
//! meta description, Open Graph, H1s). Extraction never fails; malformed
//! input degrades to an empty record.

mod element;
mod encoding;
mod extract;
mod split;

// Re-export main types
pub use element::{AttributeName, PageElement};
pub use encoding::detect_encoding;
pub use split::find_body_offset;

use std::collections::HashSet;

use encoding_rs::Encoding;
use url::Url;

use crate::classify::MimeClassifier;
use crate::settings::ContentSettings;
use crate::url::UniqueUrlSet;

/// Structured extraction result for one HTML document
///
/// Owns its byte buffer, element snapshots, and URL collections; nothing is
/// shared across documents. Each "elements" list and its corresponding URL
/// collection come from the same traversal pass: the list holds one entry
/// per qualifying match, the collection the deduplicated URLs in the same
/// relative order.
#[derive(Debug, Clone)]
pub struct PageContentInfo {
    data: Vec<u8>,
    encoding: &'static Encoding,
    pre_body_byte_count: Option<usize>,
    page_title_elements: Vec<PageElement>,
    meta_description_elements: Vec<PageElement>,
    open_graph_elements: Vec<PageElement>,
    feed_urls: UniqueUrlSet,
    feed_link_elements: Vec<PageElement>,
    local_page_urls: UniqueUrlSet,
    local_link_elements: Vec<PageElement>,
    external_page_urls: UniqueUrlSet,
    external_link_elements: Vec<PageElement>,
    image_urls: HashSet<Url>,
    image_elements: Vec<PageElement>,
    h1_elements: Vec<PageElement>,
    rich_snippet_elements: Vec<PageElement>,
}

impl PageContentInfo {
    /// Parses and analyzes one HTML document
    ///
    /// Relative references resolve against `base_url`. Never fails: an
    /// unparseable document yields a record with every collection empty,
    /// and an unresolvable or unclassifiable reference is skipped.
    pub fn extract(
        data: Vec<u8>,
        base_url: &Url,
        settings: &ContentSettings,
        mime: &MimeClassifier,
    ) -> Self {
        extract::extract(data, base_url, settings, mime)
    }

    /// The raw document bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Name of the resolved text encoding
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Byte offset of the body boundary, when one was found
    pub fn pre_body_byte_count(&self) -> Option<usize> {
        self.pre_body_byte_count
    }

    /// `title` elements under `head`
    pub fn page_title_elements(&self) -> &[PageElement] {
        &self.page_title_elements
    }

    /// `meta` description elements under `head`
    pub fn meta_description_elements(&self) -> &[PageElement] {
        &self.meta_description_elements
    }

    /// Open Graph `meta` elements under `head`
    pub fn open_graph_elements(&self) -> &[PageElement] {
        &self.open_graph_elements
    }

    /// Deduplicated feed URLs in discovery order
    pub fn feed_urls(&self) -> &[Url] {
        self.feed_urls.as_slice()
    }

    /// `link` elements that declared a feed
    pub fn feed_link_elements(&self) -> &[PageElement] {
        &self.feed_link_elements
    }

    /// Deduplicated same-host page URLs in discovery order
    pub fn local_page_urls(&self) -> &[Url] {
        self.local_page_urls.as_slice()
    }

    /// Tests whether a URL was discovered as a local page link
    pub fn contains_local_page_url(&self, url: &Url) -> bool {
        self.local_page_urls.contains(url)
    }

    /// Anchor elements that linked to a same-host page
    pub fn local_link_elements(&self) -> &[PageElement] {
        &self.local_link_elements
    }

    /// Deduplicated off-host page URLs in discovery order
    pub fn external_page_urls(&self) -> &[Url] {
        self.external_page_urls.as_slice()
    }

    /// Anchor elements that linked off-host
    pub fn external_link_elements(&self) -> &[PageElement] {
        &self.external_link_elements
    }

    /// Discovered image URLs; ordering is irrelevant for images
    pub fn image_urls(&self) -> &HashSet<Url> {
        &self.image_urls
    }

    /// Tests whether a URL was discovered as an image
    pub fn contains_image_url(&self, url: &Url) -> bool {
        self.image_urls.contains(url)
    }

    /// `img` elements, plus anchors routed to images by settings
    pub fn image_elements(&self) -> &[PageElement] {
        &self.image_elements
    }

    /// All `h1` elements in the document
    pub fn h1_elements(&self) -> &[PageElement] {
        &self.h1_elements
    }

    /// Reserved: structured-data detection produces no elements yet
    pub fn rich_snippet_elements(&self) -> &[PageElement] {
        &self.rich_snippet_elements
    }

    /// The bytes before the body boundary
    pub fn head_data(&self) -> Option<&[u8]> {
        self.pre_body_byte_count.map(|count| &self.data[..count])
    }

    /// The bytes from the body boundary to the end of the document
    pub fn body_data(&self) -> Option<&[u8]> {
        self.pre_body_byte_count.map(|count| &self.data[count..])
    }

    /// The whole document decoded with the resolved encoding
    pub fn string_content(&self) -> Option<String> {
        encoding::decode_exact(&self.data, self.encoding)
    }

    /// The head slice decoded with the resolved encoding
    pub fn head_string_content(&self) -> Option<String> {
        self.head_data()
            .and_then(|data| encoding::decode_exact(data, self.encoding))
    }

    /// The body slice decoded with the resolved encoding
    pub fn body_string_content(&self) -> Option<String> {
        self.body_data()
            .and_then(|data| encoding::decode_exact(data, self.encoding))
    }
}
