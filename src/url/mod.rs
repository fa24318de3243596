//! URL handling for page analysis
//!
//! This module provides the conformed-URL form used for deduplication, the
//! insertion-ordered unique set built on it, the local/external host test,
//! and file-download detection.

mod unique;

// Re-export main types
pub use unique::UniqueUrlSet;

use url::Url;

/// Produces the conformed form of a URL used for dedup checks
///
/// Conformance is parser canonicalization (lowercase scheme and host,
/// canonical percent-encoding) with the fragment removed, so `/page#a` and
/// `/page#b` conform to the same URL.
pub fn conform_url(url: &Url) -> Url {
    let mut conformed = url.clone();
    conformed.set_fragment(None);
    conformed
}

/// Tests whether a URL points off the host the page was fetched from
///
/// Hosts compare case-insensitively. A URL with no host of its own stays
/// local.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pagelens::url::is_external;
///
/// let link = Url::parse("http://other.com/x").unwrap();
/// assert!(is_external(&link, "example.com"));
///
/// let link = Url::parse("http://EXAMPLE.com/about").unwrap();
/// assert!(!is_external(&link, "example.com"));
/// ```
pub fn is_external(url: &Url, local_host: &str) -> bool {
    match url.host_str() {
        Some(host) => !host.eq_ignore_ascii_case(local_host),
        None => false,
    }
}

/// Tests whether a linked URL looks like a direct file download
///
/// The last path-segment extension is lowercased and checked against the
/// configured extension set.
pub fn looks_like_file_download(url: &Url, extensions: &[String]) -> bool {
    let path = url.path();
    let extension = match path.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => ext.to_ascii_lowercase(),
        _ => return false,
    };
    extensions.iter().any(|candidate| *candidate == extension)
}
