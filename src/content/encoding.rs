use encoding_rs::{Encoding, UTF_8};
use scraper::{Html, Selector};

/// Resolves the document's text encoding with a best-effort fallback
///
/// The charset declared inside the document wins when `encoding_rs` knows
/// its label; anything else falls back to UTF-8.
pub fn detect_encoding(document: &Html) -> &'static Encoding {
    declared_charset(document)
        .and_then(|label| Encoding::for_label_no_replacement(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Reads the charset declared in a `meta` element, if any
fn declared_charset(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[charset]") {
        if let Some(charset) = document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("charset"))
        {
            return Some(charset.trim().to_string());
        }
    }

    if let Ok(selector) = Selector::parse("meta[http-equiv][content]") {
        for element in document.select(&selector) {
            let http_equiv = element.value().attr("http-equiv").unwrap_or_default();
            if !http_equiv.eq_ignore_ascii_case("content-type") {
                continue;
            }
            if let Some(content) = element.value().attr("content") {
                for part in content.split(';') {
                    if let Some(label) = part.trim().strip_prefix("charset=") {
                        return Some(label.trim_matches('"').to_string());
                    }
                }
            }
        }
    }

    None
}

/// Decodes a byte slice with the given encoding
///
/// Yields no value when the bytes do not form valid text in that encoding;
/// nothing is replaced or dropped silently.
pub fn decode_exact(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
