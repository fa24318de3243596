use encoding_rs::Encoding;

/// The literal needle that marks the start of the document body
const BODY_TAG: &str = "<body";

/// Finds the byte offset where the document body begins
///
/// The scan is a literal byte search over the raw bytes, not the parsed
/// document, for `<body` encoded with the document's encoding. Matching is
/// case-sensitive and does not validate tag boundaries. Returns no value
/// when the needle is absent or the encoding cannot render it without loss.
///
/// The returned offset partitions the document into a head slice
/// `[0, offset)` and a body slice `[offset, end)`.
pub fn find_body_offset(bytes: &[u8], encoding: &'static Encoding) -> Option<usize> {
    let (needle, _, had_errors) = encoding.encode(BODY_TAG);
    if had_errors || needle.is_empty() {
        return None;
    }
    find_subsequence(bytes, &needle)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};

    #[test]
    fn test_offset_is_the_literal_byte_position() {
        let html = b"<html><head><title>Home</title></head><body>hi</body></html>";
        let expected = html
            .windows(5)
            .position(|window| window == b"<body")
            .unwrap();
        assert_eq!(find_body_offset(html, UTF_8), Some(expected));
    }

    #[test]
    fn test_missing_body_yields_none() {
        assert_eq!(find_body_offset(b"<html><head></head></html>", UTF_8), None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(find_body_offset(b"<html><BODY></BODY></html>", UTF_8), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let html = b"<body><body>";
        assert_eq!(find_body_offset(html, UTF_8), Some(0));
    }

    #[test]
    fn test_windows_1252_document() {
        // ASCII needle bytes are identical in windows-1252
        let mut html: Vec<u8> = b"<html><head><title>caf".to_vec();
        html.push(0xE9); // e-acute in windows-1252
        html.extend_from_slice(b"</title></head><body></body></html>");

        let expected = html
            .windows(5)
            .position(|window| window == b"<body")
            .unwrap();
        assert_eq!(find_body_offset(&html, WINDOWS_1252), Some(expected));
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(find_body_offset(b"", UTF_8), None);
    }
}
