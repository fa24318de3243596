use std::collections::HashMap;

use url::Url;

use crate::url::conform_url;

/// Insertion-ordered, deduplicating collection of conformed URLs
///
/// Membership and ordered enumeration always agree: a URL conforming to one
/// already present is never re-appended. Created empty per document parse,
/// populated during traversal, then read-only. Not internally synchronized.
#[derive(Debug, Clone, Default)]
pub struct UniqueUrlSet {
    ordered: Vec<Url>,
    positions: HashMap<String, usize>,
}

impl UniqueUrlSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the conformed form of `url` if it has not been seen
    ///
    /// Returns the conformed URL actually stored, whether newly inserted or
    /// already present. Appends to the ordered sequence only on first
    /// insertion.
    pub fn insert_if_new(&mut self, url: &Url) -> &Url {
        let conformed = conform_url(url);
        match self.positions.get(conformed.as_str()).copied() {
            Some(position) => &self.ordered[position],
            None => {
                self.positions
                    .insert(conformed.as_str().to_string(), self.ordered.len());
                self.ordered.push(conformed);
                &self.ordered[self.ordered.len() - 1]
            }
        }
    }

    /// Tests membership using the same conformance as insertion
    pub fn contains(&self, url: &Url) -> bool {
        self.positions.contains_key(conform_url(url).as_str())
    }

    /// The stored URLs in insertion order
    pub fn as_slice(&self) -> &[Url] {
        &self.ordered
    }

    /// Iterates the stored URLs in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Url> {
        self.ordered.iter()
    }

    /// Number of distinct URLs stored
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<'a> IntoIterator for &'a UniqueUrlSet {
    type Item = &'a Url;
    type IntoIter = std::slice::Iter<'a, Url>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_insert_preserves_call_order() {
        let mut set = UniqueUrlSet::new();
        set.insert_if_new(&url("http://example.com/b"));
        set.insert_if_new(&url("http://example.com/a"));
        set.insert_if_new(&url("http://example.com/c"));

        let ordered: Vec<&str> = set.iter().map(Url::as_str).collect();
        assert_eq!(
            ordered,
            vec![
                "http://example.com/b",
                "http://example.com/a",
                "http://example.com/c"
            ]
        );
    }

    #[test]
    fn test_duplicate_insert_does_not_grow() {
        let mut set = UniqueUrlSet::new();
        set.insert_if_new(&url("http://example.com/page"));
        assert_eq!(set.len(), 1);

        set.insert_if_new(&url("http://example.com/page"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains_after_insert() {
        let mut set = UniqueUrlSet::new();
        let page = url("http://example.com/page");
        assert!(!set.contains(&page));

        set.insert_if_new(&page);
        assert!(set.contains(&page));
    }

    #[test]
    fn test_fragments_conform_to_one_entry() {
        let mut set = UniqueUrlSet::new();
        set.insert_if_new(&url("http://example.com/page#a"));
        set.insert_if_new(&url("http://example.com/page#b"));

        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].as_str(), "http://example.com/page");
        assert!(set.contains(&url("http://example.com/page")));
    }

    #[test]
    fn test_insert_returns_stored_conformed_url() {
        let mut set = UniqueUrlSet::new();
        let first = set.insert_if_new(&url("http://example.com/page#a")).clone();
        assert_eq!(first.as_str(), "http://example.com/page");

        let second = set.insert_if_new(&url("http://example.com/page#b"));
        assert_eq!(second.as_str(), "http://example.com/page");
    }

    #[test]
    fn test_host_case_conforms() {
        let mut set = UniqueUrlSet::new();
        set.insert_if_new(&url("http://EXAMPLE.com/page"));
        assert!(set.contains(&url("http://example.com/page")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_set() {
        let set = UniqueUrlSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.as_slice().is_empty());
    }
}
