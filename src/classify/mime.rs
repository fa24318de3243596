use std::collections::BTreeSet;
use std::fmt;

/// Content-type strings that identify a syndication feed.
///
/// Membership is exact and case-sensitive; content-type parameters are not
/// stripped, so `application/rss+xml;charset=utf-8` does not match.
pub const DEFAULT_FEED_TYPES: &[&str] = &[
    "application/rss+xml",
    "application/rdf+xml",
    "application/atom+xml",
    "application/xml",
    "text/xml",
];

/// Coarse classification of a fetched resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseContentType {
    /// Content type is absent or matches no known kind
    Unknown,
    /// An HTML page belonging to the crawled site
    LocalHtmlPage,
    /// Plain or styled text that is not HTML
    Text,
    /// An image resource
    Image,
    /// A syndication feed (RSS, RDF, Atom, or generic XML)
    Feed,
    /// A redirect response recorded while following a chain
    Redirect,
    /// A resource the page needs to render (stylesheet, script)
    Essential,
}

impl BaseContentType {
    /// Returns the stable string form of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::LocalHtmlPage => "local_html_page",
            Self::Text => "text",
            Self::Image => "image",
            Self::Feed => "feed",
            Self::Redirect => "redirect",
            Self::Essential => "essential",
        }
    }

    /// Parses a kind from its stable string form
    ///
    /// Returns None if the string doesn't match any known kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(Self::Unknown),
            "local_html_page" => Some(Self::LocalHtmlPage),
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "feed" => Some(Self::Feed),
            "redirect" => Some(Self::Redirect),
            "essential" => Some(Self::Essential),
            _ => None,
        }
    }

    /// Returns all content kinds
    pub fn all_kinds() -> Vec<Self> {
        vec![
            Self::Unknown,
            Self::LocalHtmlPage,
            Self::Text,
            Self::Image,
            Self::Feed,
            Self::Redirect,
            Self::Essential,
        ]
    }
}

impl fmt::Display for BaseContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies content-type strings into [`MimeType`] values
///
/// Owns the feed-type set so it can be overridden from settings. Immutable
/// after construction and shareable across worker threads by reference.
#[derive(Debug, Clone)]
pub struct MimeClassifier {
    feed_types: BTreeSet<String>,
}

impl Default for MimeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_TYPES.iter().copied())
    }
}

impl MimeClassifier {
    /// Creates a classifier with the given feed-type set
    pub fn new<I, S>(feed_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            feed_types: feed_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Classifies a raw content-type string
    ///
    /// Absent input yields no value, never an error.
    ///
    /// # Example
    ///
    /// ```
    /// use pagelens::classify::{BaseContentType, MimeClassifier};
    ///
    /// let classifier = MimeClassifier::default();
    /// let mime = classifier.classify(Some("text/html")).unwrap();
    /// assert!(mime.is_html());
    /// assert_eq!(mime.base_content_type(), BaseContentType::LocalHtmlPage);
    ///
    /// assert!(classifier.classify(None).is_none());
    /// ```
    pub fn classify(&self, raw: Option<&str>) -> Option<MimeType> {
        let raw = raw?;
        Some(MimeType {
            value: raw.to_string(),
            feed: self.feed_types.contains(raw),
        })
    }
}

/// A content-type string with derived classification predicates
///
/// Immutable once constructed; build one through [`MimeClassifier::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    value: String,
    feed: bool,
}

impl MimeType {
    /// The raw content-type string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True for exactly `text/html`
    pub fn is_html(&self) -> bool {
        self.value == "text/html"
    }

    /// True for any `text/` content type
    pub fn is_text(&self) -> bool {
        self.value.starts_with("text/")
    }

    /// True for any `image/` content type
    pub fn is_image(&self) -> bool {
        self.value.starts_with("image/")
    }

    /// True when the content type is in the classifier's feed-type set
    pub fn is_feed(&self) -> bool {
        self.feed
    }

    /// Resolves the base content kind, first match wins: HTML, then text,
    /// then image, then feed.
    pub fn base_content_type(&self) -> BaseContentType {
        if self.is_html() {
            BaseContentType::LocalHtmlPage
        } else if self.is_text() {
            BaseContentType::Text
        } else if self.is_image() {
            BaseContentType::Image
        } else if self.is_feed() {
            BaseContentType::Feed
        } else {
            BaseContentType::Unknown
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
