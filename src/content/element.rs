use std::collections::BTreeMap;

use scraper::ElementRef;

/// Attribute names this engine reads from matched elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Href,
    Src,
    Name,
    Content,
    Property,
    Type,
}

impl AttributeName {
    /// The attribute name as it appears in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Href => "href",
            Self::Src => "src",
            Self::Name => "name",
            Self::Content => "content",
            Self::Property => "property",
            Self::Type => "type",
        }
    }
}

/// Owned snapshot of a matched element, retained for provenance
///
/// Snapshots carry the tag name, the full attribute map, and the collected
/// text, so the parsed document can be dropped once extraction completes.
/// The source document is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl PageElement {
    pub(crate) fn capture(element: ElementRef<'_>) -> Self {
        let value = element.value();
        let attributes = value
            .attrs()
            .map(|(name, attr_value)| (name.to_string(), attr_value.to_string()))
            .collect();
        let text = element.text().collect::<String>().trim().to_string();

        Self {
            tag: value.name().to_string(),
            attributes,
            text,
        }
    }

    /// Lowercase tag name of the matched element
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Collected, trimmed text content of the element
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Typed accessor for the attributes this engine works with
    pub fn attr(&self, name: AttributeName) -> Option<&str> {
        self.attributes.get(name.as_str()).map(String::as_str)
    }

    /// The complete attribute map, in deterministic order
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}
