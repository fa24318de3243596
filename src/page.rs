//! Top-level per-fetch result assembly
//!
//! Combines the HTTP metadata supplied by the fetch layer (final URL,
//! status code, content-type string, body bytes) with optional content
//! analysis into one [`PageInfo`] record. No network I/O happens here.

use tracing::debug;
use url::Url;

use crate::classify::{BaseContentType, MimeClassifier, MimeType, ResponseClass};
use crate::content::PageContentInfo;
use crate::settings::AnalysisSettings;

/// Top-level result for one fetched page
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// The URL the fetch was issued for
    pub requested_url: Url,
    /// The URL that answered, when redirects were followed
    pub final_url: Option<Url>,
    /// HTTP status code of the response
    pub status_code: i32,
    /// Coarse classification of the resource
    pub base_content_type: BaseContentType,
    /// The response's content type, when one was supplied
    pub mime_type: Option<MimeType>,
    /// Length of the response body, when one was supplied
    pub byte_count: Option<usize>,
    /// Content analysis, present only for parseable HTML responses
    pub content_info: Option<PageContentInfo>,
}

impl PageInfo {
    /// Response-type bucket for this page's status code
    pub fn response_class(&self) -> ResponseClass {
        ResponseClass::from_status(self.status_code)
    }
}

/// One hop of a redirect chain, as reported by the fetch layer
#[derive(Debug, Clone)]
pub struct RequestRedirectionInfo {
    /// The request that was redirected
    pub source_url: Url,
    /// The request the redirect points to
    pub next_url: Url,
    /// Status code of the redirect response
    pub status_code: i32,
    /// Content type of the redirect response, when supplied
    pub mime_type: Option<MimeType>,
}

/// Assembles [`PageInfo`] records from fetched page data
///
/// Owns the analysis settings and the MIME classifier built from them.
/// Immutable after construction; share by reference across worker threads,
/// one `analyze` call per fetched page.
#[derive(Debug, Clone)]
pub struct PageAnalyzer {
    settings: AnalysisSettings,
    mime: MimeClassifier,
}

impl Default for PageAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisSettings::default())
    }
}

impl PageAnalyzer {
    /// Creates an analyzer from the given settings
    pub fn new(settings: AnalysisSettings) -> Self {
        let mime = settings.mime_classifier();
        Self { settings, mime }
    }

    /// The settings this analyzer was built from
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Combines HTTP metadata with optional content analysis
    ///
    /// Content is parsed only when the content type classifies as a local
    /// HTML page; relative references then resolve against the final URL
    /// when present, else the requested URL. A missing content type yields
    /// `BaseContentType::Unknown` and no content analysis.
    pub fn analyze(
        &self,
        requested_url: Url,
        final_url: Option<Url>,
        status_code: i32,
        content_type: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> PageInfo {
        let mime_type = self.mime.classify(content_type);
        let base_content_type = mime_type
            .as_ref()
            .map(MimeType::base_content_type)
            .unwrap_or(BaseContentType::Unknown);
        let byte_count = body.as_ref().map(Vec::len);

        let content_info = match (base_content_type, body) {
            (BaseContentType::LocalHtmlPage, Some(bytes)) => {
                let resolution_base = final_url.as_ref().unwrap_or(&requested_url);
                Some(PageContentInfo::extract(
                    bytes,
                    resolution_base,
                    &self.settings.content,
                    &self.mime,
                ))
            }
            _ => None,
        };

        debug!(
            url = %requested_url,
            status = status_code,
            kind = %base_content_type,
            bytes = byte_count,
            analyzed = content_info.is_some(),
            "assembled page info"
        );

        PageInfo {
            requested_url,
            final_url,
            status_code,
            base_content_type,
            mime_type,
            byte_count,
            content_info,
        }
    }
}
