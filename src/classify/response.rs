use std::fmt;

/// Bucketed classification of an HTTP status code by its hundreds digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClass {
    /// Anything outside 200-599, including 1xx and out-of-range codes
    Unknown,
    /// 2xx
    Successful,
    /// 3xx
    Redirects,
    /// 4xx
    RequestErrors,
    /// 5xx
    ResponseErrors,
}

impl ResponseClass {
    /// Buckets a status code. Total over all integers.
    pub fn from_status(status_code: i32) -> Self {
        match status_code {
            200..=299 => Self::Successful,
            300..=399 => Self::Redirects,
            400..=499 => Self::RequestErrors,
            500..=599 => Self::ResponseErrors,
            _ => Self::Unknown,
        }
    }

    /// Returns true for the 2xx bucket
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Successful)
    }

    /// Returns true for the 3xx bucket
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirects)
    }

    /// Returns true for either error bucket
    pub fn is_error(&self) -> bool {
        matches!(self, Self::RequestErrors | Self::ResponseErrors)
    }

    /// Returns the stable string form of this class
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Successful => "successful",
            Self::Redirects => "redirects",
            Self::RequestErrors => "request_errors",
            Self::ResponseErrors => "response_errors",
        }
    }
}

impl fmt::Display for ResponseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
