//! # Content Types
//!
//! The closed set of body encodings the serializer knows how to emit.

use std::fmt;

pub const FORM_DATA: &str = "multipart/form-data";
pub const X_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const JSON: &str = "application/json";
pub const PLAIN: &str = "text/plain";

/// Recognised body content types
///
/// Anything that is not one of the first three is treated as `Plain`, so the
/// body is passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    FormData,
    XWwwFormUrlencoded,
    Json,
    Plain,
}

impl ContentType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContentType::FormData => FORM_DATA,
            ContentType::XWwwFormUrlencoded => X_WWW_FORM_URLENCODED,
            ContentType::Json => JSON,
            ContentType::Plain => PLAIN,
        }
    }

    /// Map a declared content type to its encoder. Matching is exact, the way
    /// the descriptor carries it; unknown strings fall through to `Plain`.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            FORM_DATA => ContentType::FormData,
            X_WWW_FORM_URLENCODED => ContentType::XWwwFormUrlencoded,
            JSON => ContentType::Json,
            _ => ContentType::Plain,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
