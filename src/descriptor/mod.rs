//! # Request Descriptor
//!
//! The structured, read-only description of an HTTP/1.x request that the
//! serializer turns into raw text.
//!
//! Field values are plain `String`s and `Vec`s that are allowed to be empty.
//! Emptiness is reported by the serializer, stage by stage, so a descriptor
//! can always be built or loaded and only fails when it is rendered.

mod body;
pub(crate) mod lenient;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidRequest, Result};

pub use body::Body;

/// Ordered header list, as written to the wire
pub type HeaderFields = Vec<HeaderField>;

/// A complete request description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    #[serde(default, deserialize_with = "lenient::string")]
    pub method: String,
    /// Scheme without `://`, e.g. `HTTP`
    #[serde(default, deserialize_with = "lenient::string")]
    pub protocol: String,
    /// Host, path and query; leading slashes are tolerated
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    /// e.g. `HTTP/1.1`
    #[serde(default, deserialize_with = "lenient::string")]
    pub protocol_version: String,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub headers: HeaderFields,
    #[serde(
        default,
        deserialize_with = "lenient::optional_sequence",
        skip_serializing_if = "Option::is_none"
    )]
    pub cookie: Option<Vec<CookiePair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

impl RequestDescriptor {
    pub fn new(
        method: impl Into<String>,
        protocol: impl Into<String>,
        url: impl Into<String>,
        protocol_version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            protocol: protocol.into(),
            url: url.into(),
            protocol_version: protocol_version.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: HeaderField) -> Self {
        self.headers.push(header);
        self
    }

    /// Append a cookie pair, creating the cookie list on first use
    pub fn with_cookie(mut self, pair: CookiePair) -> Self {
        self.cookie.get_or_insert_with(Vec::new).push(pair);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Render this descriptor as raw request text.
    pub fn to_raw_request(&self) -> Result<String> {
        crate::serializer::build(self)
    }

    /// Load a descriptor from a JSON document.
    ///
    /// A top-level `null` is rejected as a missing request object; anything
    /// that does not decode into a descriptor is a malformed descriptor.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Option<Self> = serde_json::from_str(text).map_err(|e| {
            InvalidRequest::malformed("Request object could not be decoded")
                .with_raw_data(e.to_string())
        })?;
        document.ok_or_else(|| InvalidRequest::missing_field("Request object must be not null"))
    }

    /// Load a descriptor from raw bytes, honouring a UTF-8 or UTF-16 BOM.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
        if had_errors {
            return Err(InvalidRequest::malformed(format!(
                "Request object is not valid {}",
                encoding.name()
            )));
        }
        tracing::trace!(encoding = encoding.name(), "decoded descriptor document");
        Self::from_json(&text)
    }
}

/// One header line: a name and its comma-joined values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub values: Vec<HeaderValue>,
}

impl HeaderField {
    /// A header with no values yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// A header carrying exactly one plain value
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(HeaderValue::new(value));
        self
    }

    /// Append a value rendered as `value;params`
    pub fn with_param_value(mut self, value: impl Into<String>, params: impl Into<String>) -> Self {
        self.values.push(HeaderValue::with_params(value, params));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderValue {
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,
    /// Appended verbatim after `;`. An empty string counts as absent.
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<String>,
}

impl HeaderValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            params: None,
        }
    }

    pub fn with_params(value: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            params: Some(params.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePair {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,
}

impl CookiePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A name/value pair carried in a form body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDataParam {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,
}

impl FormDataParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
