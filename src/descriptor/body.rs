//! # Request Body
//!
//! `Body` is keyed by its content type. In a descriptor document it is one
//! flat object (`contentType`, `boundary`, `formDataParams`, `json`, `plain`);
//! in Rust each content type gets its own variant so the serializer can match
//! on it exhaustively.

use serde::{Deserialize, Serialize};

use super::{lenient, FormDataParam, HeaderField};
use crate::content_type::{self, ContentType};
use crate::error::{InvalidRequest, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBody", into = "RawBody")]
pub enum Body {
    /// `multipart/form-data`
    Multipart {
        boundary: String,
        params: Vec<FormDataParam>,
    },
    /// `application/x-www-form-urlencoded`
    UrlEncoded { params: Vec<FormDataParam> },
    /// `application/json`, passed through verbatim
    Json { json: String },
    /// Any other content type, passed through verbatim
    Plain { content_type: String, plain: String },
}

impl Body {
    pub fn multipart(boundary: impl Into<String>, params: Vec<FormDataParam>) -> Self {
        Body::Multipart {
            boundary: boundary.into(),
            params,
        }
    }

    pub fn url_encoded(params: Vec<FormDataParam>) -> Self {
        Body::UrlEncoded { params }
    }

    pub fn json(json: impl Into<String>) -> Self {
        Body::Json { json: json.into() }
    }

    /// A `text/plain` body
    pub fn plain(plain: impl Into<String>) -> Self {
        Body::Plain {
            content_type: content_type::PLAIN.to_string(),
            plain: plain.into(),
        }
    }

    /// A verbatim body declared with an arbitrary content type.
    ///
    /// `application/json` becomes a [`Body::Json`]. The form content types
    /// carry parameters, not text, and are rejected; use
    /// [`Body::multipart`] or [`Body::url_encoded`] for them.
    pub fn other(content_type: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let content_type = content_type.into();
        match ContentType::from_mime(&content_type) {
            ContentType::Json => Ok(Body::Json { json: text.into() }),
            ContentType::Plain => Ok(Body::Plain {
                content_type,
                plain: text.into(),
            }),
            form => Err(InvalidRequest::empty_collection(format!(
                "Body with ContentType={form} must have parameters"
            ))),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Body::Multipart { .. } => ContentType::FormData,
            Body::UrlEncoded { .. } => ContentType::XWwwFormUrlencoded,
            Body::Json { .. } => ContentType::Json,
            Body::Plain { .. } => ContentType::Plain,
        }
    }

    /// The content type string as declared
    pub fn mime(&self) -> &str {
        match self {
            Body::Plain { content_type, .. } => content_type,
            other => other.content_type().as_str(),
        }
    }

    /// A `Content-Type` header matching this body, with the boundary
    /// parameter for multipart bodies.
    pub fn content_type_header(&self) -> HeaderField {
        let header = HeaderField::new("Content-Type");
        match self {
            Body::Multipart { boundary, .. } => {
                header.with_param_value(self.mime(), format!("boundary={boundary}"))
            }
            _ => header.with_value(self.mime()),
        }
    }
}

/// Document shape of a body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBody {
    #[serde(default, deserialize_with = "lenient::string")]
    content_type: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    boundary: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::sequence",
        skip_serializing_if = "Vec::is_empty"
    )]
    form_data_params: Vec<FormDataParam>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    json: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    plain: Option<String>,
}

impl From<RawBody> for Body {
    fn from(raw: RawBody) -> Self {
        match ContentType::from_mime(&raw.content_type) {
            ContentType::FormData => Body::Multipart {
                boundary: raw.boundary.unwrap_or_default(),
                params: raw.form_data_params,
            },
            ContentType::XWwwFormUrlencoded => Body::UrlEncoded {
                params: raw.form_data_params,
            },
            ContentType::Json => Body::Json {
                json: raw.json.unwrap_or_default(),
            },
            ContentType::Plain => Body::Plain {
                content_type: raw.content_type,
                plain: raw.plain.unwrap_or_default(),
            },
        }
    }
}

impl From<Body> for RawBody {
    fn from(body: Body) -> Self {
        let content_type = body.mime().to_string();
        match body {
            Body::Multipart { boundary, params } => RawBody {
                content_type,
                boundary: Some(boundary),
                form_data_params: params,
                ..RawBody::default()
            },
            Body::UrlEncoded { params } => RawBody {
                content_type,
                form_data_params: params,
                ..RawBody::default()
            },
            Body::Json { json } => RawBody {
                content_type,
                json: Some(json),
                ..RawBody::default()
            },
            Body::Plain { plain, .. } => RawBody {
                content_type,
                plain: Some(plain),
                ..RawBody::default()
            },
        }
    }
}
