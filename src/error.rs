//! # Validation Errors
//!
//! Every way a request descriptor can be rejected surfaces as one
//! [`InvalidRequest`] value. The [`InvalidRequestKind`] tag tells callers which
//! class of problem was hit; the message is meant for humans; the optional
//! data payload is the offending fragment serialized as JSON.

use serde::Serialize;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, InvalidRequest>;

/// Class of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidRequestKind {
    /// A required scalar (method, header name, cookie value, ...) is empty or
    /// absent, or no host could be derived from the url
    MissingRequiredField,
    /// A collection that must hold at least one element is empty or was not
    /// a sequence at all
    EmptyOrWrongTypeCollection,
    /// A content type parameter, such as the multipart boundary, is missing
    MissingContentTypeParameter,
    /// The descriptor document itself could not be decoded
    MalformedDescriptor,
}

/// A rejected request descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid request object. {message}{}", data_suffix(.data))]
pub struct InvalidRequest {
    kind: InvalidRequestKind,
    message: String,
    data: Option<String>,
}

fn data_suffix(data: &Option<String>) -> String {
    match data {
        Some(data) => format!(". Data: {data}"),
        None => String::new(),
    }
}

impl InvalidRequest {
    pub fn new(kind: InvalidRequestKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            data: None,
        }
    }

    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(InvalidRequestKind::MissingRequiredField, message)
    }

    pub fn empty_collection(message: impl Into<String>) -> Self {
        Self::new(InvalidRequestKind::EmptyOrWrongTypeCollection, message)
    }

    pub fn missing_content_type_parameter(message: impl Into<String>) -> Self {
        Self::new(InvalidRequestKind::MissingContentTypeParameter, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(InvalidRequestKind::MalformedDescriptor, message)
    }

    /// Attach the offending fragment, serialized as compact JSON.
    ///
    /// A fragment that cannot be serialized leaves the error without data;
    /// the message alone still identifies the failure.
    pub fn with_data<T: Serialize + ?Sized>(mut self, fragment: &T) -> Self {
        self.data = serde_json::to_string(fragment).ok();
        self
    }

    /// Attach an already rendered context string
    pub fn with_raw_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn kind(&self) -> InvalidRequestKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}
