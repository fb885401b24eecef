//! Body section: always starts with the blank separator line, then the
//! content-type specific encoding.

use super::EOL;
use crate::content_type::ContentType;
use crate::descriptor::{Body, FormDataParam};
use crate::error::{InvalidRequest, Result};

/// Fixed dash run in front of every multipart delimiter
const MULTIPART_DASHES: &str = "-----------------------";

pub(crate) fn build_body(body: Option<&Body>) -> Result<String> {
    let Some(body) = body else {
        return Ok(EOL.to_string());
    };

    let text = match body {
        Body::Multipart { boundary, params } => encode_multipart(boundary, params)?,
        Body::UrlEncoded { params } => encode_url_encoded(params)?,
        Body::Json { json } => json.clone(),
        Body::Plain { plain, .. } => plain.clone(),
    };
    tracing::trace!(content_type = body.mime(), len = text.len(), "encoded body");

    Ok(format!("{EOL}{text}"))
}

fn encode_multipart(boundary: &str, params: &[FormDataParam]) -> Result<String> {
    if boundary.is_empty() {
        return Err(InvalidRequest::missing_content_type_parameter(format!(
            "Body with ContentType={} must have boundary in ContentType header",
            ContentType::FormData
        )));
    }
    validate_params(ContentType::FormData, params)?;

    let delimiter = format!("{MULTIPART_DASHES}{boundary}");
    let mut text = String::new();
    for param in params {
        text.push_str(&delimiter);
        text.push_str(EOL);
        text.push_str(&format!(
            "Content-Disposition: form-data; name=\"{}\"",
            param.name
        ));
        text.push_str(EOL);
        text.push_str(EOL);
        text.push_str(&param.value);
        text.push_str(EOL);
    }
    text.push_str(&delimiter);
    text.push_str("--");
    Ok(text)
}

fn encode_url_encoded(params: &[FormDataParam]) -> Result<String> {
    validate_params(ContentType::XWwwFormUrlencoded, params)?;

    Ok(params
        .iter()
        .map(|param| format!("{}={}", param.name, param.value))
        .collect::<Vec<_>>()
        .join("&"))
}

/// Checks the whole list up front so no partial body is ever encoded.
fn validate_params(content_type: ContentType, params: &[FormDataParam]) -> Result<()> {
    if params.is_empty() {
        return Err(InvalidRequest::empty_collection(format!(
            "Body with ContentType={content_type} must have parameters"
        )));
    }
    match params
        .iter()
        .find(|param| param.name.is_empty() || param.value.is_empty())
    {
        Some(param) => Err(
            InvalidRequest::missing_field("FormData parameter must have name and value")
                .with_data(param),
        ),
        None => Ok(()),
    }
}
