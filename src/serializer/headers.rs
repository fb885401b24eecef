//! Header block: one `{name}: {values}` line per header, in input order.

use super::EOL;
use crate::descriptor::{HeaderField, HeaderValue};
use crate::error::{InvalidRequest, Result};

pub(crate) fn build_header_block(headers: &[HeaderField]) -> Result<String> {
    if headers.is_empty() {
        return Err(InvalidRequest::empty_collection(
            "Headers list must be not empty",
        ));
    }

    let mut block = String::new();
    for header in headers {
        block.push_str(&header_line(header)?);
        block.push_str(EOL);
    }
    Ok(block)
}

fn header_line(header: &HeaderField) -> Result<String> {
    if header.name.is_empty() {
        return Err(InvalidRequest::missing_field("Header name must be not empty").with_data(header));
    }
    if header.values.is_empty() {
        return Err(
            InvalidRequest::empty_collection("Header values list must be not empty")
                .with_data(header),
        );
    }

    let values = header
        .values
        .iter()
        .map(|value| {
            render_value(value).ok_or_else(|| {
                InvalidRequest::missing_field("Header value must be not empty").with_data(header)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{}: {}", header.name, values.join(", ")))
}

fn render_value(value: &HeaderValue) -> Option<String> {
    if value.value.is_empty() {
        return None;
    }
    Some(match value.params.as_deref() {
        Some(params) if !params.is_empty() => format!("{};{params}", value.value),
        _ => value.value.clone(),
    })
}
