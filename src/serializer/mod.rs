//! # Request Serializer
//!
//! Renders a [`RequestDescriptor`] as raw HTTP/1.x request text.
//!
//! ## Pipeline
//!
//! ```text
//! start line ──▶ host line ──▶ header block ──▶ cookie line ──▶ body
//! ```
//!
//! Each stage reads only the descriptor, validates its own inputs and either
//! yields its text or aborts the whole build. Nothing is returned unless every
//! stage succeeds.
//!
//! Lines are separated by a bare `\n`, never CRLF; consumers compare the
//! output byte for byte.

mod body;
mod cookie;
mod headers;
mod host;
mod start_line;

use crate::descriptor::RequestDescriptor;
use crate::error::Result;

pub use host::derive_host;

/// Line separator used throughout the output
pub const EOL: &str = "\n";

/// Render `descriptor` as raw request text.
pub fn build(descriptor: &RequestDescriptor) -> Result<String> {
    let start_line = start_line::build_start_line(descriptor)?;
    let host_line = host::build_host_line(&descriptor.url)?;
    let header_block = headers::build_header_block(&descriptor.headers)?;
    let cookie_line = cookie::build_cookie_line(descriptor.cookie.as_deref())?;
    let body = body::build_body(descriptor.body.as_ref())?;

    let raw = [start_line, host_line, header_block, cookie_line, body].concat();
    tracing::debug!(
        method = %descriptor.method,
        headers = descriptor.headers.len(),
        bytes = raw.len(),
        "built raw request"
    );
    Ok(raw)
}
