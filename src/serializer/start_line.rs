//! Start line: `{METHOD} {protocol}://{url} {version}`.

use super::EOL;
use crate::descriptor::RequestDescriptor;
use crate::error::{InvalidRequest, Result};

pub(crate) fn build_start_line(descriptor: &RequestDescriptor) -> Result<String> {
    let RequestDescriptor {
        method,
        protocol,
        url,
        protocol_version,
        ..
    } = descriptor;

    // all four are reported together
    if method.is_empty() || protocol.is_empty() || url.is_empty() || protocol_version.is_empty() {
        return Err(InvalidRequest::missing_field(
            "Method, url, protocol and protocolVersion must be not empty",
        ));
    }

    let url = url.trim_start_matches('/');
    Ok(format!(
        "{method} {}://{url} {protocol_version}{EOL}",
        protocol.to_lowercase()
    ))
}
