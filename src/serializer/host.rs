//! Host line: `HOST: {host}`, with the host derived from the url alone.

use super::EOL;
use crate::error::{InvalidRequest, Result};

pub(crate) fn build_host_line(url: &str) -> Result<String> {
    let host = derive_host(url).ok_or_else(|| {
        InvalidRequest::missing_field("Host must be derivable from url").with_data(url)
    })?;
    Ok(format!("HOST: {host}{EOL}"))
}

/// Extract the host name from a descriptor url.
///
/// Scans start positions left to right. At each one an optional `www.` or
/// `www<digit>.` prefix (ASCII case-insensitive) is skipped, then the host is
/// one character followed by at least one non-`/` character. The first
/// position that yields a host wins, and leading `/` are trimmed from it.
///
/// The prefix only counts where the scan starts, so `//www.app.com/x` keeps
/// `www.app.com`. Returns `None` when no position yields a host.
pub fn derive_host(url: &str) -> Option<&str> {
    url.char_indices().find_map(|(start, _)| {
        let text = &url[start..];
        www_prefix_len(text)
            .and_then(|len| host_at(&text[len..]))
            .or_else(|| host_at(text))
            .map(|host| host.trim_start_matches('/'))
    })
}

/// One leading character of any kind, then the run of non-`/` characters
fn host_at(text: &str) -> Option<&str> {
    let first = text.chars().next()?.len_utf8();
    let run = text[first..].find('/').unwrap_or(text.len() - first);
    (run > 0).then(|| &text[..first + run])
}

fn www_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.len() < 4 || !bytes[..3].eq_ignore_ascii_case(b"www") {
        return None;
    }
    match bytes[3] {
        b'.' => Some(4),
        digit if digit.is_ascii_digit() && bytes.get(4) == Some(&b'.') => Some(5),
        _ => None,
    }
}
