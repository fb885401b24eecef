//! # Descriptor Source
//!
//! Reading descriptor documents from a file or stdin and writing raw request
//! text to a file or stdout, for the `rawline` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::config::STDIO_PATH;
use crate::descriptor::RequestDescriptor;

/// Expand `~` and environment variables in a user supplied path
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand path '{path}'"))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Read the raw bytes of a descriptor document
pub fn read_source(path: &str) -> Result<Vec<u8>> {
    if path == STDIO_PATH {
        if atty::is(atty::Stream::Stdin) {
            bail!("No request descriptor on stdin. Pipe a JSON document or pass --input <FILE>");
        }
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read request descriptor from stdin")?;
        tracing::debug!(bytes = bytes.len(), "read descriptor from stdin");
        return Ok(bytes);
    }

    let file = expand_path(path)?;
    let bytes = fs::read(&file)
        .with_context(|| format!("Failed to read request descriptor '{}'", file.display()))?;
    tracing::debug!(path = %file.display(), bytes = bytes.len(), "read descriptor file");
    Ok(bytes)
}

/// Read and decode a descriptor document
pub fn load_descriptor(path: &str) -> Result<RequestDescriptor> {
    let bytes = read_source(path)?;
    let descriptor = RequestDescriptor::from_slice(&bytes)
        .with_context(|| format!("Failed to load request descriptor from '{path}'"))?;
    Ok(descriptor)
}

/// Write the raw request exactly as built, without a trailing newline
pub fn write_raw_request(path: &str, raw: &str) -> Result<()> {
    if path == STDIO_PATH {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(raw.as_bytes())
            .context("Failed to write raw request to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        return Ok(());
    }

    let file = expand_path(path)?;
    fs::write(&file, raw)
        .with_context(|| format!("Failed to write raw request to '{}'", file.display()))?;
    tracing::debug!(path = %file.display(), bytes = raw.len(), "wrote raw request");
    Ok(())
}
