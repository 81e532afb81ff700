//! Scoped reads of resolved resources.
//!
//! Each read opens the resource, consumes it fully and drops the handle
//! before returning, on success and on failure alike.

use crate::{Error, Location, Result};
use std::io::Read;

/// Read a resource as UTF-8 text.
pub fn read_text(location: &Location) -> Result<String> {
    tracing::trace!(%location, "Reading resource");
    let mut reader = location.open()?;
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::io(location, e))?;
    Ok(content)
}

/// Read a resource as raw bytes.
pub fn read_bytes(location: &Location) -> Result<Vec<u8>> {
    tracing::trace!(%location, "Reading resource bytes");
    let mut reader = location.open()?;
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| Error::io(location, e))?;
    Ok(content)
}
