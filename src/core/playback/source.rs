//! core/playback/source.rs
//! Media source locator -> local path.
//!
//! Accepts plain paths and `file://` URIs. Anything with another scheme is rejected.

use std::path::{Path, PathBuf};

use crate::core::error::MediaError;

pub fn resolve_source(locator: &str) -> Result<PathBuf, MediaError> {
    let locator = locator.trim();

    let path = if let Some(rest) = locator.strip_prefix("file://") {
        PathBuf::from(rest)
    } else if let Some((scheme, _)) = locator.split_once("://") {
        return Err(MediaError::UnsupportedScheme(scheme.to_string()));
    } else {
        PathBuf::from(locator)
    };

    if !Path::new(&path).is_file() {
        return Err(MediaError::NotFound(path.display().to_string()));
    }

    Ok(path)
}
