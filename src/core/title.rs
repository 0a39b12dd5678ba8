//! core/title.rs
//! Display title for a player row: configured title, else ID3 "Artist — Title", else file stem.

use std::path::Path;

use id3::{Tag, TagLike};
use log::debug;

pub fn display_title(configured: Option<&str>, locator: &str, path: Option<&Path>) -> String {
    if let Some(t) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        return t.to_string();
    }

    if let Some(path) = path {
        if let Some(t) = id3_title(path) {
            return t;
        }
        return filename_stem(path);
    }

    filename_stem(Path::new(locator))
}

fn id3_title(path: &Path) -> Option<String> {
    let tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) => {
            debug!("no ID3 tag in {}: {e}", path.display());
            return None;
        }
    };

    let title = tag.title().map(str::trim).filter(|s| !s.is_empty())?;
    match tag.artist().map(str::trim).filter(|s| !s.is_empty()) {
        Some(artist) => Some(format!("{artist} — {title}")),
        None => Some(title.to_string()),
    }
}

/// Ex: 'song.mp3' -> 'song'
fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Title")
        .to_string()
}
