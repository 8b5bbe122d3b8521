//! Cached server list provider.
//!
//! The cache never expires: once a listing has been downloaded it is reused
//! verbatim until the file is deleted (`--force-download`).

use std::fs;
use std::path::Path;

use crate::core::downloader;
use crate::error::Result;

/// Returns the cached listing, downloading and caching it first if needed.
pub fn load(cache_file: &Path, url: &str) -> Result<String> {
    load_or_fetch(cache_file, url, downloader::download_text)
}

/// Same as [`load`] with the download step supplied by the caller.
pub fn load_or_fetch<F>(cache_file: &Path, url: &str, fetch: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<String>,
{
    if cache_file.is_file() {
        log::debug!("using cached server list {}", cache_file.display());
        return Ok(fs::read_to_string(cache_file)?);
    }

    log::debug!("no cached server list at {}", cache_file.display());
    let text = fetch(url)?;
    fs::write(cache_file, &text)?;
    log::info!("cached server list at {}", cache_file.display());
    Ok(text)
}
