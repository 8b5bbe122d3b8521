//! On-disk credential store for `openvpn --auth-user-pass`.
//!
//! The file is written once, chmod 600, and trusted as-is afterwards. Only
//! `--reset-credentials` (or the user) removes it, so a half-written file
//! must never appear at the final path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::constants;
use crate::error::Result;
use crate::state::Credentials;
use crate::ui::Console;
use crate::utils;

/// Read stored credentials, if the file exists.
pub fn load(path: &Path) -> Result<Option<Credentials>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(Credentials::from_file_contents(&content)))
}

/// Write `credentials` to a new owner-only file. An existing file is never
/// overwritten.
pub fn store(path: &Path, credentials: &Credentials) -> Result<()> {
    let contents = credentials.to_file_contents();
    write_new_file(path, |file| file.write_all(contents.as_bytes()))?;
    log::info!("stored credentials in {}", path.display());
    Ok(())
}

/// Create `path` with the bytes produced by `write`, or not at all.
///
/// The data goes to a 0600 temp file in the same directory which is only
/// linked into place once fully written and synced.
fn write_new_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    utils::secure_file(tmp.path())?;
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(path).map_err(io::Error::from)?;
    Ok(())
}

/// Return stored credentials, prompting for and saving new ones if none exist.
pub fn load_or_prompt(path: &Path, console: &mut impl Console) -> Result<Credentials> {
    if let Some(existing) = load(path)? {
        log::debug!("using stored credentials from {}", path.display());
        return Ok(existing);
    }

    let username = console.ask(constants::PROMPT_USERNAME)?;
    let password = console.ask(constants::PROMPT_PASSWORD)?;
    let credentials = Credentials { username, password };
    store(path, &credentials)?;
    Ok(credentials)
}
