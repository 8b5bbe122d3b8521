//! Small filesystem and process helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the current user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Whether the process already has root privileges.
#[cfg(unix)]
#[allow(unsafe_code)]
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe {
        libc::geteuid() == 0
    }
}

#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}

/// Restrict a file to owner read/write (chmod 600).
#[cfg(unix)]
pub fn secure_file(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
pub fn secure_file(path: &Path) -> io::Result<()> {
    fs::metadata(path).map(|_| ())
}

/// Remove a file if it exists. Returns whether something was deleted.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
