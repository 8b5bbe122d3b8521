//! Error types shared by every stage of a run.
//!
//! All of them are terminal: `main` reports the error and exits non-zero.

use std::io;
use std::path::PathBuf;

/// Failures that abort a proxpn run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration directory or the static `OpenVPN` file is missing.
    #[error(
        "In order for proxpn to work, the folder '{}' must exist and contain a file \
         named '{}' listing all the openvpn connection parameters. It can be obtained \
         from the Windows installation of the official proXPN client.",
        dir.display(),
        ovpn.display()
    )]
    ConfigurationMissing { dir: PathBuf, ovpn: PathBuf },

    /// No configuration directory was given and there is no home to default to.
    #[error(
        "Could not determine the home directory to look for ~/.proxpn; \
         pass --config-dir or set PROXPN_CONFIG_DIR"
    )]
    HomeDirMissing,

    /// `config.toml` exists but could not be read or understood.
    #[error("Invalid settings in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// The server list could not be downloaded.
    #[error("Failed to download the server list from {url}: {cause}")]
    Fetch {
        url: String,
        #[source]
        cause: FetchFailure,
    },

    /// The cached or downloaded server list is malformed.
    #[error("Malformed server list: {0}")]
    Parse(String),

    /// The user picked something that is not on the menu.
    #[error("Invalid option number: '{0}'")]
    InvalidSelection(String),

    /// The VPN client could not be started at all.
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why a server list download failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    /// Client setup, connection, or body transfer failed.
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("response body is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
