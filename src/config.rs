//! Runtime configuration resolved once at startup.
//!
//! Everything lives under a single directory (`~/.proxpn` unless overridden):
//! the static `OpenVPN` file, the cached server list, the credentials file and
//! an optional `config.toml` with settings overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::constants;
use crate::error::{Error, Result};

/// Tunable settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where to download the server list from.
    pub servers_url: String,
    /// Port passed to `openvpn --remote`.
    pub remote_port: u16,
    /// VPN client binary.
    pub openvpn_bin: String,
    /// Prefix the client with `sudo` when not already root.
    pub use_sudo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            servers_url: constants::DEFAULT_SERVERS_URL.to_string(),
            remote_port: constants::DEFAULT_REMOTE_PORT,
            openvpn_bin: constants::DEFAULT_OPENVPN_BIN.to_string(),
            use_sudo: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let invalid = |reason: String| Error::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let settings: Self = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;

        Url::parse(&settings.servers_url)
            .map_err(|e| invalid(format!("servers_url '{}': {e}", settings.servers_url)))?;
        if settings.openvpn_bin.trim().is_empty() {
            return Err(invalid("openvpn_bin must not be empty".to_string()));
        }

        Ok(settings)
    }
}

/// Resolved paths and settings for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_dir: PathBuf,
    pub cache_file: PathBuf,
    pub ovpn_file: PathBuf,
    pub credentials_file: PathBuf,
    pub settings: Settings,
}

impl AppConfig {
    /// Build the configuration for `config_dir`, or `~/.proxpn` when not given.
    pub fn resolve(config_dir: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with_home(config_dir, crate::utils::home_dir())
    }

    fn resolve_with_home(config_dir: Option<PathBuf>, home: Option<PathBuf>) -> Result<Self> {
        let dir = match (config_dir, home) {
            (Some(dir), _) => dir,
            (None, Some(home)) => home.join(constants::CONFIG_DIR_NAME),
            (None, None) => return Err(Error::HomeDirMissing),
        };
        Self::from_dir(dir)
    }

    /// Build the configuration rooted at `dir`.
    pub fn from_dir(dir: PathBuf) -> Result<Self> {
        let settings = Settings::load(&dir.join(constants::SETTINGS_FILE_NAME))?;
        Ok(Self {
            cache_file: dir.join(constants::LOCATIONS_FILE_NAME),
            ovpn_file: dir.join(constants::OPENVPN_CONF_FILE_NAME),
            credentials_file: dir.join(constants::CREDENTIALS_FILE_NAME),
            config_dir: dir,
            settings,
        })
    }

    /// Fails unless the directory and the static `OpenVPN` file are in place.
    pub fn ensure_ready(&self) -> Result<()> {
        if self.config_dir.is_dir() && self.ovpn_file.is_file() {
            Ok(())
        } else {
            Err(Error::ConfigurationMissing {
                dir: self.config_dir.clone(),
                ovpn: self.ovpn_file.clone(),
            })
        }
    }
}
