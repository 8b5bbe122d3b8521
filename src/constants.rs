//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout proxpn,
//! including file names, the server list endpoint, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Name of the configuration directory inside the user's home.
pub const CONFIG_DIR_NAME: &str = ".proxpn";
/// Cached copy of the remote server list.
pub const LOCATIONS_FILE_NAME: &str = "locations-v2.xml";
/// Static `OpenVPN` configuration shipped with the proXPN client.
pub const OPENVPN_CONF_FILE_NAME: &str = "proxpn.ovpn";
/// Two-line username/password file handed to `openvpn`.
pub const CREDENTIALS_FILE_NAME: &str = "auth.conf";
/// Optional settings overrides.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

// === Server List Endpoint ===

/// Where the up-to-date list of proXPN servers is published.
pub const DEFAULT_SERVERS_URL: &str = "http://www.proxpn.com/updater/locations-v2.xml";
/// Timeout for the server list download in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// === VPN Client ===

/// Binary used to establish the tunnel.
pub const DEFAULT_OPENVPN_BIN: &str = "openvpn";
/// Privilege escalation helper prefixed when not running as root.
pub const SUDO_BIN: &str = "sudo";
/// Port every proXPN endpoint listens on.
pub const DEFAULT_REMOTE_PORT: u16 = 443;

// === Menu Layout ===

/// Target number of options per column.
pub const OPTIONS_PER_COLUMN: usize = 5;
/// Width the location name is padded to inside a menu cell.
pub const NAME_COLUMN_WIDTH: usize = 20;

// === Prompts ===

pub const MSG_MENU_HEADER: &str = "List of available servers:";
pub const PROMPT_SERVER_NUMBER: &str = "Enter the server number: ";
pub const PROMPT_USERNAME: &str = "Username: ";
pub const PROMPT_PASSWORD: &str = "Password: ";
pub const MSG_COMMAND_PREVIEW: &str = "This is the 'openvpn' command that we are going to execute:";
pub const PROMPT_CONFIRM_LAUNCH: &str = "If that's OK with you, press ENTER. Otherwise press CTRL+c";
