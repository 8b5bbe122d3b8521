//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Establish a connection with a proXPN server.
///
/// Downloads the list of proXPN servers (cached after the first run), lets you
/// pick one, and starts openvpn against it. Stop the tunnel with CTRL+c.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Delete the cached servers XML file, forcing it to be re-downloaded
    #[arg(short = 'f', long)]
    pub force_download: bool,

    /// Delete the auth file, so that you will be asked for username and password again
    #[arg(short = 'r', long)]
    pub reset_credentials: bool,

    /// Show only UDP servers
    #[arg(short = 'u', long, conflicts_with = "tcp")]
    pub udp: bool,

    /// Show only TCP servers
    #[arg(short = 't', long)]
    pub tcp: bool,

    /// Configuration directory holding proxpn.ovpn, the server cache and credentials
    #[arg(long, env = "PROXPN_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
