//! HTTP download of the remote server list.

use crate::constants;
use crate::error::{Error, FetchFailure, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Downloads `url` and decodes the body as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::Fetch`] on connection failure, a non-2xx status, or a
/// body that is not valid UTF-8. No retry is attempted.
pub fn download_text(url: &str) -> Result<String> {
    fetch(url).map_err(|cause| Error::Fetch {
        url: url.to_string(),
        cause,
    })
}

fn fetch(url: &str) -> std::result::Result<String, FetchFailure> {
    let client = Client::builder()
        .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
        .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
        .build()?;

    log::info!("downloading server list from {url}");
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status));
    }

    let content = response.bytes()?;
    log::debug!("received {} bytes", content.len());
    Ok(String::from_utf8(content.to_vec())?)
}
