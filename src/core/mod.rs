//! The stages of a run: fetch, parse, and store credentials.

pub mod credentials;
pub mod downloader;
pub mod locations;
pub mod server_list;
