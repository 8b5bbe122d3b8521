//! Plain data types passed between the stages of a run.

mod credentials;
mod server;

pub use credentials::Credentials;
pub use server::{MenuOption, ServerEntry, Transport, TransportFilter};
