//! Terminal interaction: the console port and the server menu.

mod console;
pub mod menu;

pub use console::{Console, LineConsole};
