//! Command-line interface module.
//!
//! Provides argument parsing and the interactive connect flow.

pub mod args;
pub mod connect;
