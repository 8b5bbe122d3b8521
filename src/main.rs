//! proxpn - pick a proXPN server and connect to it with openvpn.

mod cli;
mod config;
mod constants;
mod core;
mod error;
mod state;
mod ui;
mod utils;
mod vpn;

use clap::Parser;
use color_eyre::Result;

use crate::cli::args::Args;
use crate::ui::LineConsole;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut console = LineConsole::stdio();
    cli::connect::run(&args, &mut console)?;
    Ok(())
}
