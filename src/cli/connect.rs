//! The interactive connect flow: one pass from flags to a running tunnel.

use crate::cli::args::Args;
use crate::config::AppConfig;
use crate::core::{credentials, locations, server_list};
use crate::error::Result;
use crate::state::TransportFilter;
use crate::ui::{menu, Console};
use crate::{utils, vpn};

/// Run the whole flow against `console`.
pub fn run(args: &Args, console: &mut impl Console) -> Result<()> {
    let config = AppConfig::resolve(args.config_dir.clone())?;
    log::debug!("configuration directory: {}", config.config_dir.display());

    if args.force_download && utils::remove_if_exists(&config.cache_file)? {
        log::info!("removed cached server list");
    }
    if args.reset_credentials && utils::remove_if_exists(&config.credentials_file)? {
        log::info!("removed stored credentials");
    }
    let filter = TransportFilter::from_flags(args.tcp, args.udp);

    config.ensure_ready()?;

    let listing = server_list::load(&config.cache_file, &config.settings.servers_url)?;
    let entries = locations::parse_locations(&listing)?;
    let options = menu::enumerate_options(&entries, filter);

    menu::show_menu(console, &options)?;
    let selected = menu::prompt_selection(console, &options)?;

    console.say("")?;
    credentials::load_or_prompt(&config.credentials_file, console)?;

    let plan = vpn::LaunchPlan::build(&selected, &config, utils::is_root());
    vpn::confirm_and_run(&plan, console)?;
    Ok(())
}
