//! Server menu: numbering, column-major grid layout and selection.
//!
//! Options are laid out down each column before moving right. The row count
//! is `N / 5 + 1`, so an exact multiple of five still gets an extra row
//! (five options render as two rows of three and two).

use crate::constants;
use crate::error::{Error, Result};
use crate::state::{MenuOption, ServerEntry, Transport, TransportFilter};
use crate::ui::Console;

/// Number the selectable options, sorted by location name.
///
/// For each location the TCP option (if offered and allowed) comes before the
/// UDP one. Indices start at 1 and are contiguous.
pub fn enumerate_options(entries: &[ServerEntry], filter: TransportFilter) -> Vec<MenuOption> {
    let mut sorted: Vec<&ServerEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut options = Vec::new();
    for entry in sorted {
        for transport in [Transport::Tcp, Transport::Udp] {
            let Some(address) = entry.address(transport) else {
                continue;
            };
            if filter.allows(transport) {
                options.push(MenuOption {
                    index: options.len() + 1,
                    transport,
                    name: entry.name.clone(),
                    address: address.to_string(),
                });
            }
        }
    }

    log::debug!("{} menu options after filtering", options.len());
    options
}

/// Rows and columns used to lay out `n` options.
#[must_use]
pub const fn grid_dimensions(n: usize) -> (usize, usize) {
    let rows = n / constants::OPTIONS_PER_COLUMN + 1;
    let columns = if n == 0 { 0 } else { (n - 1) / rows + 1 };
    (rows, columns)
}

/// One menu cell: `*NN* proto name-padded-to-20`.
#[must_use]
pub fn format_cell(option: &MenuOption) -> String {
    format!(
        "*{:>2}* {} {:<width$}",
        option.index,
        option.transport,
        option.name,
        width = constants::NAME_COLUMN_WIDTH
    )
}

/// Render `options` as printable lines, column-major.
#[must_use]
pub fn layout_rows(options: &[MenuOption]) -> Vec<String> {
    let n = options.len();
    let (rows, columns) = grid_dimensions(n);

    (0..rows)
        .filter(|&i| i < n)
        .map(|i| {
            (0..columns)
                .map(|j| i + j * rows)
                .filter_map(|k| options.get(k))
                .map(format_cell)
                .collect::<String>()
        })
        .collect()
}

/// Print the header and the option grid.
pub fn show_menu(console: &mut impl Console, options: &[MenuOption]) -> Result<()> {
    console.say(constants::MSG_MENU_HEADER)?;
    for row in layout_rows(options) {
        console.say(&row)?;
    }
    Ok(())
}

/// Resolve the user's answer to a menu option.
///
/// # Errors
///
/// [`Error::InvalidSelection`] for non-numeric input, zero, or any number
/// greater than or equal to the option count.
pub fn select_option<'a>(options: &'a [MenuOption], answer: &str) -> Result<&'a MenuOption> {
    let invalid = || Error::InvalidSelection(answer.trim().to_string());

    let index: usize = answer.trim().parse().map_err(|_| invalid())?;
    if index == 0 || index >= options.len() {
        return Err(invalid());
    }
    options.iter().find(|o| o.index == index).ok_or_else(invalid)
}

/// Ask for a server number and return the matching option.
pub fn prompt_selection(console: &mut impl Console, options: &[MenuOption]) -> Result<MenuOption> {
    let answer = console.ask(constants::PROMPT_SERVER_NUMBER)?;
    let selected = select_option(options, &answer)?;
    log::info!(
        "selected #{} {} {} ({})",
        selected.index,
        selected.transport,
        selected.name,
        selected.address
    );
    Ok(selected.clone())
}
